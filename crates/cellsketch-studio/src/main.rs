use std::path::PathBuf;

use anyhow::{Context, Result};
use cellsketch_engine::coords::Vec2;
use cellsketch_engine::logging::{init_logging, LoggingConfig};
use cellsketch_engine::paint::Color;
use cellsketch_engine::{compose_layers, Compositor, Layer, LayerId, RenderConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ┌────────────────────────────────────────┐");
    println!("  │         CELLSKETCH STUDIO v0.1         │");
    println!("  │   grid rasterizer  ·  layer cache      │");
    println!("  └────────────────────────────────────────┘");
    println!();

    let mut compositor = Compositor::new(RenderConfig::default()).context("starting compositor")?;

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let bytes = std::fs::read(&path).with_context(|| format!("reading font {}", path.display()))?;
            compositor
                .load_font(&bytes)
                .with_context(|| format!("parsing font {}", path.display()))?;
        }
        None => match system_font() {
            Some(bytes) => {
                if let Err(e) = compositor.load_font(&bytes) {
                    log::warn!("system font unusable: {e}");
                }
            }
            None => log::info!("no font found; text will be exported but not painted"),
        },
    }

    let layers = demo_layers();

    let first = compositor.render_frame(&layers);
    let second = compositor.render_frame(&layers);
    anyhow::ensure!(first == second, "cached frame differs from fresh frame");

    println!("{}", compose_layers(&layers).to_text());
    println!();

    let stats = compositor.cache_stats();
    println!(
        "  frame {}x{}  ·  cache: {} hits, {} misses, {} entries",
        first.width(),
        first.height(),
        stats.hits,
        stats.misses,
        compositor.cache().len()
    );
    println!();
    Ok(())
}

fn system_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/noto/NotoSansMono-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}

fn demo_layers() -> Vec<Layer> {
    let v = Vec2::new;
    let ink = Color::rgb(0x22, 0x22, 0x22);

    let mut diagram = Layer::new(LayerId(1), "diagram");
    diagram.push_box(v(0.0, 0.0), v(12.0, 4.0), ink);
    diagram.push_box(v(20.0, 0.0), v(32.0, 4.0), ink);
    diagram.push_line(v(12.0, 2.0), v(20.0, 2.0), ink);
    diagram.push_line(v(6.0, 4.0), v(6.0, 8.0), ink);
    diagram.push_box(v(0.0, 8.0), v(12.0, 12.0), ink);
    diagram.push_line(v(14.0, 6.0), v(18.0, 10.0), Color::rgb(0x88, 0x88, 0x88));

    let mut labels = Layer::new(LayerId(2), "labels");
    labels.push_text(v(2.0, 2.0), "client", 16.0, ink);
    labels.push_text(v(22.0, 2.0), "server", 16.0, ink);
    labels.push_text(v(2.0, 10.0), "cache", 16.0, ink);

    let mut highlight = Layer::new(LayerId(3), "highlight");
    highlight.push_filled_box(v(26.0, 6.0), v(30.0, 8.0), ink, Color::from_hex("#3b82f680"));
    highlight.locked = true;

    vec![diagram, labels, highlight]
}
