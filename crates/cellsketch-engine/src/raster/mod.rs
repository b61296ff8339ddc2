//! Vector → glyph rasterization.
//!
//! Pipeline for one layer:
//! 1. every line is stepped into cells and merged into the map (insertion order)
//! 2. every box is expanded into cells and merged against that map
//! 3. text elements overwrite their cells, later text winning
//!
//! This is the single implementation of the grid rules; painters and text
//! exporters both consume its output so they stay visually identical.
//! Everything here is pure and safe to run on worker threads.

pub mod boxes;
pub mod glyph;
pub mod line;
pub mod merge;

mod map;

pub use glyph::{Corner, GlyphClass, Junction, Orientation};
pub use map::{CellOrigin, GlyphCell, GlyphMap, PlacedText};
pub use merge::merge_glyph;

use crate::scene::Layer;

/// Largest number of cells a single line or box may cover.
///
/// Bigger elements are skipped like malformed ones rather than allocated.
pub const MAX_ELEMENT_CELLS: u64 = 1 << 22;

/// Computes the canonical glyph map of a layer.
///
/// Elements with non-finite or out-of-range coordinates, and lines or boxes
/// covering more than [`MAX_ELEMENT_CELLS`], are skipped with a warning; the
/// rest of the layer is unaffected. Visibility is not consulted.
pub fn rasterize_layer(layer: &Layer) -> GlyphMap {
    let mut map = GlyphMap::new();

    for (i, l) in layer.lines.iter().enumerate() {
        let (Some(a), Some(b)) = (l.start.to_grid(), l.end.to_grid()) else {
            log::warn!("layer {:?}: skipping line {i} with malformed endpoints {:?} -> {:?}", layer.id, l.start, l.end);
            continue;
        };
        let count = line::line_cell_count(a, b);
        if count > MAX_ELEMENT_CELLS {
            log::warn!("layer {:?}: skipping line {i} covering {count} cells", layer.id);
            continue;
        }
        for cell in line::rasterize_line(a, b, l.color) {
            map.merge(cell);
        }
    }

    for (i, b) in layer.boxes.iter().enumerate() {
        let (Some(p0), Some(p1)) = (b.start.to_grid(), b.end.to_grid()) else {
            log::warn!("layer {:?}: skipping box {i} with malformed corners {:?} / {:?}", layer.id, b.start, b.end);
            continue;
        };
        let count = boxes::box_cell_count(p0, p1, b.filled);
        if count > MAX_ELEMENT_CELLS {
            log::warn!("layer {:?}: skipping box {i} covering {count} cells", layer.id);
            continue;
        }
        for cell in boxes::rasterize_box(p0, p1, b.filled, b.color, b.effective_fill()) {
            map.merge(cell);
        }
    }

    for (i, t) in layer.texts.iter().enumerate() {
        let Some(origin) = t.position.to_grid() else {
            log::warn!("layer {:?}: skipping text {i} with malformed position {:?}", layer.id, t.position);
            continue;
        };
        map.place_text(PlacedText {
            origin,
            content: t.content.clone(),
            font_size: t.font_size,
            color: t.color,
        });
    }

    log::trace!("layer {:?}: rasterized {} elements into {} cells", layer.id, layer.element_count(), map.len());
    map
}

/// Flattens the visible layers into one map, back to front.
///
/// Cells from later layers replace earlier ones outright; merging only
/// happens within a layer. Intended for text-based exporters.
pub fn compose_layers<'a>(layers: impl IntoIterator<Item = &'a Layer>) -> GlyphMap {
    let mut out = GlyphMap::new();
    for layer in layers.into_iter().filter(|l| l.visible) {
        out.overlay(rasterize_layer(layer));
    }
    out
}
