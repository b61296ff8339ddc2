//! Glyph-map → pixel painting.
//!
//! Box-drawing, block and diagonal glyphs are drawn as cell-exact strokes so
//! neighbouring cells join without seams at any cell size. Everything else
//! goes through the [`FontSystem`].

use crate::coords::GridPoint;
use crate::paint::Color;
use crate::raster::glyph::{BLOCK, DIAGONAL_FALLING, DIAGONAL_RISING};
use crate::raster::{CellOrigin, GlyphMap, PlacedText};
use crate::text::FontSystem;

use super::PixelBuffer;

/// Which sides of the cell a box-drawing glyph reaches.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
struct Arms {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Arms {
    const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self { up, down, left, right }
    }

    fn of(ch: char) -> Option<Self> {
        let arms = match ch {
            '─' => Self::new(false, false, true, true),
            '│' => Self::new(true, true, false, false),
            '┌' => Self::new(false, true, false, true),
            '┐' => Self::new(false, true, true, false),
            '└' => Self::new(true, false, false, true),
            '┘' => Self::new(true, false, true, false),
            '├' => Self::new(true, true, false, true),
            '┤' => Self::new(true, true, true, false),
            '┬' => Self::new(false, true, true, true),
            '┴' => Self::new(true, false, true, true),
            '┼' => Self::new(true, true, true, true),
            _ => return None,
        };
        Some(arms)
    }
}

/// Stroke width for procedural glyphs at a given cell size.
#[inline]
pub fn stroke_width(cell_size: u32) -> u32 {
    (cell_size / 8).max(1)
}

/// True if `ch` is painted without a font.
pub fn is_procedural(ch: char) -> bool {
    Arms::of(ch).is_some() || matches!(ch, BLOCK | DIAGONAL_FALLING | DIAGONAL_RISING)
}

/// Coverage mask of a procedural glyph, `size * size` bytes row-major.
///
/// Overlapping strokes share one mask so translucent colors are blended once.
fn procedural_mask(ch: char, size: u32) -> Option<Vec<u8>> {
    if size == 0 {
        return None;
    }
    let n = size as usize;
    let mut mask = vec![0u8; n * n];
    let t = stroke_width(size) as usize;
    // Top-left of the centred stroke.
    let c = (n - t) / 2;

    let mut fill = |x0: usize, y0: usize, w: usize, h: usize| {
        for y in y0..(y0 + h).min(n) {
            mask[y * n + x0..y * n + (x0 + w).min(n)].fill(255);
        }
    };

    if let Some(arms) = Arms::of(ch) {
        if arms.left {
            fill(0, c, c + t, t);
        }
        if arms.right {
            fill(c, c, n - c, t);
        }
        if arms.up {
            fill(c, 0, t, c + t);
        }
        if arms.down {
            fill(c, c, t, n - c);
        }
        return Some(mask);
    }

    match ch {
        BLOCK => fill(0, 0, n, n),
        DIAGONAL_FALLING | DIAGONAL_RISING => {
            let half = t / 2;
            for y in 0..n {
                let centre = if ch == DIAGONAL_FALLING { y } else { n - 1 - y };
                let x0 = centre.saturating_sub(half);
                fill(x0, y, t, 1);
            }
        }
        _ => return None,
    }
    Some(mask)
}

/// Pixel origin of a grid cell. `i64` keeps extreme grid points exact.
#[inline]
fn cell_origin(p: GridPoint, cell_size: u32) -> (i64, i64) {
    let s = i64::from(cell_size);
    (i64::from(p.x) * s, i64::from(p.y) * s)
}

#[inline]
fn visible(buf: &PixelBuffer, x: i64, y: i64, w: i64, h: i64) -> bool {
    x < i64::from(buf.width())
        && y < i64::from(buf.height())
        && x.saturating_add(w) > 0
        && y.saturating_add(h) > 0
}

/// Paints one character into the cell whose top-left pixel is `(x, y)`.
///
/// `px` is the font size used for non-procedural characters.
pub fn paint_char(
    buf: &mut PixelBuffer,
    fonts: &mut FontSystem,
    ch: char,
    x: i64,
    y: i64,
    cell_size: u32,
    px: u32,
    color: Color,
) {
    if ch.is_whitespace() || cell_size == 0 {
        return;
    }

    if let Some(mask) = procedural_mask(ch, cell_size) {
        let n = cell_size as usize;
        for (i, &cov) in mask.iter().enumerate() {
            if cov != 0 {
                buf.blend_pixel(x + (i % n) as i64, y + (i / n) as i64, color, cov);
            }
        }
        return;
    }

    let Some(glyph) = fonts.glyph(ch, px) else {
        return;
    };
    let gx = x + i64::from(glyph.left);
    let gy = y + i64::from(glyph.top);
    for row in 0..glyph.height {
        for col in 0..glyph.width {
            let cov = glyph.coverage[row * glyph.width + col];
            buf.blend_pixel(gx + col as i64, gy + row as i64, color, cov);
        }
    }
}

/// Resolves a text element's font size, falling back to the cell size.
fn text_px(text: &PlacedText, cell_size: u32) -> u32 {
    if text.font_size.is_finite() && text.font_size >= 1.0 {
        text.font_size.round().min(u32::MAX as f32) as u32
    } else {
        cell_size
    }
}

/// Paints text element `index`, skipping cells a later text element took over.
fn paint_text(buf: &mut PixelBuffer, fonts: &mut FontSystem, map: &GlyphMap, index: usize, cell_size: u32) {
    let text = &map.texts()[index];
    let px = text_px(text, cell_size);
    let extent = i64::from(cell_size.max(px));
    for (point, ch) in text.cells() {
        if !map.is_owned_by_text(point, index) {
            continue;
        }
        let (x, y) = cell_origin(point, cell_size);
        if visible(buf, x, y, extent, extent) {
            paint_char(buf, fonts, ch, x, y, cell_size, px, text.color);
        }
    }
}

/// Paints a layer's glyph map onto `buf` at `cell_size` pixels per cell.
///
/// Line and box cells are drawn first; text elements are then painted in
/// insertion order with their own size and color. Cells covered by text are
/// left to the text pass.
pub fn paint_glyph_map(buf: &mut PixelBuffer, fonts: &mut FontSystem, map: &GlyphMap, cell_size: u32) {
    if cell_size == 0 {
        return;
    }
    let s = i64::from(cell_size);

    for cell in map.iter().filter(|c| !matches!(c.origin, CellOrigin::Text(_))) {
        let (x, y) = cell_origin(cell.point, cell_size);
        if !visible(buf, x, y, s, s) {
            continue;
        }
        paint_char(buf, fonts, cell.ch, x, y, cell_size, cell_size, cell.color);
    }

    for index in 0..map.texts().len() {
        paint_text(buf, fonts, map, index, cell_size);
    }
}
