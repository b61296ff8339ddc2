use crate::coords::GridPoint;
use crate::paint::Color;

use super::glyph::{DIAGONAL_FALLING, DIAGONAL_RISING, HORIZONTAL, VERTICAL};
use super::{CellOrigin, GlyphCell};

/// Upper bound on the up-front allocation for one segment.
const PREALLOC_LIMIT: usize = 4096;

/// Glyph used for every cell of a segment with the given extents.
///
/// The choice depends on the segment's overall slope, not on individual
/// steps: mostly horizontal is `─`, mostly vertical is `│`, and an exact
/// diagonal is `\` when both axes move the same way (or not at all) and `/`
/// otherwise.
pub fn line_glyph(start: GridPoint, end: GridPoint) -> char {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    if dx.abs() > dy.abs() {
        HORIZONTAL
    } else if dy.abs() > dx.abs() {
        VERTICAL
    } else if (dx > 0) == (dy > 0) {
        DIAGONAL_FALLING
    } else {
        DIAGONAL_RISING
    }
}

/// Number of cells [`rasterize_line`] emits for this segment.
pub fn line_cell_count(start: GridPoint, end: GridPoint) -> u64 {
    let dx = (i64::from(end.x) - i64::from(start.x)).unsigned_abs();
    let dy = (i64::from(end.y) - i64::from(start.y)).unsigned_abs();
    dx.max(dy) + 1
}

/// Rasterizes a segment with integer Bresenham stepping.
///
/// Both endpoints are included. The walk always starts from the row-major
/// smaller endpoint, so `(a, b)` and `(b, a)` occupy the same cells.
pub fn rasterize_line(start: GridPoint, end: GridPoint, color: Color) -> Vec<GlyphCell> {
    let (a, b) = if end < start { (end, start) } else { (start, end) };
    let ch = line_glyph(a, b);

    let (x1, y1) = (i64::from(b.x), i64::from(b.y));
    let (mut x, mut y) = (i64::from(a.x), i64::from(a.y));
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let steps = dx.max(dy) as usize;
    let mut cells = Vec::with_capacity(steps.saturating_add(1).min(PREALLOC_LIMIT));

    loop {
        // x/y stay between the two i32 endpoints.
        let point = GridPoint::new(x as i32, y as i32);
        cells.push(GlyphCell::new(point, ch, color, CellOrigin::Line));

        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    cells
}
