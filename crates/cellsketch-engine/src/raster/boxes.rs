use crate::coords::{GridBounds, GridPoint};
use crate::paint::Color;

use super::glyph::{Corner, BLOCK, HORIZONTAL, VERTICAL};
use super::{CellOrigin, GlyphCell};

/// Outline glyph for `p` on the perimeter of `bounds`, or `None` inside.
///
/// Corner checks run first, so a single-row box still gets `┌` and `┐` at its
/// ends and a single cell is `┌`.
pub fn outline_glyph(bounds: GridBounds, p: GridPoint) -> Option<char> {
    let (left, right) = (bounds.is_left(p), bounds.is_right(p));
    let (top, bottom) = (bounds.is_top(p), bounds.is_bottom(p));

    if left && top {
        Some(Corner::TopLeft.to_char())
    } else if right && top {
        Some(Corner::TopRight.to_char())
    } else if left && bottom {
        Some(Corner::BottomLeft.to_char())
    } else if right && bottom {
        Some(Corner::BottomRight.to_char())
    } else if top || bottom {
        Some(HORIZONTAL)
    } else if left || right {
        Some(VERTICAL)
    } else {
        None
    }
}

/// Number of cells [`rasterize_box`] emits for these corners.
pub fn box_cell_count(a: GridPoint, b: GridPoint, filled: bool) -> u64 {
    let bounds = GridBounds::from_corners(a, b);
    let (w, h) = (bounds.width(), bounds.height());
    if filled || w <= 2 || h <= 2 {
        w.saturating_mul(h)
    } else {
        2 * w + 2 * (h - 2)
    }
}

/// Rasterizes a box given two opposite corners in any order.
///
/// Filled boxes cover the inclusive rectangle with `█` in `fill_color`.
/// Outlines only touch the perimeter, in row-major order.
pub fn rasterize_box(
    a: GridPoint,
    b: GridPoint,
    filled: bool,
    color: Color,
    fill_color: Color,
) -> Vec<GlyphCell> {
    let bounds = GridBounds::from_corners(a, b);
    let mut cells = Vec::new();

    if filled {
        for y in bounds.min.y..=bounds.max.y {
            for x in bounds.min.x..=bounds.max.x {
                cells.push(GlyphCell::new(GridPoint::new(x, y), BLOCK, fill_color, CellOrigin::Box));
            }
        }
        return cells;
    }

    let mut push = |p: GridPoint| {
        if let Some(ch) = outline_glyph(bounds, p) {
            cells.push(GlyphCell::new(p, ch, color, CellOrigin::Box));
        }
    };

    for y in bounds.min.y..=bounds.max.y {
        if y == bounds.min.y || y == bounds.max.y {
            for x in bounds.min.x..=bounds.max.x {
                push(GridPoint::new(x, y));
            }
        } else {
            push(GridPoint::new(bounds.min.x, y));
            if bounds.max.x != bounds.min.x {
                push(GridPoint::new(bounds.max.x, y));
            }
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn p(x: i32, y: i32) -> GridPoint { GridPoint::new(x, y) }

    fn layout(cells: &[GlyphCell]) -> BTreeMap<GridPoint, char> {
        cells.iter().map(|c| (c.point, c.ch)).collect()
    }

    #[test]
    fn unfilled_four_by_four_layout() {
        let cells = rasterize_box(p(0, 0), p(3, 3), false, Color::black(), Color::black());
        let map = layout(&cells);

        assert_eq!(map[&p(0, 0)], '┌');
        assert_eq!(map[&p(3, 0)], '┐');
        assert_eq!(map[&p(0, 3)], '└');
        assert_eq!(map[&p(3, 3)], '┘');
        for q in [p(1, 0), p(2, 0), p(1, 3), p(2, 3)] {
            assert_eq!(map[&q], HORIZONTAL);
        }
        for q in [p(0, 1), p(0, 2), p(3, 1), p(3, 2)] {
            assert_eq!(map[&q], VERTICAL);
        }
        for q in [p(1, 1), p(1, 2), p(2, 1), p(2, 2)] {
            assert!(!map.contains_key(&q));
        }
        assert_eq!(cells.len(), 12);
    }

    #[test]
    fn corner_order_does_not_matter() {
        let canonical = layout(&rasterize_box(p(1, 2), p(6, 5), false, Color::black(), Color::black()));
        for (a, b) in [(p(6, 5), p(1, 2)), (p(1, 5), p(6, 2)), (p(6, 2), p(1, 5))] {
            let cells = rasterize_box(a, b, false, Color::black(), Color::black());
            assert_eq!(layout(&cells), canonical);
        }
    }

    #[test]
    fn filled_box_covers_rectangle_with_fill_color() {
        let fill = Color::rgb(200, 0, 0);
        let cells = rasterize_box(p(2, 2), p(0, 0), true, Color::black(), fill);
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|c| c.ch == BLOCK && c.color == fill));
    }

    #[test]
    fn degenerate_boxes_emit_edge_cells() {
        let single = layout(&rasterize_box(p(4, 4), p(4, 4), false, Color::black(), Color::black()));
        assert_eq!(single.into_iter().collect::<Vec<_>>(), vec![(p(4, 4), '┌')]);

        let row = layout(&rasterize_box(p(0, 0), p(3, 0), false, Color::black(), Color::black()));
        assert_eq!(row.values().collect::<String>(), "┌──┐");

        let column = layout(&rasterize_box(p(0, 0), p(0, 3), false, Color::black(), Color::black()));
        assert_eq!(column.values().collect::<String>(), "┌││└");
    }

    #[test]
    fn outline_uses_stroke_color() {
        let stroke = Color::rgb(0, 0, 255);
        let cells = rasterize_box(p(0, 0), p(2, 2), false, stroke, Color::white());
        assert!(cells.iter().all(|c| c.color == stroke));
    }

    #[test]
    fn cell_count_matches_emitted_cells() {
        for (a, b) in [(p(0, 0), p(0, 0)), (p(0, 0), p(5, 0)), (p(0, 0), p(1, 4)), (p(2, 2), p(-3, 6))] {
            for filled in [false, true] {
                let emitted = rasterize_box(a, b, filled, Color::black(), Color::black()).len() as u64;
                assert_eq!(box_cell_count(a, b, filled), emitted, "{a:?} {b:?} filled={filled}");
            }
        }
        assert_eq!(box_cell_count(p(i32::MIN, i32::MIN), p(i32::MAX, i32::MAX), true), u64::MAX);
    }
}
