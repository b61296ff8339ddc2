use super::GridPoint;

/// Inclusive axis-aligned cell rectangle.
///
/// Both `min` and `max` are occupied cells, so a single cell has
/// `min == max` and width/height of 1.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct GridBounds {
    pub min: GridPoint,
    pub max: GridPoint,
}

impl GridBounds {
    /// Builds bounds from two opposite corners given in any order.
    #[inline]
    pub fn from_corners(a: GridPoint, b: GridPoint) -> Self {
        Self {
            min: GridPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: GridPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[inline]
    pub fn point(p: GridPoint) -> Self {
        Self { min: p, max: p }
    }

    /// Number of columns covered. Widened to `u64` so full-range bounds fit.
    #[inline]
    pub fn width(self) -> u64 {
        (i64::from(self.max.x) - i64::from(self.min.x) + 1) as u64
    }

    #[inline]
    pub fn height(self) -> u64 {
        (i64::from(self.max.y) - i64::from(self.min.y) + 1) as u64
    }

    #[inline]
    pub fn contains(self, p: GridPoint) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Grows the bounds to include `p`.
    #[inline]
    pub fn include(self, p: GridPoint) -> Self {
        Self {
            min: GridPoint::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: GridPoint::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    #[inline]
    pub fn is_left(self, p: GridPoint) -> bool {
        p.x == self.min.x
    }

    #[inline]
    pub fn is_right(self, p: GridPoint) -> bool {
        p.x == self.max.x
    }

    #[inline]
    pub fn is_top(self, p: GridPoint) -> bool {
        p.y == self.min.y
    }

    #[inline]
    pub fn is_bottom(self, p: GridPoint) -> bool {
        p.y == self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> GridPoint { GridPoint::new(x, y) }

    // ── from_corners ──────────────────────────────────────────────────────

    #[test]
    fn from_corners_any_order_normalizes() {
        let expected = GridBounds { min: p(1, 2), max: p(5, 7) };
        assert_eq!(GridBounds::from_corners(p(1, 2), p(5, 7)), expected);
        assert_eq!(GridBounds::from_corners(p(5, 7), p(1, 2)), expected);
        assert_eq!(GridBounds::from_corners(p(1, 7), p(5, 2)), expected);
        assert_eq!(GridBounds::from_corners(p(5, 2), p(1, 7)), expected);
    }

    #[test]
    fn single_cell_has_unit_size() {
        let b = GridBounds::point(p(3, 3));
        assert_eq!(b.width(), 1);
        assert_eq!(b.height(), 1);
    }

    #[test]
    fn full_range_width_does_not_overflow() {
        let b = GridBounds::from_corners(p(i32::MIN, 0), p(i32::MAX, 0));
        assert_eq!(b.width(), 1u64 << 32);
    }

    // ── contains / include ────────────────────────────────────────────────

    #[test]
    fn contains_is_inclusive() {
        let b = GridBounds::from_corners(p(0, 0), p(3, 3));
        assert!(b.contains(p(0, 0)));
        assert!(b.contains(p(3, 3)));
        assert!(!b.contains(p(4, 3)));
        assert!(!b.contains(p(-1, 0)));
    }

    #[test]
    fn include_grows_in_both_directions() {
        let b = GridBounds::point(p(2, 2)).include(p(-1, 5)).include(p(4, 0));
        assert_eq!(b, GridBounds { min: p(-1, 0), max: p(4, 5) });
    }
}
