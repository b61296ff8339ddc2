use super::GridPoint;

/// 2D position in grid units, as produced by editing operations.
///
/// Values may be fractional (pointer positions divided by the cell size) or,
/// from bad input, non-finite. Rasterization only ever sees the floored
/// [`GridPoint`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Floors to the containing cell.
    ///
    /// Returns `None` for non-finite components or components outside the
    /// `i32` range.
    #[inline]
    pub fn to_grid(self) -> Option<GridPoint> {
        Some(GridPoint::new(floor_axis(self.x)?, floor_axis(self.y)?))
    }
}

impl From<GridPoint> for Vec2 {
    #[inline]
    fn from(p: GridPoint) -> Self {
        Vec2::new(p.x as f32, p.y as f32)
    }
}

fn floor_axis(v: f32) -> Option<i32> {
    if !v.is_finite() {
        return None;
    }
    let f = v.floor();
    // `i32::MAX as f32` rounds up to 2^31, so the upper bound is exclusive.
    if f < i32::MIN as f32 || f >= i32::MAX as f32 {
        return None;
    }
    Some(f as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_grid_floors_fractions() {
        assert_eq!(Vec2::new(2.9, 3.1).to_grid(), Some(GridPoint::new(2, 3)));
        assert_eq!(Vec2::new(-0.5, -1.0).to_grid(), Some(GridPoint::new(-1, -1)));
    }

    #[test]
    fn to_grid_rejects_non_finite() {
        assert_eq!(Vec2::new(f32::NAN, 0.0).to_grid(), None);
        assert_eq!(Vec2::new(0.0, f32::INFINITY).to_grid(), None);
        assert_eq!(Vec2::new(f32::NEG_INFINITY, 0.0).to_grid(), None);
    }

    #[test]
    fn to_grid_rejects_out_of_range() {
        assert_eq!(Vec2::new(1.0e12, 0.0).to_grid(), None);
        assert_eq!(Vec2::new(0.0, -1.0e12).to_grid(), None);
    }
}
