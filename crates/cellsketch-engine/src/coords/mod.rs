//! Coordinate types shared by the scene model, rasterizers and painters.
//!
//! Two spaces are in play:
//! - grid space: one unit per character cell, origin top-left, +X right, +Y down
//! - pixel space: grid space scaled by the cell size in pixels
//!
//! Editing operations produce `Vec2` grid positions that may be fractional;
//! rasterization works on floored `GridPoint`s only.

mod bounds;
mod grid_point;
mod vec2;

pub use bounds::GridBounds;
pub use grid_point::GridPoint;
pub use vec2::Vec2;
