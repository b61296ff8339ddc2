//! CPU rendering subsystem.
//!
//! Painters consume `raster` glyph maps and write into a [`PixelBuffer`].
//!
//! Convention:
//! - pixel coordinates are top-left origin, +Y down
//! - cell `(x, y)` covers pixels `[x * cell_size, (x + 1) * cell_size)` on each axis
//! - cells and text that fall off the buffer are clipped, never an error

mod buffer;
pub mod glyphs;

pub use buffer::PixelBuffer;
pub use glyphs::paint_glyph_map;
