//! Font loading and character rasterization for literal text.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, RasterGlyph};
