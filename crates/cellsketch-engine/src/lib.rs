//! Cellsketch engine crate.
//!
//! Turns layered vector drawings (lines, boxes, text) into box-drawing glyphs
//! on a character grid and paints them onto a pixel surface.
//!
//! - `scene`: layers and their elements
//! - `raster`: element → glyph rasterization and merge rules
//! - `render`: glyph painting onto [`PixelBuffer`]
//! - `cache`: painted-layer cache
//! - `compositor`: the frame pipeline tying these together

pub mod cache;
pub mod compositor;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod render;
pub mod scene;
pub mod text;

pub use compositor::{Compositor, RasterTicket, RenderConfig, RenderError, TicketOutcome};
pub use raster::{compose_layers, rasterize_layer, GlyphMap};
pub use render::PixelBuffer;
pub use scene::{Layer, LayerId};
