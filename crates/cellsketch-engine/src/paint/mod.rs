//! Paint model shared by the scene, rasterizers and pixel surfaces.
//!
//! Scope is deliberately narrow: one solid color per glyph cell. Gradients and
//! patterns belong to the surrounding editor's background layer, not here.

pub mod color;

pub use color::Color;
