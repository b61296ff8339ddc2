use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::Layer;

/// Literal text anchored at a grid position.
///
/// `font_size` is in pixels and only affects painting; on the grid every
/// character (control characters included) takes one cell of a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub position: Vec2,
    pub content: String,
    pub font_size: f32,
    pub color: Color,
}

impl TextElement {
    #[inline]
    pub fn new(position: Vec2, content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self { position, content: content.into(), font_size, color }
    }
}

impl Layer {
    /// Appends a text element. Later text wins on overlapping cells.
    #[inline]
    pub fn push_text(&mut self, position: Vec2, content: impl Into<String>, font_size: f32, color: Color) {
        self.texts.push(TextElement::new(position, content, font_size, color));
    }
}
