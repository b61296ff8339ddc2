use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::Layer;

/// Rectangle spanned by two opposite corners, in either order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    pub start: Vec2,
    pub end: Vec2,
    pub filled: bool,
    /// Outline color, and fill color when `fill_color` is unset.
    pub color: Color,
    pub fill_color: Option<Color>,
}

impl BoxShape {
    #[inline]
    pub fn outline(start: Vec2, end: Vec2, color: Color) -> Self {
        Self { start, end, filled: false, color, fill_color: None }
    }

    #[inline]
    pub fn filled(start: Vec2, end: Vec2, color: Color, fill_color: Option<Color>) -> Self {
        Self { start, end, filled: true, color, fill_color }
    }

    /// Color used for `█` cells of a filled box.
    #[inline]
    pub fn effective_fill(&self) -> Color {
        self.fill_color.unwrap_or(self.color)
    }
}

impl Layer {
    /// Appends an unfilled box.
    #[inline]
    pub fn push_box(&mut self, start: Vec2, end: Vec2, color: Color) {
        self.boxes.push(BoxShape::outline(start, end, color));
    }

    /// Appends a filled box.
    #[inline]
    pub fn push_filled_box(&mut self, start: Vec2, end: Vec2, color: Color, fill_color: Option<Color>) {
        self.boxes.push(BoxShape::filled(start, end, color, fill_color));
    }
}
