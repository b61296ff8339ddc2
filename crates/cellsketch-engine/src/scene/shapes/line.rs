use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::Layer;

/// Stroke pattern recorded on a line.
///
/// Style is carried for exporters and fingerprinting. It does not change
/// which cells a line occupies.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Straight segment between two grid positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
    pub style: LineStyle,
    pub color: Color,
}

impl Line {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, color: Color) -> Self {
        Self { start, end, style: LineStyle::Solid, color }
    }

    #[inline]
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

impl Layer {
    /// Appends a solid line.
    #[inline]
    pub fn push_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        self.lines.push(Line::new(start, end, color));
    }
}
