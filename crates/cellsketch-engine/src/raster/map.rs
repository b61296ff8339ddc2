use std::collections::BTreeMap;

use crate::coords::{GridBounds, GridPoint};
use crate::paint::Color;

use super::merge::merge_glyph;

/// Which element kind produced a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellOrigin {
    Line,
    Box,
    /// Index into [`GlyphMap::texts`] of the text element owning the cell.
    Text(usize),
}

/// One glyph on the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GlyphCell {
    pub point: GridPoint,
    pub ch: char,
    pub color: Color,
    pub origin: CellOrigin,
}

impl GlyphCell {
    #[inline]
    pub const fn new(point: GridPoint, ch: char, color: Color, origin: CellOrigin) -> Self {
        Self { point, ch, color, origin }
    }
}

/// Text element resolved to its anchor cell, kept for the paint pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub origin: GridPoint,
    pub content: String,
    pub font_size: f32,
    pub color: Color,
}

impl PlacedText {
    /// Cells covered by the text, paired with their characters.
    pub fn cells(&self) -> impl Iterator<Item = (GridPoint, char)> + '_ {
        (0i32..)
            .zip(self.content.chars())
            .filter_map(|(col, ch)| Some((self.origin.checked_offset(col, 0)?, ch)))
    }
}

/// Sparse, canonical glyph grid for one layer (or a flattened stack).
///
/// A missing entry is a transparent cell. Iteration is row-major.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphMap {
    cells: BTreeMap<GridPoint, GlyphCell>,
    texts: Vec<PlacedText>,
}

impl GlyphMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.texts.is_empty()
    }

    #[inline]
    pub fn get(&self, p: GridPoint) -> Option<&GlyphCell> {
        self.cells.get(&p)
    }

    /// Character at `p`, if any.
    #[inline]
    pub fn char_at(&self, p: GridPoint) -> Option<char> {
        self.cells.get(&p).map(|c| c.ch)
    }

    /// Cells in row-major order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &GlyphCell> {
        self.cells.values()
    }

    /// Text elements in paint order.
    #[inline]
    pub fn texts(&self) -> &[PlacedText] {
        &self.texts
    }

    /// Merges a line or box contribution using the glyph rule table.
    ///
    /// The resulting cell takes the incoming color and origin.
    pub fn merge(&mut self, incoming: GlyphCell) {
        let merged = match self.cells.get(&incoming.point) {
            Some(existing) => GlyphCell { ch: merge_glyph(existing.ch, incoming.ch), ..incoming },
            None => incoming,
        };
        self.cells.insert(merged.point, merged);
    }

    /// Replaces whatever is at the cell, bypassing merge rules.
    #[inline]
    pub fn overwrite(&mut self, cell: GlyphCell) {
        self.cells.insert(cell.point, cell);
    }

    /// Writes a text element's characters along its row from `text.origin`.
    ///
    /// One character per cell, control characters included, so a text element
    /// always covers `content.chars().count()` cells of a single row.
    /// Characters that would land outside the `i32` grid are dropped.
    pub fn place_text(&mut self, text: PlacedText) {
        let owner = CellOrigin::Text(self.texts.len());
        for (point, ch) in text.cells() {
            self.overwrite(GlyphCell::new(point, ch, text.color, owner));
        }
        self.texts.push(text);
    }

    /// Stacks `top` over this map: its cells replace ours, its text paints later.
    pub fn overlay(&mut self, top: GlyphMap) {
        let shift = self.texts.len();
        self.cells.extend(top.cells.into_iter().map(|(p, mut cell)| {
            if let CellOrigin::Text(i) = cell.origin {
                cell.origin = CellOrigin::Text(i + shift);
            }
            (p, cell)
        }));
        self.texts.extend(top.texts);
    }

    /// True if cell `p` still shows character data from text element `index`.
    #[inline]
    pub fn is_owned_by_text(&self, p: GridPoint, index: usize) -> bool {
        self.cells.get(&p).is_some_and(|c| c.origin == CellOrigin::Text(index))
    }

    /// Smallest bounds containing every occupied cell.
    pub fn bounds(&self) -> Option<GridBounds> {
        let mut iter = self.cells.keys();
        let first = GridBounds::point(*iter.next()?);
        Some(iter.fold(first, |b, &p| b.include(p)))
    }

    /// Renders the occupied bounds as plain text, one line per row.
    ///
    /// Empty cells and control characters become spaces; trailing spaces are
    /// kept so every line has the same width. Output size is the area of
    /// [`bounds`](Self::bounds), so two cells far apart produce a large string.
    pub fn to_text(&self) -> String {
        let Some(bounds) = self.bounds() else {
            return String::new();
        };

        let mut out = String::new();
        let mut cells = self.cells.values().peekable();
        for y in bounds.min.y..=bounds.max.y {
            if y != bounds.min.y {
                out.push('\n');
            }
            for x in bounds.min.x..=bounds.max.x {
                match cells.peek() {
                    Some(cell) if cell.point == GridPoint::new(x, y) => {
                        out.push(if cell.ch.is_control() { ' ' } else { cell.ch });
                        cells.next();
                    }
                    _ => out.push(' '),
                }
            }
        }
        out
    }
}
