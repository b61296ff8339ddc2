use super::shapes::{BoxShape, Line, TextElement};

/// Stable identity of a layer across edits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LayerId(pub u32);

/// Independently toggled set of elements, composited back-to-front.
///
/// Within a layer, element order is insertion order. Lines are merged before
/// boxes regardless of how they were interleaved during editing, and text is
/// always painted last.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    /// Hidden layers are skipped by the compositor.
    pub visible: bool,
    /// Lock state only gates editing; locked layers still render.
    pub locked: bool,
    pub lines: Vec<Line>,
    pub boxes: Vec<BoxShape>,
    pub texts: Vec<TextElement>,
}

impl Layer {
    pub fn new(id: LayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
            locked: false,
            lines: Vec::new(),
            boxes: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.boxes.is_empty() && self.texts.is_empty()
    }

    /// Number of elements across all element kinds.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.lines.len() + self.boxes.len() + self.texts.len()
    }

    /// Removes every element. Keeps identity, name and flags.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.boxes.clear();
        self.texts.clear();
    }
}
