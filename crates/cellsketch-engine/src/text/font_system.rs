use std::fmt;

use rustc_hash::FxHashMap;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Coverage bitmap of one character at one pixel size.
///
/// `left`/`top` place the bitmap relative to the top-left corner of the cell
/// it is drawn in, with the baseline at the font's ascent below the top.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterGlyph {
    pub left: i32,
    pub top: i32,
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

/// Loaded fonts plus a cache of rasterized glyphs.
///
/// Fonts form a fallback chain in load order: a character is drawn with the
/// first font that maps it. Box-drawing glyphs never reach this type; they
/// are painted procedurally so they join exactly at cell edges.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
    glyphs: FxHashMap<(char, u32), Option<RasterGlyph>>,
    warned_missing: bool,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        // Earlier misses may now resolve.
        self.glyphs.clear();
        log::debug!("loaded font {:?} ({} in chain)", id, self.fonts.len());
        Ok(id)
    }

    #[inline]
    pub fn has_fonts(&self) -> bool {
        !self.fonts.is_empty()
    }

    /// Rasterizes `ch` at `px` pixels, caching the result.
    ///
    /// Returns `None` when no font is loaded or no font maps the character.
    pub fn glyph(&mut self, ch: char, px: u32) -> Option<&RasterGlyph> {
        if self.fonts.is_empty() {
            if !self.warned_missing {
                log::debug!("no font loaded; text characters will not be painted");
                self.warned_missing = true;
            }
            return None;
        }

        let fonts = &self.fonts;
        self.glyphs
            .entry((ch, px))
            .or_insert_with(|| rasterize(fonts, ch, px))
            .as_ref()
    }
}

fn rasterize(fonts: &[fontdue::Font], ch: char, px: u32) -> Option<RasterGlyph> {
    let font = fonts.iter().find(|f| f.lookup_glyph_index(ch) != 0)?;
    let size = px as f32;
    let ascent = font
        .horizontal_line_metrics(size)
        .map_or(size * 0.8, |m| m.ascent)
        .round() as i32;

    let (metrics, coverage) = font.rasterize(ch, size);
    Some(RasterGlyph {
        left: metrics.xmin,
        top: ascent - (metrics.ymin + metrics.height as i32),
        width: metrics.width,
        height: metrics.height,
        coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONO: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSansMono.ttf"));

    fn loaded() -> FontSystem {
        let mut fonts = FontSystem::new();
        fonts.load_font(MONO).unwrap();
        fonts
    }

    #[test]
    fn empty_system_paints_nothing() {
        let mut fonts = FontSystem::new();
        assert!(!fonts.has_fonts());
        assert!(fonts.glyph('a', 16).is_none());
        assert!(fonts.glyph('a', 16).is_none());
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"definitely not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
        assert!(!fonts.has_fonts());
    }

    // ── fontdue ─────────────────────────────────────────────────────────

    #[test]
    fn capital_sits_inside_its_cell() {
        let mut fonts = loaded();
        assert!(fonts.has_fonts());
        let g = fonts.glyph('A', 16).unwrap().clone();
        assert!(g.width > 0 && g.height > 0);
        assert_eq!(g.coverage.len(), g.width * g.height);
        assert!(g.coverage.iter().any(|&c| c > 0));
        assert!(g.top >= 0, "top = {}", g.top);
        assert!(g.top + g.height as i32 <= 16, "top = {} height = {}", g.top, g.height);
    }

    #[test]
    fn unmapped_character_has_no_glyph() {
        let mut fonts = loaded();
        assert!(fonts.glyph('漢', 16).is_none());
    }

    #[test]
    fn glyphs_are_cached_per_size() {
        let mut fonts = loaded();
        let small = fonts.glyph('x', 8).cloned();
        let large = fonts.glyph('x', 32).cloned();
        assert_ne!(small, large);
        assert_eq!(fonts.glyph('x', 8).cloned(), small);
    }

    #[test]
    fn fallback_chain_assigns_distinct_ids() {
        let mut fonts = FontSystem::new();
        let first = fonts.load_font(MONO).unwrap();
        let second = fonts.load_font(MONO).unwrap();
        assert_ne!(first, second);
    }
}
