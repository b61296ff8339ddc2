use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::coords::Vec2;
use crate::paint::Color;

use super::shapes::{BoxShape, Line, TextElement};
use super::Layer;

/// Content hash of a layer's elements.
///
/// Covers every element field, with floats hashed by bit pattern, so any edit
/// (including a fractional move that floors to the same cell) produces a new
/// fingerprint. Layer name, visibility and lock state are not content.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Fingerprint(pub u64);

/// Section and element tags. Must be non-zero: a zero write into a fresh
/// `FxHasher` leaves its state unchanged.
const TAG_LINES: u8 = 0xA1;
const TAG_BOXES: u8 = 0xB2;
const TAG_TEXTS: u8 = 0xC3;
const TAG_ELEMENT: u8 = 0x5E;

impl Layer {
    pub fn fingerprint(&self) -> Fingerprint {
        let mut h = FxHasher::default();

        h.write_u8(TAG_LINES);
        h.write_usize(self.lines.len());
        for line in &self.lines {
            h.write_u8(TAG_ELEMENT);
            write_line(&mut h, line);
        }

        h.write_u8(TAG_BOXES);
        h.write_usize(self.boxes.len());
        for b in &self.boxes {
            h.write_u8(TAG_ELEMENT);
            write_box(&mut h, b);
        }

        h.write_u8(TAG_TEXTS);
        h.write_usize(self.texts.len());
        for t in &self.texts {
            h.write_u8(TAG_ELEMENT);
            write_text(&mut h, t);
        }

        Fingerprint(h.finish())
    }
}

fn write_vec2(h: &mut FxHasher, v: Vec2) {
    h.write_u32(v.x.to_bits());
    h.write_u32(v.y.to_bits());
}

fn write_color(h: &mut FxHasher, c: Color) {
    h.write(&c.to_array());
}

fn write_line(h: &mut FxHasher, line: &Line) {
    write_vec2(h, line.start);
    write_vec2(h, line.end);
    line.style.hash(h);
    write_color(h, line.color);
}

fn write_box(h: &mut FxHasher, b: &BoxShape) {
    write_vec2(h, b.start);
    write_vec2(h, b.end);
    h.write_u8(u8::from(b.filled));
    write_color(h, b.color);
    match b.fill_color {
        Some(c) => {
            h.write_u8(1);
            write_color(h, c);
        }
        None => h.write_u8(0),
    }
}

fn write_text(h: &mut FxHasher, t: &TextElement) {
    write_vec2(h, t.position);
    t.content.hash(h);
    h.write_u32(t.font_size.to_bits());
    write_color(h, t.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{LayerId, LineStyle};

    fn sample() -> Layer {
        let mut layer = Layer::new(LayerId(1), "sample");
        layer.push_line(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), Color::black());
        layer.push_box(Vec2::new(1.0, 1.0), Vec2::new(4.0, 3.0), Color::black());
        layer.push_text(Vec2::new(2.0, 2.0), "hi", 16.0, Color::black());
        layer
    }

    #[test]
    fn identical_content_has_identical_fingerprint() {
        assert_eq!(sample().fingerprint(), sample().fingerprint());
    }

    #[test]
    fn flags_and_name_are_not_content() {
        let a = sample();
        let mut b = sample();
        b.visible = false;
        b.locked = true;
        b.name = "renamed".into();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn every_element_field_changes_fingerprint() {
        let base = sample().fingerprint();

        let mut l = sample();
        l.lines[0].end.x = 5.5;
        assert_ne!(l.fingerprint(), base);

        let mut l = sample();
        l.lines[0].style = LineStyle::Dashed;
        assert_ne!(l.fingerprint(), base);

        let mut l = sample();
        l.boxes[0].filled = true;
        assert_ne!(l.fingerprint(), base);

        let mut l = sample();
        l.boxes[0].fill_color = Some(Color::black());
        assert_ne!(l.fingerprint(), base);

        let mut l = sample();
        l.texts[0].content.push('!');
        assert_ne!(l.fingerprint(), base);

        let mut l = sample();
        l.texts[0].color = Color::white();
        assert_ne!(l.fingerprint(), base);
    }

    #[test]
    fn moving_an_element_between_kinds_changes_fingerprint() {
        let mut a = Layer::new(LayerId(1), "a");
        a.push_line(Vec2::zero(), Vec2::zero(), Color::black());
        let mut b = Layer::new(LayerId(1), "b");
        b.push_box(Vec2::zero(), Vec2::zero(), Color::black());
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), Layer::new(LayerId(1), "empty").fingerprint());
    }

    #[test]
    fn zero_valued_elements_are_not_lost() {
        let empty = Layer::new(LayerId(1), "empty").fingerprint();
        let zero = Color::transparent();

        let mut line = Layer::new(LayerId(1), "l");
        line.push_line(Vec2::zero(), Vec2::zero(), zero);
        let mut boxed = Layer::new(LayerId(1), "b");
        boxed.push_box(Vec2::zero(), Vec2::zero(), zero);
        let mut two_lines = line.clone();
        two_lines.push_line(Vec2::zero(), Vec2::zero(), zero);

        let prints = [empty, line.fingerprint(), boxed.fingerprint(), two_lines.fingerprint()];
        for (i, a) in prints.iter().enumerate() {
            for b in &prints[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
