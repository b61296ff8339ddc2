/// Straight-alpha sRGB color with 8-bit channels.
///
/// This matches the pixel format of [`PixelBuffer`](crate::render::PixelBuffer),
/// so painting never converts. The default is opaque black, which is what the
/// editor assigns to elements created without an explicit color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns this color with alpha scaled by `coverage / 255`.
    #[inline]
    pub fn with_coverage(self, coverage: u8) -> Self {
        let a = (u16::from(self.a) * u16::from(coverage) + 127) / 255;
        Self { a: a as u8, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::from_hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn parses_short_and_alpha_hex() {
        assert_eq!(Color::from_hex("#fff"), Some(Color::white()));
        assert_eq!(Color::from_hex("#11223344"), Some(Color::rgba(0x11, 0x22, 0x33, 0x44)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn coverage_scales_alpha_only() {
        let c = Color::rgb(10, 20, 30).with_coverage(128);
        assert_eq!((c.r, c.g, c.b), (10, 20, 30));
        assert_eq!(c.a, 128);
        assert_eq!(Color::rgb(1, 2, 3).with_coverage(255).a, 255);
        assert_eq!(Color::rgb(1, 2, 3).with_coverage(0).a, 0);
    }

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::default(), Color::black());
        assert!(Color::default().is_opaque());
    }
}
