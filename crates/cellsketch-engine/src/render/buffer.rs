use crate::paint::Color;

/// CPU pixel surface: tightly packed RGBA8, straight alpha, top-left origin.
///
/// All drawing is clipped to the buffer; callers may pass any `i64`
/// coordinates, including negative or far out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::transparent())
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let len = width as usize * height as usize;
        let mut data = Vec::with_capacity(len * 4);
        for _ in 0..len {
            data.extend_from_slice(&color.to_array());
        }
        Self { width, height, data }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let i = self.index(i64::from(x), i64::from(y))?;
        let px = &self.data[i..i + 4];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// True when every pixel has zero alpha.
    pub fn is_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_array();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Source-over blends `color` into the clipped rectangle.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(i64::from(self.width));
        let y1 = y.saturating_add(h).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 || color.a == 0 {
            return;
        }
        let src = color.to_array();
        for py in y0..y1 {
            for px in x0..x1 {
                let i = self.offset(px, py);
                blend_over(&mut self.data[i..i + 4], src);
            }
        }
    }

    /// Blends a single pixel with `color` scaled by `coverage`.
    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color, coverage: u8) {
        if coverage == 0 {
            return;
        }
        if let Some(i) = self.index(x, y) {
            blend_over(&mut self.data[i..i + 4], color.with_coverage(coverage).to_array());
        }
    }

    /// Composites `src` over this buffer, aligned at the top-left corner.
    ///
    /// Only the overlapping region is touched when sizes differ.
    pub fn draw_over(&mut self, src: &PixelBuffer) {
        let w = self.width.min(src.width) as usize;
        let h = self.height.min(src.height) as usize;
        let dst_stride = self.width as usize * 4;
        let src_stride = src.width as usize * 4;
        for row in 0..h {
            let dst_row = &mut self.data[row * dst_stride..row * dst_stride + w * 4];
            let src_row = &src.data[row * src_stride..row * src_stride + w * 4];
            for (d, s) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
                blend_over(d, [s[0], s[1], s[2], s[3]]);
            }
        }
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(self.offset(x, y))
    }

    /// Byte offset of an in-bounds pixel.
    #[inline]
    fn offset(&self, x: i64, y: i64) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Straight-alpha source-over for one RGBA8 pixel.
fn blend_over(dst: &mut [u8], src: [u8; 4]) {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return;
    }
    if sa == 255 {
        dst.copy_from_slice(&src);
        return;
    }

    let da = u32::from(dst[3]);
    let inv = 255 - sa;
    // Output alpha scaled by 255.
    let out_a = sa * 255 + da * inv;
    for c in 0..3 {
        let num = u32::from(src[c]) * sa * 255 + u32::from(dst[c]) * da * inv;
        dst[c] = ((num + out_a / 2) / out_a) as u8;
    }
    dst[3] = ((out_a + 127) / 255) as u8;
}
