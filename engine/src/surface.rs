use crate::graphics::CpuRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Owned RGBA frame for offscreen rendering (tests, screenshots).
///
/// The windowed path draws straight into the `pixels` buffer instead; both go through
/// `CpuRenderer`, so what a test sees here is what the window shows.
#[derive(Debug, Clone)]
pub struct RgbaFrame {
    size: SurfaceSize,
    buf: Vec<u8>,
}

impl RgbaFrame {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buf: vec![0u8; size.rgba_len()],
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.buf
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.buf.resize(size.rgba_len(), 0u8);
    }

    pub fn renderer(&mut self) -> CpuRenderer<'_> {
        CpuRenderer::new(&mut self.buf, self.size)
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = (y as usize * self.size.width as usize + x as usize) * 4;
        let px = self.buf.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_either_axis_is_zero() {
        assert!(SurfaceSize::new(0, 10).is_empty());
        assert!(SurfaceSize::new(10, 0).is_empty());
        assert!(!SurfaceSize::new(1, 1).is_empty());
    }

    #[test]
    fn frame_resize_keeps_buffer_in_sync() {
        let mut frame = RgbaFrame::new(SurfaceSize::new(2, 2));
        assert_eq!(frame.as_rgba().len(), 16);
        frame.resize(SurfaceSize::new(3, 1));
        assert_eq!(frame.as_rgba().len(), 12);
        assert_eq!(frame.pixel(2, 0), Some([0, 0, 0, 0]));
        assert_eq!(frame.pixel(3, 0), None);
    }
}
