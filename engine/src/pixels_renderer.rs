use pixels::Pixels;

use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;

/// Window presenter: the game draws into the `pixels` frame buffer through `CpuRenderer`, then
/// `present` uploads it.
///
/// The buffer always matches the window's physical size, so pointer coordinates and draw
/// coordinates are the same pixels.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    size: SurfaceSize,
}

impl PixelsRenderer2d {
    pub fn new(mut pixels: Pixels, size: SurfaceSize) -> Result<Self, pixels::Error> {
        if !size.is_empty() {
            pixels.resize_buffer(size.width, size.height)?;
        }
        Ok(Self { pixels, size })
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Resizes surface and buffer together. A zero-sized window (minimised) is remembered but
    /// left unapplied until it grows again.
    pub fn resize(&mut self, size: SurfaceSize) -> Result<(), pixels::Error> {
        self.size = size;
        if size.is_empty() {
            return Ok(());
        }
        self.pixels.resize_surface(size.width, size.height)?;
        self.pixels.resize_buffer(size.width, size.height)?;
        Ok(())
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        if self.size.is_empty() {
            return None;
        }
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), self.size);
        cpu.begin_frame(self.size);
        Some(f(&mut cpu))
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        if self.size.is_empty() {
            return Ok(());
        }
        self.pixels.render()
    }
}
