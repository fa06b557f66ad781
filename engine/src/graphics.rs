use crate::font::{DEFAULT_TEXT_SCALE, GLYPH_W, glyph_advance_x, glyph_rows, line_advance_y};
use crate::image::Image;
use crate::surface::SurfaceSize;
use crate::ui::Rect;

pub type Color = [u8; 4];

/// 2D drawing interface the screens render through.
///
/// Screens never touch pixels directly, so the same draw code serves the window and the
/// offscreen frames used in tests.
pub trait Renderer2d {
    fn begin_frame(&mut self, size: SurfaceSize);
    fn size(&self) -> SurfaceSize;

    /// Opaque fill.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Alpha-blended rect over existing content (alpha is applied to `color`'s RGB).
    fn blend_rect(&mut self, rect: Rect, color: Color, alpha: u8);

    fn rect_outline(&mut self, rect: Rect, color: Color);
    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32);

    /// Stretches `image` over `dest` (nearest neighbour), compositing with the image's own
    /// alpha multiplied by `opacity` (0.0..=1.0).
    fn draw_image(&mut self, image: &Image, dest: Rect, opacity: f32);

    fn draw_text(&mut self, x: u32, y: u32, text: &str, color: Color) {
        self.draw_text_scaled(x, y, text, color, DEFAULT_TEXT_SCALE);
    }

    fn clear(&mut self, color: Color) {
        let s = self.size();
        self.fill_rect(Rect::from_size(s.width, s.height), color);
    }
}

/// CPU renderer that draws into an RGBA frame buffer.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
}

/// Visible part of a rect, in pixel coordinates, `x1`/`y1` exclusive.
#[derive(Debug, Clone, Copy)]
struct Span {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self { frame, size }
    }

    fn clip(&self, rect: Rect) -> Option<Span> {
        if self.frame.len() < self.size.rgba_len() {
            return None;
        }
        let x1 = rect.right().min(self.size.width);
        let y1 = rect.bottom().min(self.size.height);
        if rect.x >= x1 || rect.y >= y1 {
            return None;
        }
        Some(Span {
            x0: rect.x,
            y0: rect.y,
            x1,
            y1,
        })
    }

    fn row_mut(&mut self, y: u32, x0: u32, x1: u32) -> &mut [u8] {
        let stride = self.size.width as usize * 4;
        let start = y as usize * stride + x0 as usize * 4;
        let end = start + (x1 - x0) as usize * 4;
        &mut self.frame[start..end]
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.size.width || y >= self.size.height {
            return;
        }
        let idx = (y as usize * self.size.width as usize + x as usize) * 4;
        if let Some(px) = self.frame.get_mut(idx..idx + 4) {
            px.copy_from_slice(&color);
        }
    }

    fn draw_glyph(&mut self, x: u32, y: u32, ch: char, color: Color, scale: u32) {
        for (row, bits) in glyph_rows(ch).into_iter().enumerate() {
            let py = y.saturating_add(row as u32 * scale);
            for col in 0..GLYPH_W {
                if bits & (1u8 << (GLYPH_W - 1 - col)) == 0 {
                    continue;
                }
                let px = x.saturating_add(col * scale);
                self.fill_rect(Rect::new(px, py, scale, scale), color);
            }
        }
    }
}

fn mix(dst: u8, src: u8, alpha: u32) -> u8 {
    ((dst as u32 * (255 - alpha) + src as u32 * alpha + 127) / 255) as u8
}

impl Renderer2d for CpuRenderer<'_> {
    fn begin_frame(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(span) = self.clip(rect) else {
            return;
        };
        for y in span.y0..span.y1 {
            for px in self.row_mut(y, span.x0, span.x1).chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
        }
    }

    fn blend_rect(&mut self, rect: Rect, color: Color, alpha: u8) {
        match alpha {
            0 => return,
            255 => return self.fill_rect(rect, color),
            _ => {}
        }
        let Some(span) = self.clip(rect) else {
            return;
        };
        let a = alpha as u32;
        for y in span.y0..span.y1 {
            for px in self.row_mut(y, span.x0, span.x1).chunks_exact_mut(4) {
                px[0] = mix(px[0], color[0], a);
                px[1] = mix(px[1], color[1], a);
                px[2] = mix(px[2], color[2], a);
                px[3] = 255;
            }
        }
    }

    fn rect_outline(&mut self, rect: Rect, color: Color) {
        if rect.w == 0 || rect.h == 0 {
            return;
        }
        let Some(span) = self.clip(rect) else {
            return;
        };
        let w = span.x1 - span.x0;
        let h = span.y1 - span.y0;

        self.fill_rect(Rect::new(rect.x, rect.y, w, 1), color);
        self.fill_rect(Rect::new(rect.x, span.y1 - 1, w, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.y, 1, h), color);
        self.fill_rect(Rect::new(span.x1 - 1, rect.y, 1, h), color);
    }

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32) {
        let scale = scale.max(1);
        let adv_x = glyph_advance_x(scale);
        let adv_y = line_advance_y(scale);

        let mut cursor_x = x;
        let mut cursor_y = y;
        for ch in text.chars() {
            if ch == '\n' {
                cursor_x = x;
                cursor_y = cursor_y.saturating_add(adv_y);
                if cursor_y >= self.size.height {
                    break;
                }
                continue;
            }
            if ch != ' ' {
                self.draw_glyph(cursor_x, cursor_y, ch, color, scale);
            }
            cursor_x = cursor_x.saturating_add(adv_x);
        }
    }

    fn draw_image(&mut self, image: &Image, dest: Rect, opacity: f32) {
        if image.is_empty() || dest.w == 0 || dest.h == 0 {
            return;
        }
        let opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        let opacity = (opacity * 255.0).round() as u32;
        if opacity == 0 {
            return;
        }
        let Some(span) = self.clip(dest) else {
            return;
        };

        for y in span.y0..span.y1 {
            let sy = ((y - dest.y) as u64 * image.height() as u64 / dest.h as u64) as u32;
            for x in span.x0..span.x1 {
                let sx = ((x - dest.x) as u64 * image.width() as u64 / dest.w as u64) as u32;
                let src = image.pixel(sx, sy);
                let a = src[3] as u32 * opacity / 255;
                if a == 0 {
                    continue;
                }
                if a == 255 {
                    self.put_pixel(x, y, src);
                    continue;
                }
                let idx = (y as usize * self.size.width as usize + x as usize) * 4;
                let px = &mut self.frame[idx..idx + 4];
                px[0] = mix(px[0], src[0], a);
                px[1] = mix(px[1], src[1], a);
                px[2] = mix(px[2], src[2], a);
                px[3] = 255;
            }
        }
    }
}
