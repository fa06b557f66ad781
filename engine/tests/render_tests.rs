use engine::font::{centered_x, text_height, text_width};
use engine::graphics::{CpuRenderer, Renderer2d};
use engine::image::Image;
use engine::surface::{RgbaFrame, SurfaceSize};
use engine::ui::Rect;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

#[test]
fn clear_paints_every_pixel() {
    let mut frame = RgbaFrame::new(SurfaceSize::new(8, 6));
    frame.renderer().clear([10, 20, 30, 255]);
    assert!(
        frame
            .as_rgba()
            .chunks_exact(4)
            .all(|px| px == [10, 20, 30, 255])
    );
}

#[test]
fn images_are_stretched_to_the_destination() {
    // 2x1 source: left red, right blue.
    let mut rgba = Vec::new();
    rgba.extend_from_slice(&[255, 0, 0, 255]);
    rgba.extend_from_slice(&[0, 0, 255, 255]);
    let image = Image::from_rgba(2, 1, rgba).expect("valid image");

    let mut frame = RgbaFrame::new(SurfaceSize::new(8, 4));
    frame
        .renderer()
        .draw_image(&image, Rect::new(0, 0, 8, 4), 1.0);

    assert_eq!(frame.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(3, 3), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(4, 0), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(7, 3), Some([0, 0, 255, 255]));
}

#[test]
fn images_overhanging_the_surface_are_clipped() {
    let image = Image::solid(4, 4, WHITE);
    let mut frame = RgbaFrame::new(SurfaceSize::new(4, 4));
    {
        let mut gfx = frame.renderer();
        gfx.clear(BLACK);
        gfx.draw_image(&image, Rect::new(2, 2, 100, 100), 1.0);
    }
    assert_eq!(frame.pixel(1, 1), Some(BLACK));
    assert_eq!(frame.pixel(3, 3), Some(WHITE));
    assert_eq!(frame.pixel(4, 4), None);
}

#[test]
fn transparent_pixels_leave_the_background() {
    let image = Image::solid(2, 2, [255, 0, 0, 0]);
    let mut frame = RgbaFrame::new(SurfaceSize::new(2, 2));
    {
        let mut gfx = frame.renderer();
        gfx.clear(BLACK);
        gfx.draw_image(&image, Rect::new(0, 0, 2, 2), 1.0);
    }
    assert_eq!(frame.pixel(0, 0), Some(BLACK));
}

#[test]
fn zero_opacity_draws_nothing() {
    let image = Image::solid(2, 2, WHITE);
    let mut frame = RgbaFrame::new(SurfaceSize::new(2, 2));
    {
        let mut gfx = frame.renderer();
        gfx.clear(BLACK);
        gfx.draw_image(&image, Rect::new(0, 0, 2, 2), 0.0);
    }
    assert_eq!(frame.pixel(1, 1), Some(BLACK));
}

#[test]
fn text_stays_inside_its_measured_box() {
    let scale = 3;
    let text = "Q - BATO";
    let w = text_width(text, scale);
    let h = text_height(scale);

    let size = SurfaceSize::new(w + 20, h + 20);
    let mut buf = vec![0u8; size.rgba_len()];
    let mut gfx = CpuRenderer::new(&mut buf, size);
    gfx.draw_text_scaled(10, 10, text, WHITE, scale);

    let mut inked = 0;
    for (i, px) in buf.chunks_exact(4).enumerate() {
        if px != WHITE {
            continue;
        }
        inked += 1;
        let x = i as u32 % size.width;
        let y = i as u32 / size.width;
        assert!((10..10 + w).contains(&x), "x={x} outside text box");
        assert!((10..10 + h).contains(&y), "y={y} outside text box");
    }
    assert!(inked > 0);
}

#[test]
fn centered_text_is_balanced() {
    let width = 200;
    let text = "TIE!";
    let x = centered_x(width, text, 4);
    let right_margin = width - x - text_width(text, 4);
    assert!(x.abs_diff(right_margin) <= 1);
}

#[test]
fn outline_touches_only_the_border() {
    let mut frame = RgbaFrame::new(SurfaceSize::new(6, 6));
    frame.renderer().rect_outline(Rect::new(1, 1, 4, 4), WHITE);
    assert_eq!(frame.pixel(1, 1), Some(WHITE));
    assert_eq!(frame.pixel(4, 4), Some(WHITE));
    assert_eq!(frame.pixel(4, 1), Some(WHITE));
    assert_eq!(frame.pixel(2, 2), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
}
