//! One controller per game state. Controllers never touch audio or the state machine directly:
//! they return `ScreenEffect`s and `GameContext` applies them in order.

pub mod menu;
pub mod playing;
pub mod settings;

use engine::font::{centered_x, text_height, text_width};
use engine::graphics::{Color, Renderer2d};
use engine::image::Image;
use engine::ui::Rect;

use crate::sound::Cue;
use crate::state::StateEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreenEffect {
    Sound(Cue),
    Transition(StateEvent),
    SetSfxVolume(f32),
    SetMusicVolume(f32),
    Quit,
}

pub type Effects = Vec<ScreenEffect>;

pub(crate) const COLOR_TEXT: Color = [255, 255, 255, 255];
pub(crate) const COLOR_BUTTON_BG: Color = [16, 16, 22, 255];
pub(crate) const COLOR_BUTTON_BORDER: Color = [40, 40, 55, 255];
pub(crate) const COLOR_BUTTON_ACTIVE: Color = [30, 110, 60, 255];
const BUTTON_HOVER_BRIGHTEN: f32 = 0.2;

/// Block-font scale for the small info/legend lines.
pub(crate) const SMALL_TEXT_SCALE: u32 = 3;
pub(crate) const MEDIUM_TEXT_SCALE: u32 = 4;
pub(crate) const LARGE_TEXT_SCALE: u32 = 8;

fn brighten_color(mut c: Color, amount: f32) -> Color {
    let t = amount.clamp(0.0, 1.0);
    for v in c.iter_mut().take(3) {
        let f = *v as f32;
        *v = (f + (255.0 - f) * t).round().clamp(0.0, 255.0) as u8;
    }
    c
}

fn button_colors(hovered: bool, active: bool) -> (Color, Color) {
    let fill = if active {
        COLOR_BUTTON_ACTIVE
    } else {
        COLOR_BUTTON_BG
    };
    if hovered {
        (
            brighten_color(fill, BUTTON_HOVER_BRIGHTEN),
            brighten_color(COLOR_BUTTON_BORDER, BUTTON_HOVER_BRIGHTEN),
        )
    } else {
        (fill, COLOR_BUTTON_BORDER)
    }
}

/// Box with a centred label, drawn where a button image is missing.
pub(crate) fn draw_fallback_button(
    gfx: &mut dyn Renderer2d,
    rect: Rect,
    label: &str,
    hovered: bool,
    active: bool,
) {
    let (fill, border) = button_colors(hovered, active);
    gfx.fill_rect(rect, fill);
    gfx.rect_outline(rect, border);

    let scale = if text_width(label, MEDIUM_TEXT_SCALE) + 8 <= rect.w {
        MEDIUM_TEXT_SCALE
    } else {
        SMALL_TEXT_SCALE
    };
    let x = rect.x + centered_x(rect.w, label, scale);
    let y = rect.y + rect.h.saturating_sub(text_height(scale)) / 2;
    gfx.draw_text_scaled(x, y, label, COLOR_TEXT, scale);
}

/// Draws `image` over `rect`, or runs `fallback` when the image failed to load.
pub(crate) fn draw_image_or(
    gfx: &mut dyn Renderer2d,
    image: Option<&Image>,
    rect: Rect,
    fallback: impl FnOnce(&mut dyn Renderer2d),
) {
    match image {
        Some(image) => gfx.draw_image(image, rect, 1.0),
        None => fallback(gfx),
    }
}

/// Text positioned by its baseline, the way the layout tables give it.
pub(crate) fn draw_text_at_baseline(
    gfx: &mut dyn Renderer2d,
    x: u32,
    baseline: u32,
    text: &str,
    scale: u32,
) {
    let y = baseline.saturating_sub(text_height(scale));
    gfx.draw_text_scaled(x, y, text, COLOR_TEXT, scale);
}

pub(crate) fn draw_centered_at_baseline(
    gfx: &mut dyn Renderer2d,
    baseline: u32,
    text: &str,
    scale: u32,
) {
    let x = centered_x(gfx.size().width, text, scale);
    draw_text_at_baseline(gfx, x, baseline, text, scale);
}

pub(crate) fn draw_lines(gfx: &mut dyn Renderer2d, x: u32, lines: &[(u32, &str)]) {
    for &(baseline, text) in lines {
        draw_text_at_baseline(gfx, x, baseline, text, SMALL_TEXT_SCALE);
    }
}

/// Image for a button: the highlighted variant when hovered or active, if it loaded.
pub(crate) fn pick_button_image<'a>(
    normal: Option<&'a Image>,
    highlighted: Option<&'a Image>,
    highlight: bool,
) -> Option<&'a Image> {
    if highlight {
        highlighted.or(normal)
    } else {
        normal
    }
}
