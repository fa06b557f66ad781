use engine::buttons::ButtonSet;
use engine::graphics::{Color, Renderer2d};
use engine::image::Image;
use engine::input::InputEvent;
use engine::surface::SurfaceSize;
use engine::ui::{self, Rect, Size};
use winit::event::VirtualKeyCode;

use super::{
    Effects, MEDIUM_TEXT_SCALE, ScreenEffect, draw_fallback_button, draw_image_or, draw_lines,
    draw_text_at_baseline, pick_button_image,
};
use crate::assets::AssetDir;
use crate::config::{paths, settings};
use crate::sfx::{MusicPreset, SfxPreset};
use crate::sound::Cue;
use crate::state::StateEvent;

const COLOR_SETTINGS_BG: Color = [30, 34, 48, 255];
const ROW_LABEL_GAP: u32 = 12;

#[derive(Debug, Clone, Default)]
pub struct SettingsImages {
    pub background: Option<Image>,
    /// Indexed like `SfxPreset::ALL`.
    pub sfx: [Option<Image>; 2],
    pub sfx_hovered: [Option<Image>; 2],
    /// Indexed like `MusicPreset::ALL`.
    pub music: [Option<Image>; 3],
    pub music_hovered: [Option<Image>; 3],
}

impl SettingsImages {
    pub fn load(dir: &AssetDir) -> Self {
        Self {
            background: dir.image(paths::SETTINGS_BACKGROUND),
            sfx: [dir.image(paths::SFX_MUTE), dir.image(paths::SFX_UNMUTE)],
            sfx_hovered: [
                dir.image(paths::SFX_MUTE_HOVER),
                dir.image(paths::SFX_UNMUTE_HOVER),
            ],
            music: [
                dir.image(paths::MUSIC_MUTE),
                dir.image(paths::MUSIC_HALF),
                dir.image(paths::MUSIC_FULL),
            ],
            music_hovered: [
                dir.image(paths::MUSIC_MUTE_HOVER),
                dir.image(paths::MUSIC_HALF_HOVER),
                dir.image(paths::MUSIC_FULL_HOVER),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLayout {
    pub sfx: Vec<Rect>,
    pub music: Vec<Rect>,
}

impl SettingsLayout {
    pub fn compute(size: SurfaceSize) -> Self {
        Self {
            sfx: centred_row(size.width, settings::SFX_Y, SfxPreset::ALL.len()),
            music: centred_row(size.width, settings::MUSIC_Y, MusicPreset::ALL.len()),
        }
    }
}

fn centred_row(width: u32, y: u32, count: usize) -> Vec<Rect> {
    let step = settings::BUTTON_WIDTH + settings::BUTTON_SPACING;
    let start = width.saturating_sub(step * count as u32) / 2;
    ui::row(
        start,
        y,
        Size::new(settings::BUTTON_WIDTH, settings::BUTTON_HEIGHT),
        settings::BUTTON_SPACING,
        count,
    )
}

/// Volume presets for effects and music, plus the credits.
pub struct SettingsScreen {
    images: SettingsImages,
    layout: SettingsLayout,
    sfx_preset: SfxPreset,
    music_preset: MusicPreset,
    sfx_buttons: ButtonSet,
    music_buttons: ButtonSet,
}

impl SettingsScreen {
    pub fn new(images: SettingsImages, size: SurfaceSize) -> Self {
        let layout = SettingsLayout::compute(size);
        Self {
            images,
            sfx_buttons: ButtonSet::new(layout.sfx.clone()),
            music_buttons: ButtonSet::new(layout.music.clone()),
            layout,
            sfx_preset: SfxPreset::default(),
            music_preset: MusicPreset::default(),
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.layout = SettingsLayout::compute(size);
        self.sfx_buttons.relayout(self.layout.sfx.clone());
        self.music_buttons.relayout(self.layout.music.clone());
    }

    pub fn layout(&self) -> &SettingsLayout {
        &self.layout
    }

    pub fn sfx_preset(&self) -> SfxPreset {
        self.sfx_preset
    }

    pub fn music_preset(&self) -> MusicPreset {
        self.music_preset
    }

    pub fn sfx_buttons(&self) -> &ButtonSet {
        &self.sfx_buttons
    }

    pub fn music_buttons(&self) -> &ButtonSet {
        &self.music_buttons
    }

    /// Volumes the sound manager should start with so it matches the active presets.
    pub fn initial_effects(&self) -> Effects {
        vec![
            ScreenEffect::SetSfxVolume(self.sfx_preset.volume()),
            ScreenEffect::SetMusicVolume(self.music_preset.volume()),
        ]
    }

    pub fn select_sfx(&mut self, preset: SfxPreset) -> Effects {
        if preset == self.sfx_preset {
            return Vec::new();
        }
        self.sfx_preset = preset;
        let mut effects = vec![ScreenEffect::SetSfxVolume(preset.volume())];
        effects.extend(self.click_feedback());
        effects
    }

    pub fn select_music(&mut self, preset: MusicPreset) -> Effects {
        if preset == self.music_preset {
            return Vec::new();
        }
        self.music_preset = preset;
        let mut effects = vec![ScreenEffect::SetMusicVolume(preset.volume())];
        effects.extend(self.click_feedback());
        effects
    }

    fn click_feedback(&self) -> Option<ScreenEffect> {
        (self.sfx_preset != SfxPreset::Mute).then_some(ScreenEffect::Sound(Cue::Click))
    }

    /// Selects the preset under `(x, y)`, if any. A release anywhere on a button counts, even
    /// after dragging within it.
    fn select_at(&mut self, x: u32, y: u32) -> Effects {
        if let Some(preset) = self
            .sfx_buttons
            .hit_test(x, y)
            .and_then(SfxPreset::from_index)
        {
            return self.select_sfx(preset);
        }
        if let Some(preset) = self
            .music_buttons
            .hit_test(x, y)
            .and_then(MusicPreset::from_index)
        {
            return self.select_music(preset);
        }
        Vec::new()
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Effects {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.sfx_buttons.update_hover(x, y);
                self.music_buttons.update_hover(x, y);
            }
            InputEvent::PointerPressed { x, y } => {
                self.sfx_buttons.press_at(x, y);
                self.music_buttons.press_at(x, y);
            }
            InputEvent::PointerReleased { x, y } => {
                self.sfx_buttons.clear_pressed();
                self.music_buttons.clear_pressed();
                return self.select_at(x, y);
            }
            InputEvent::PointerExited => {
                self.sfx_buttons.clear_hover();
                self.music_buttons.clear_hover();
            }
            // Usually already applied by the release, which makes this a no-op.
            InputEvent::PointerClicked { x, y } => return self.select_at(x, y),
            InputEvent::KeyPressed(VirtualKeyCode::Escape) => {
                return vec![
                    ScreenEffect::Transition(StateEvent::CloseSettings),
                    ScreenEffect::Sound(Cue::Click),
                ];
            }
            InputEvent::KeyPressed(_) => {}
        }
        Vec::new()
    }

    pub fn render(&self, gfx: &mut dyn Renderer2d) {
        let size = gfx.size();
        let sfx_row = self.layout.sfx.first().copied();
        let music_row = self.layout.music.first().copied();
        draw_image_or(
            gfx,
            self.images.background.as_ref(),
            Rect::from_size(size.width, size.height),
            |g| {
                g.clear(COLOR_SETTINGS_BG);
                for (row, label) in [(sfx_row, "SFX"), (music_row, "MUSIC")] {
                    if let Some(first) = row {
                        let baseline = first.y.saturating_sub(ROW_LABEL_GAP);
                        draw_text_at_baseline(g, first.x, baseline, label, MEDIUM_TEXT_SCALE);
                    }
                }
            },
        );

        for (i, preset) in SfxPreset::ALL.into_iter().enumerate() {
            let Some(rect) = self.sfx_buttons.rect(i) else {
                continue;
            };
            let hovered = self.sfx_buttons.is_hovered(i);
            let active = preset == self.sfx_preset;
            let image = pick_button_image(
                self.images.sfx[i].as_ref(),
                self.images.sfx_hovered[i].as_ref(),
                hovered || active,
            );
            draw_image_or(gfx, image, rect, |g| {
                draw_fallback_button(g, rect, preset.label(), hovered, active)
            });
        }

        for (i, preset) in MusicPreset::ALL.into_iter().enumerate() {
            let Some(rect) = self.music_buttons.rect(i) else {
                continue;
            };
            let hovered = self.music_buttons.is_hovered(i);
            let active = preset == self.music_preset;
            let image = pick_button_image(
                self.images.music[i].as_ref(),
                self.images.music_hovered[i].as_ref(),
                hovered || active,
            );
            draw_image_or(gfx, image, rect, |g| {
                draw_fallback_button(g, rect, preset.label(), hovered, active)
            });
        }

        let (baseline, hint) = settings::BACK_HINT;
        draw_text_at_baseline(gfx, settings::TEXT_X, baseline, hint, MEDIUM_TEXT_SCALE);
        draw_lines(gfx, settings::TEXT_X, &settings::CREDIT_LINES);
    }
}
