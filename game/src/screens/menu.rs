use engine::buttons::ButtonSet;
use engine::font::{centered_x, text_height};
use engine::graphics::{Color, Renderer2d};
use engine::image::Image;
use engine::input::InputEvent;
use engine::surface::SurfaceSize;
use engine::ui::{self, Anchor, Rect, Size};

use super::{
    COLOR_TEXT, Effects, LARGE_TEXT_SCALE, ScreenEffect, draw_fallback_button, draw_image_or,
    draw_lines, pick_button_image,
};
use crate::assets::AssetDir;
use crate::config::{menu, paths};
use crate::sound::Cue;
use crate::state::StateEvent;

const COLOR_MENU_BG: Color = [24, 64, 72, 255];
const FALLBACK_TITLE: &str = "BATO BATO PIK";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Play,
    Settings,
    Quit,
}

impl MenuButton {
    pub const ALL: [MenuButton; 3] = [MenuButton::Play, MenuButton::Settings, MenuButton::Quit];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuButton::Play => "PLAY",
            MenuButton::Settings => "SETTINGS",
            MenuButton::Quit => "QUIT",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuImages {
    pub background: Option<Image>,
    pub title: Option<Image>,
    /// Indexed like `MenuButton::ALL`.
    pub buttons: [Option<Image>; 3],
    pub buttons_hovered: [Option<Image>; 3],
}

impl MenuImages {
    pub fn load(dir: &AssetDir) -> Self {
        Self {
            background: dir.image(paths::MENU_BACKGROUND),
            title: dir.image(paths::MENU_TITLE),
            buttons: [
                dir.image(paths::PLAY_BUTTON),
                dir.image(paths::SETTINGS_BUTTON),
                dir.image(paths::QUIT_BUTTON),
            ],
            buttons_hovered: [
                dir.image(paths::PLAY_CLICKED),
                dir.image(paths::SETTINGS_CLICKED),
                dir.image(paths::QUIT_CLICKED),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    pub background: Rect,
    pub title: Rect,
    pub buttons: Vec<Rect>,
}

impl MenuLayout {
    pub fn compute(size: SurfaceSize) -> Self {
        let screen = Rect::from_size(size.width, size.height);
        let x = size.width.saturating_sub(menu::BUTTON_WIDTH) / 2;
        Self {
            background: Rect::new(
                0,
                0,
                size.width.saturating_add(menu::BACKGROUND_PADDING),
                size.height.saturating_add(menu::BACKGROUND_PADDING),
            ),
            title: screen.place(
                Size::new(menu::TITLE_WIDTH, menu::TITLE_HEIGHT),
                Anchor::TopCenter,
            ),
            buttons: ui::column(
                x,
                menu::BUTTON_Y,
                Size::new(menu::BUTTON_WIDTH, menu::BUTTON_HEIGHT),
                menu::BUTTON_SPACING,
                MenuButton::ALL.len(),
            ),
        }
    }
}

pub struct MenuScreen {
    images: MenuImages,
    layout: MenuLayout,
    buttons: ButtonSet,
}

impl MenuScreen {
    pub fn new(images: MenuImages, size: SurfaceSize) -> Self {
        let layout = MenuLayout::compute(size);
        let buttons = ButtonSet::new(layout.buttons.clone());
        Self {
            images,
            layout,
            buttons,
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.layout = MenuLayout::compute(size);
        self.buttons.relayout(self.layout.buttons.clone());
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn buttons(&self) -> &ButtonSet {
        &self.buttons
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Effects {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.buttons.update_hover(x, y);
            }
            InputEvent::PointerPressed { x, y } => {
                self.buttons.press_at(x, y);
            }
            InputEvent::PointerReleased { .. } => self.buttons.clear_pressed(),
            InputEvent::PointerExited => self.buttons.clear_hover(),
            InputEvent::PointerClicked { x, y } => {
                if let Some(button) = self.buttons.hit_test(x, y).and_then(MenuButton::from_index) {
                    return self.click(button);
                }
            }
            InputEvent::KeyPressed(_) => {}
        }
        Vec::new()
    }

    pub fn click(&mut self, button: MenuButton) -> Effects {
        match button {
            MenuButton::Play => vec![
                ScreenEffect::Transition(StateEvent::Play),
                ScreenEffect::Sound(Cue::Click),
            ],
            MenuButton::Settings => vec![
                ScreenEffect::Transition(StateEvent::OpenSettings),
                ScreenEffect::Sound(Cue::Click),
            ],
            MenuButton::Quit => vec![ScreenEffect::Sound(Cue::Click), ScreenEffect::Quit],
        }
    }

    pub fn render(&self, gfx: &mut dyn Renderer2d) {
        draw_image_or(
            gfx,
            self.images.background.as_ref(),
            self.layout.background,
            |g| g.clear(COLOR_MENU_BG),
        );

        let title = self.layout.title;
        draw_image_or(gfx, self.images.title.as_ref(), title, |g| {
            let x = title.x + centered_x(title.w, FALLBACK_TITLE, LARGE_TEXT_SCALE);
            let y = title.y + title.h.saturating_sub(text_height(LARGE_TEXT_SCALE)) / 2;
            g.draw_text_scaled(x, y, FALLBACK_TITLE, COLOR_TEXT, LARGE_TEXT_SCALE);
        });

        for (i, button) in MenuButton::ALL.into_iter().enumerate() {
            let Some(rect) = self.buttons.rect(i) else {
                continue;
            };
            let hovered = self.buttons.is_hovered(i);
            let image = pick_button_image(
                self.images.buttons[i].as_ref(),
                self.images.buttons_hovered[i].as_ref(),
                hovered,
            );
            draw_image_or(gfx, image, rect, |g| {
                draw_fallback_button(g, rect, button.label(), hovered, false)
            });
        }

        draw_lines(gfx, menu::TEXT_X, &menu::INFO_LINES);
    }
}
