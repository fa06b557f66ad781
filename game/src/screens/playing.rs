use std::time::Instant;

use engine::buttons::ButtonSet;
use engine::graphics::{Color, Renderer2d};
use engine::image::Image;
use engine::input::InputEvent;
use engine::surface::SurfaceSize;
use engine::ui::{self, Rect, Size};

use super::{
    Effects, LARGE_TEXT_SCALE, MEDIUM_TEXT_SCALE, ScreenEffect, draw_centered_at_baseline,
    draw_fallback_button, draw_image_or, draw_lines, pick_button_image,
};
use crate::assets::AssetDir;
use crate::config::{paths, playing};
use crate::hand::{Hand, HandPicker};
use crate::input::{KeyCommand, key_command};
use crate::round::{Match, Winner};
use crate::sound::Cue;
use crate::state::StateEvent;

const COLOR_PLAYING_BG: Color = [128, 128, 128, 255];
const COLOR_HEART: Color = [210, 40, 50, 255];
const COLOR_HEART_EMPTY: Color = [70, 70, 70, 255];
const COLOR_OVERLAY: Color = [0, 0, 0, 255];

/// Pause menu buttons, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseButton {
    Retry,
    Menu,
    Resume,
}

impl PauseButton {
    pub const ALL: [PauseButton; 3] = [PauseButton::Retry, PauseButton::Menu, PauseButton::Resume];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            PauseButton::Retry => "RETRY",
            PauseButton::Menu => "MENU",
            PauseButton::Resume => "RESUME",
        }
    }
}

/// Hand images are indexed by `Hand::index`, pause menu images like `PauseButton::ALL`.
#[derive(Debug, Clone, Default)]
pub struct PlayingImages {
    pub background: Option<Image>,
    pub heart: Option<Image>,
    pub empty_heart: Option<Image>,
    pub hand_buttons: [Option<Image>; 3],
    pub hand_buttons_hovered: [Option<Image>; 3],
    pub player_hands: [Option<Image>; 3],
    pub computer_hands: [Option<Image>; 3],
    pub pause_button: Option<Image>,
    pub pause_button_hovered: Option<Image>,
    pub pause_overlay: Option<Image>,
    pub pause_menu: [Option<Image>; 3],
    pub pause_menu_hovered: [Option<Image>; 3],
}

impl PlayingImages {
    pub fn load(dir: &AssetDir) -> Self {
        Self {
            background: dir.image(paths::PLAYING_BG),
            heart: dir.image(paths::HEART),
            empty_heart: dir.image(paths::EMPTY_HEART),
            hand_buttons: [
                dir.image(paths::ROCK_BUTTON),
                dir.image(paths::PAPER_BUTTON),
                dir.image(paths::SCISSORS_BUTTON),
            ],
            hand_buttons_hovered: [
                dir.image(paths::ROCK_CLICKED),
                dir.image(paths::PAPER_CLICKED),
                dir.image(paths::SCISSORS_CLICKED),
            ],
            player_hands: [
                dir.image(paths::ROCK_HAND),
                dir.image(paths::PAPER_HAND),
                dir.image(paths::SCISSORS_HAND),
            ],
            computer_hands: [
                dir.image(paths::ROCK_COMP),
                dir.image(paths::PAPER_COMP),
                dir.image(paths::SCISSORS_COMP),
            ],
            pause_button: dir.image(paths::PAUSE_BUTTON),
            pause_button_hovered: dir.image(paths::PAUSE_BUTTON_HOVER),
            pause_overlay: dir.image(paths::PAUSE_OVERLAY),
            pause_menu: [
                dir.image(paths::RETRY_BUTTON),
                dir.image(paths::MENU_BUTTON),
                dir.image(paths::RESUME_BUTTON),
            ],
            pause_menu_hovered: [
                dir.image(paths::RETRY_BUTTON_HOVER),
                dir.image(paths::MENU_BUTTON_HOVER),
                dir.image(paths::RESUME_BUTTON_HOVER),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayingLayout {
    /// Rock, Paper, Scissors, left to right.
    pub hand_buttons: Vec<Rect>,
    pub player_hand: Rect,
    pub computer_hand: Rect,
    pub player_hearts: Vec<Rect>,
    pub computer_hearts: Vec<Rect>,
    pub pause_button: Rect,
    pub pause_menu: Vec<Rect>,
}

impl PlayingLayout {
    pub fn compute(size: SurfaceSize) -> Self {
        let hearts = playing::TOTAL_HEARTS as usize;
        let heart = Size::new(playing::HEART_SIZE, playing::HEART_SIZE);
        let heart_step = playing::HEART_SIZE + playing::HEART_SPACING;

        let button_step = playing::BUTTON_WIDTH + playing::BUTTON_SPACING;
        let centre_x = (size.width / 2).saturating_sub(playing::BUTTON_WIDTH / 2);
        let buttons_y = size
            .height
            .saturating_sub(playing::BUTTON_Y_FROM_BOTTOM + playing::BUTTON_HEIGHT);

        let menu_step = playing::PAUSE_MENU_BUTTON_WIDTH + playing::PAUSE_MENU_SPACING;
        let menu_centre_x = (size.width / 2).saturating_sub(playing::PAUSE_MENU_BUTTON_WIDTH / 2);
        let menu_y = (size.height / 2).saturating_sub(playing::PAUSE_MENU_BUTTON_HEIGHT / 2);

        Self {
            hand_buttons: ui::row(
                centre_x.saturating_sub(button_step),
                buttons_y,
                Size::new(playing::BUTTON_WIDTH, playing::BUTTON_HEIGHT),
                playing::BUTTON_SPACING,
                Hand::ALL.len(),
            ),
            player_hand: Rect::new(
                playing::HAND_X,
                playing::HAND_Y,
                playing::HAND_WIDTH,
                playing::HAND_HEIGHT,
            ),
            computer_hand: Rect::new(
                size.width
                    .saturating_sub(playing::HAND_WIDTH + playing::HAND_X),
                playing::HAND_Y,
                playing::HAND_WIDTH,
                playing::HAND_HEIGHT,
            ),
            player_hearts: ui::row(
                playing::PAUSE_BUTTON_SIZE + 2 * playing::HEART_SPACING,
                playing::HEART_Y,
                heart,
                playing::HEART_SPACING,
                hearts,
            ),
            computer_hearts: ui::row(
                size.width.saturating_sub(heart_step * hearts as u32),
                playing::HEART_Y,
                heart,
                playing::HEART_SPACING,
                hearts,
            ),
            pause_button: Rect::new(
                playing::PAUSE_BUTTON_X,
                playing::PAUSE_BUTTON_Y,
                playing::PAUSE_BUTTON_SIZE,
                playing::PAUSE_BUTTON_SIZE,
            ),
            pause_menu: ui::row(
                menu_centre_x.saturating_sub(menu_step),
                menu_y,
                Size::new(
                    playing::PAUSE_MENU_BUTTON_WIDTH,
                    playing::PAUSE_MENU_BUTTON_HEIGHT,
                ),
                playing::PAUSE_MENU_SPACING,
                PauseButton::ALL.len(),
            ),
        }
    }
}

/// The match screen: hand buttons, hearts, result banner and the pause overlay.
pub struct PlayingScreen {
    images: PlayingImages,
    layout: PlayingLayout,
    game: Match,
    picker: Box<dyn HandPicker>,
    paused: bool,
    hand_buttons: ButtonSet,
    pause_button: ButtonSet,
    pause_menu: ButtonSet,
}

impl PlayingScreen {
    pub fn new(images: PlayingImages, picker: Box<dyn HandPicker>, size: SurfaceSize) -> Self {
        let layout = PlayingLayout::compute(size);
        Self {
            images,
            hand_buttons: ButtonSet::new(layout.hand_buttons.clone()),
            pause_button: ButtonSet::new(vec![layout.pause_button]),
            pause_menu: ButtonSet::new(layout.pause_menu.clone()),
            layout,
            game: Match::new(),
            picker,
            paused: false,
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.layout = PlayingLayout::compute(size);
        self.hand_buttons.relayout(self.layout.hand_buttons.clone());
        self.pause_button.relayout(vec![self.layout.pause_button]);
        self.pause_menu.relayout(self.layout.pause_menu.clone());
    }

    pub fn layout(&self) -> &PlayingLayout {
        &self.layout
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn hand_buttons(&self) -> &ButtonSet {
        &self.hand_buttons
    }

    pub fn pause_button(&self) -> &ButtonSet {
        &self.pause_button
    }

    pub fn pause_menu(&self) -> &ButtonSet {
        &self.pause_menu
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("paused: {}", self.paused);
    }

    /// Plays a round with `hand`. Ignored while paused, after game over, or when this round
    /// already has a choice. Returns the win/lose cue when the round ends the game.
    pub fn choose_hand(&mut self, hand: Hand, now: Instant) -> Effects {
        if self.paused {
            return Vec::new();
        }
        let Some(report) = self.game.choose_hand(hand, self.picker.as_mut(), now) else {
            return Vec::new();
        };

        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&self.game) {
                Ok(json) => log::debug!("round resolved: {json}"),
                Err(err) => log::warn!("match snapshot failed: {err}"),
            }
        }

        match report.game_over {
            Some(Winner::Player) => vec![ScreenEffect::Sound(Cue::Win)],
            Some(Winner::Computer) => vec![ScreenEffect::Sound(Cue::Lose)],
            None => Vec::new(),
        }
    }

    pub fn can_advance(&self, now: Instant) -> bool {
        self.game.can_advance(now)
    }

    pub fn reset_round(&mut self) {
        self.game.reset_round();
    }

    /// Fresh match, unpaused.
    pub fn play_again(&mut self) {
        self.game.restart();
        self.paused = false;
    }

    /// Leaves the screen in its initial state for the next visit.
    pub fn cleanup_for_menu(&mut self) {
        self.play_again();
        self.hand_buttons.clear_hover();
        self.hand_buttons.clear_pressed();
        self.pause_button.clear_hover();
        self.pause_button.clear_pressed();
        self.pause_menu.clear_hover();
        self.pause_menu.clear_pressed();
    }

    pub fn handle_input(&mut self, event: InputEvent, now: Instant) -> Effects {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.pause_button.update_hover(x, y);
                if self.paused {
                    self.pause_menu.update_hover(x, y);
                } else {
                    self.hand_buttons.update_hover(x, y);
                }
                Vec::new()
            }
            InputEvent::PointerPressed { x, y } => {
                self.pause_button.press_at(x, y);
                if self.paused {
                    self.pause_menu.press_at(x, y);
                } else {
                    self.hand_buttons.press_at(x, y);
                }
                Vec::new()
            }
            InputEvent::PointerReleased { .. } => {
                self.pause_button.clear_pressed();
                self.pause_menu.clear_pressed();
                self.hand_buttons.clear_pressed();
                Vec::new()
            }
            InputEvent::PointerExited => {
                self.hand_buttons.clear_hover();
                Vec::new()
            }
            InputEvent::PointerClicked { x, y } => self.click(x, y, now),
            InputEvent::KeyPressed(key) => match key_command(key) {
                Some(command) => self.key(command, now),
                None => Vec::new(),
            },
        }
    }

    fn click(&mut self, x: u32, y: u32, now: Instant) -> Effects {
        if self.pause_button.hit_test(x, y).is_some() {
            self.toggle_pause();
            return vec![ScreenEffect::Sound(Cue::Click)];
        }

        if self.paused {
            let Some(button) = self
                .pause_menu
                .hit_test(x, y)
                .and_then(PauseButton::from_index)
            else {
                return Vec::new();
            };
            return self.pause_menu_click(button);
        }

        if let Some(hand) = self.hand_buttons.hit_test(x, y).and_then(Hand::from_index) {
            let mut effects = vec![ScreenEffect::Sound(Cue::Click)];
            effects.extend(self.choose_hand(hand, now));
            return effects;
        }

        if self.can_advance(now) {
            self.reset_round();
        }
        Vec::new()
    }

    pub fn pause_menu_click(&mut self, button: PauseButton) -> Effects {
        match button {
            PauseButton::Resume => {
                self.toggle_pause();
                vec![ScreenEffect::Sound(Cue::Click)]
            }
            PauseButton::Retry => {
                self.play_again();
                vec![ScreenEffect::Sound(Cue::Click)]
            }
            PauseButton::Menu => {
                self.cleanup_for_menu();
                vec![
                    ScreenEffect::Sound(Cue::Click),
                    ScreenEffect::Transition(StateEvent::ReturnToMenu),
                ]
            }
        }
    }

    fn key(&mut self, command: KeyCommand, now: Instant) -> Effects {
        match command {
            KeyCommand::Back if self.paused => {
                self.cleanup_for_menu();
                vec![
                    ScreenEffect::Sound(Cue::Click),
                    ScreenEffect::Transition(StateEvent::ReturnToMenu),
                ]
            }
            KeyCommand::Back => {
                self.toggle_pause();
                vec![ScreenEffect::Sound(Cue::Click)]
            }
            KeyCommand::Choose(hand) => {
                let mut effects = vec![ScreenEffect::Sound(Cue::Click)];
                effects.extend(self.choose_hand(hand, now));
                effects
            }
            KeyCommand::Advance if !self.paused && self.can_advance(now) => {
                self.reset_round();
                vec![ScreenEffect::Sound(Cue::Click)]
            }
            KeyCommand::Advance => Vec::new(),
        }
    }

    pub fn render(&self, gfx: &mut dyn Renderer2d, now: Instant) {
        let size = gfx.size();
        draw_image_or(
            gfx,
            self.images.background.as_ref(),
            Rect::from_size(size.width, size.height),
            |g| g.clear(COLOR_PLAYING_BG),
        );

        self.draw_hands(gfx);
        self.draw_hearts(gfx);

        for (i, hand) in Hand::ALL.into_iter().enumerate() {
            let Some(rect) = self.hand_buttons.rect(i) else {
                continue;
            };
            let hovered = self.hand_buttons.is_hovered(i);
            let image = pick_button_image(
                self.images.hand_buttons[i].as_ref(),
                self.images.hand_buttons_hovered[i].as_ref(),
                hovered,
            );
            draw_image_or(gfx, image, rect, |g| {
                draw_fallback_button(g, rect, hand.label(), hovered, false)
            });
        }

        let pause_rect = self.layout.pause_button;
        let pause_hovered = self.pause_button.is_hovered(0);
        let image = pick_button_image(
            self.images.pause_button.as_ref(),
            self.images.pause_button_hovered.as_ref(),
            pause_hovered,
        );
        draw_image_or(gfx, image, pause_rect, |g| {
            draw_fallback_button(g, pause_rect, "II", pause_hovered, false)
        });

        if let Some(text) = self.game.result_text() {
            draw_centered_at_baseline(gfx, playing::RESULT_TEXT_Y, text, LARGE_TEXT_SCALE);
            if self.can_advance(now) {
                let hint = if self.game.is_game_over() {
                    playing::CONTINUE_TEXT_GAME_OVER
                } else {
                    playing::CONTINUE_TEXT
                };
                draw_centered_at_baseline(gfx, playing::CONTINUE_TEXT_Y, hint, MEDIUM_TEXT_SCALE);
            }
        }

        draw_lines(gfx, playing::TEXT_X, &playing::CONTROL_LINES);

        if self.paused {
            self.draw_pause_overlay(gfx);
        }
    }

    fn draw_hands(&self, gfx: &mut dyn Renderer2d) {
        let (player, computer) = self.game.displayed_hands();
        for (hand, rect, images) in [
            (player, self.layout.player_hand, &self.images.player_hands),
            (
                computer,
                self.layout.computer_hand,
                &self.images.computer_hands,
            ),
        ] {
            draw_image_or(gfx, images[hand.index()].as_ref(), rect, |g| {
                draw_fallback_button(g, rect, hand.label(), false, false)
            });
        }
    }

    fn draw_hearts(&self, gfx: &mut dyn Renderer2d) {
        let sides = [
            (&self.layout.player_hearts, self.game.player_lives()),
            (&self.layout.computer_hearts, self.game.computer_lives()),
        ];
        for (rects, lives) in sides {
            for (i, &rect) in rects.iter().enumerate() {
                let full = i < lives as usize;
                let image = if full {
                    self.images.heart.as_ref()
                } else {
                    self.images.empty_heart.as_ref()
                };
                draw_image_or(gfx, image, rect, |g| {
                    if full {
                        g.fill_rect(rect, COLOR_HEART);
                    } else {
                        g.rect_outline(rect, COLOR_HEART_EMPTY);
                    }
                });
            }
        }
    }

    fn draw_pause_overlay(&self, gfx: &mut dyn Renderer2d) {
        let size = gfx.size();
        let screen = Rect::from_size(size.width, size.height);
        match self.images.pause_overlay.as_ref() {
            Some(overlay) => gfx.draw_image(overlay, screen, playing::PAUSE_OVERLAY_OPACITY),
            None => gfx.blend_rect(screen, COLOR_OVERLAY, playing::PAUSE_FALLBACK_ALPHA),
        }

        for (i, button) in PauseButton::ALL.into_iter().enumerate() {
            let Some(rect) = self.pause_menu.rect(i) else {
                continue;
            };
            let hovered = self.pause_menu.is_hovered(i);
            let image = pick_button_image(
                self.images.pause_menu[i].as_ref(),
                self.images.pause_menu_hovered[i].as_ref(),
                hovered,
            );
            draw_image_or(gfx, image, rect, |g| {
                draw_fallback_button(g, rect, button.label(), hovered, false)
            });
        }
    }
}
