use std::rc::Rc;
use std::time::Instant;

use engine::app::{AppControl, GameApp};
use engine::audio::AudioOutput;
use engine::graphics::Renderer2d;
use engine::input::InputEvent;
use engine::surface::SurfaceSize;

use crate::assets::GameAssets;
use crate::hand::HandPicker;
use crate::screens::menu::MenuScreen;
use crate::screens::playing::PlayingScreen;
use crate::screens::settings::SettingsScreen;
use crate::screens::{Effects, ScreenEffect};
use crate::sound::SoundManager;
use crate::state::{GameState, StateEffect, StateEvent};

/// The whole running game: current state, one controller per state and the sound manager.
///
/// Screens report what should happen as `ScreenEffect`s; this is the only place that applies
/// them, so audio and state changes happen in one order no matter which screen asked.
pub struct GameContext {
    state: GameState,
    menu: MenuScreen,
    playing: PlayingScreen,
    settings: SettingsScreen,
    sound: SoundManager,
    size: SurfaceSize,
}

impl GameContext {
    pub fn new(
        assets: GameAssets,
        output: Rc<dyn AudioOutput>,
        picker: Box<dyn HandPicker>,
        size: SurfaceSize,
    ) -> Self {
        let mut ctx = Self {
            state: GameState::default(),
            menu: MenuScreen::new(assets.menu, size),
            playing: PlayingScreen::new(assets.playing, picker, size),
            settings: SettingsScreen::new(assets.settings, size),
            sound: SoundManager::new(assets.sounds, output),
            size,
        };
        let initial = ctx.settings.initial_effects();
        ctx.apply(initial);
        ctx.sound.play_menu_music();
        ctx
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn menu(&self) -> &MenuScreen {
        &self.menu
    }

    pub fn playing(&self) -> &PlayingScreen {
        &self.playing
    }

    pub fn settings(&self) -> &SettingsScreen {
        &self.settings
    }

    pub fn sound(&self) -> &SoundManager {
        &self.sound
    }

    fn apply(&mut self, effects: Effects) -> AppControl {
        let mut control = AppControl::Continue;
        for effect in effects {
            match effect {
                ScreenEffect::Sound(cue) => self.sound.play(cue),
                ScreenEffect::Transition(event) => self.transition(event),
                ScreenEffect::SetSfxVolume(volume) => self.sound.set_sfx_volume(volume),
                ScreenEffect::SetMusicVolume(volume) => self.sound.set_music_volume(volume),
                ScreenEffect::Quit => {
                    log::info!("quit requested");
                    control = AppControl::Exit;
                }
            }
        }
        control
    }

    fn transition(&mut self, event: StateEvent) {
        let (next, effect) = self.state.handle(event);
        match effect {
            StateEffect::SwitchToPlayingMusic => self.sound.switch_to_playing_music(),
            StateEffect::SwitchToMenuMusic => self.sound.switch_to_menu_music(),
            StateEffect::None => {}
        }
        if next != self.state {
            log::info!("state {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}

impl GameApp for GameContext {
    fn handle_input(&mut self, event: InputEvent, now: Instant) -> AppControl {
        let effects = match self.state {
            GameState::Menu => self.menu.handle_input(event),
            GameState::Playing => self.playing.handle_input(event, now),
            GameState::Settings => self.settings.handle_input(event),
        };
        self.apply(effects)
    }

    fn resize(&mut self, size: SurfaceSize) {
        if size.is_empty() || size == self.size {
            return;
        }
        self.size = size;
        self.menu.resize(size);
        self.playing.resize(size);
        self.settings.resize(size);
    }

    fn render(&mut self, gfx: &mut dyn Renderer2d, now: Instant) {
        match self.state {
            GameState::Menu => self.menu.render(gfx),
            GameState::Playing => self.playing.render(gfx, now),
            GameState::Settings => self.settings.render(gfx),
        }
    }

    fn shutdown(&mut self) {
        log::info!("shutting down, stopping audio");
        self.sound.cleanup();
    }
}
