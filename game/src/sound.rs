use std::rc::Rc;

use engine::audio::{AudioOutput, MusicTrack, SoundClip, SoundEffect};
use serde::{Deserialize, Serialize};

use crate::assets::AssetDir;
use crate::config::paths;
use crate::sfx::{DEFAULT_MUSIC_VOLUME, DEFAULT_SFX_VOLUME};

/// One-shot effects the screens can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Click,
    Win,
    Lose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Music {
    Menu,
    Playing,
}

/// Encoded clips for every sound in the game.
#[derive(Debug, Clone)]
pub struct SoundClips {
    pub click: SoundClip,
    pub win: SoundClip,
    pub lose: SoundClip,
    pub menu_music: SoundClip,
    pub playing_music: SoundClip,
}

impl SoundClips {
    pub fn load(dir: &AssetDir) -> Self {
        Self {
            click: dir.sound(paths::CLICK_SOUND),
            win: dir.sound(paths::WIN_SOUND),
            lose: dir.sound(paths::LOSE_SOUND),
            menu_music: dir.sound(paths::MENU_MUSIC),
            playing_music: dir.sound(paths::PLAYING_MUSIC),
        }
    }

    /// All clips inert; the game runs silent.
    pub fn silent() -> Self {
        Self {
            click: SoundClip::inert(paths::CLICK_SOUND),
            win: SoundClip::inert(paths::WIN_SOUND),
            lose: SoundClip::inert(paths::LOSE_SOUND),
            menu_music: SoundClip::inert(paths::MENU_MUSIC),
            playing_music: SoundClip::inert(paths::PLAYING_MUSIC),
        }
    }
}

/// Owns every effect and music track and keeps their volumes in step.
pub struct SoundManager {
    click: SoundEffect,
    win: SoundEffect,
    lose: SoundEffect,
    menu_music: MusicTrack,
    playing_music: MusicTrack,
}

impl SoundManager {
    pub fn new(clips: SoundClips, output: Rc<dyn AudioOutput>) -> Self {
        Self {
            click: SoundEffect::new(clips.click, output.clone(), DEFAULT_SFX_VOLUME),
            win: SoundEffect::new(clips.win, output.clone(), DEFAULT_SFX_VOLUME),
            lose: SoundEffect::new(clips.lose, output.clone(), DEFAULT_SFX_VOLUME),
            menu_music: MusicTrack::new(clips.menu_music, output.clone(), DEFAULT_MUSIC_VOLUME),
            playing_music: MusicTrack::new(clips.playing_music, output, DEFAULT_MUSIC_VOLUME),
        }
    }

    pub fn play(&mut self, cue: Cue) {
        self.effect_mut(cue).play();
    }

    pub fn effect(&self, cue: Cue) -> &SoundEffect {
        match cue {
            Cue::Click => &self.click,
            Cue::Win => &self.win,
            Cue::Lose => &self.lose,
        }
    }

    fn effect_mut(&mut self, cue: Cue) -> &mut SoundEffect {
        match cue {
            Cue::Click => &mut self.click,
            Cue::Win => &mut self.win,
            Cue::Lose => &mut self.lose,
        }
    }

    pub fn track(&self, music: Music) -> &MusicTrack {
        match music {
            Music::Menu => &self.menu_music,
            Music::Playing => &self.playing_music,
        }
    }

    pub fn sfx_volume(&self) -> f32 {
        self.click.volume()
    }

    pub fn music_volume(&self) -> f32 {
        self.menu_music.volume()
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.click.set_volume(volume);
        self.win.set_volume(volume);
        self.lose.set_volume(volume);
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.menu_music.set_volume(volume);
        self.playing_music.set_volume(volume);
    }

    pub fn play_menu_music(&mut self) {
        self.menu_music.play();
    }

    pub fn switch_to_playing_music(&mut self) {
        self.menu_music.stop();
        self.playing_music.reset_to_beginning();
        self.playing_music.play();
    }

    pub fn switch_to_menu_music(&mut self) {
        self.playing_music.stop();
        self.menu_music.reset_to_beginning();
        self.menu_music.play();
    }

    pub fn cleanup(&mut self) {
        self.click.stop();
        self.win.stop();
        self.lose.stop();
        self.menu_music.stop();
        self.playing_music.stop();
    }
}
