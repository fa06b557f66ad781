#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use bato_bato_pik::assets::GameAssets;
use bato_bato_pik::context::GameContext;
use bato_bato_pik::hand::HandPicker;
use bato_bato_pik::sound::SoundClips;
use engine::app::{AppControl, GameApp};
use engine::audio::{AudioOutput, Playback, SoundClip};
use engine::input::InputEvent;
use engine::surface::SurfaceSize;
use engine::ui::Rect;
use winit::event::VirtualKeyCode;

pub const WINDOW: SurfaceSize = SurfaceSize::new(1530, 890);

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    Start { clip: String, looping: bool },
    Stop(String),
    Pause(String),
    Resume(String),
    Amplitude(String, f32),
}

#[derive(Debug, Default)]
struct Voice {
    clip: String,
    stopped: bool,
    finished: bool,
}

/// `AudioOutput` that plays nothing and remembers everything it was asked to do.
#[derive(Default)]
pub struct RecordingOutput {
    calls: Rc<RefCell<Vec<AudioCall>>>,
    voices: RefCell<Vec<Rc<RefCell<Voice>>>>,
}

impl RecordingOutput {
    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn starts(&self, clip: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, AudioCall::Start { clip: name, .. } if name == clip))
            .count()
    }

    /// Voices of `clip` that are neither stopped nor finished.
    pub fn live(&self, clip: &str) -> usize {
        self.voices
            .borrow()
            .iter()
            .filter(|v| {
                let v = v.borrow();
                v.clip == clip && !v.stopped && !v.finished
            })
            .count()
    }

    /// Lets every one-shot voice run out, as if time had passed.
    pub fn finish_effects(&self) {
        for voice in self.voices.borrow().iter() {
            let mut voice = voice.borrow_mut();
            if !matches!(voice.clip.as_str(), "menu" | "playing") {
                voice.finished = true;
            }
        }
    }

    pub fn last_amplitude(&self, clip: &str) -> Option<f32> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            AudioCall::Amplitude(name, a) if name == clip => Some(*a),
            _ => None,
        })
    }
}

struct RecordingVoice {
    voice: Rc<RefCell<Voice>>,
    calls: Rc<RefCell<Vec<AudioCall>>>,
}

impl RecordingVoice {
    fn clip(&self) -> String {
        self.voice.borrow().clip.clone()
    }
}

impl Playback for RecordingVoice {
    fn set_amplitude(&mut self, amplitude: f32) {
        let clip = self.clip();
        self.calls
            .borrow_mut()
            .push(AudioCall::Amplitude(clip, amplitude));
    }

    fn pause(&mut self) {
        let clip = self.clip();
        self.calls.borrow_mut().push(AudioCall::Pause(clip));
    }

    fn resume(&mut self) {
        let clip = self.clip();
        self.calls.borrow_mut().push(AudioCall::Resume(clip));
    }

    fn stop(&mut self) {
        self.voice.borrow_mut().stopped = true;
        let clip = self.clip();
        self.calls.borrow_mut().push(AudioCall::Stop(clip));
    }

    fn is_finished(&self) -> bool {
        let v = self.voice.borrow();
        v.stopped || v.finished
    }
}

impl AudioOutput for RecordingOutput {
    fn start(&self, clip: &SoundClip, looping: bool, _amplitude: f32) -> Option<Box<dyn Playback>> {
        let voice = Rc::new(RefCell::new(Voice {
            clip: clip.name().to_string(),
            ..Voice::default()
        }));
        self.voices.borrow_mut().push(voice.clone());
        self.calls.borrow_mut().push(AudioCall::Start {
            clip: clip.name().to_string(),
            looping,
        });
        Some(Box::new(RecordingVoice {
            voice,
            calls: self.calls.clone(),
        }))
    }
}

/// Clips named after their role: click, win, lose, menu, playing.
pub fn named_clips() -> SoundClips {
    let clip = |name: &str| SoundClip::from_bytes(name, vec![0u8; 8]);
    SoundClips {
        click: clip("click"),
        win: clip("win"),
        lose: clip("lose"),
        menu_music: clip("menu"),
        playing_music: clip("playing"),
    }
}

/// A game with no images, named clips and the given computer picker.
pub fn new_game(picker: impl HandPicker + 'static) -> (GameContext, Rc<RecordingOutput>) {
    let output = Rc::new(RecordingOutput::default());
    let mut assets = GameAssets::missing();
    assets.sounds = named_clips();
    let game = GameContext::new(assets, output.clone(), Box::new(picker), WINDOW);
    (game, output)
}

pub fn centre(rect: Rect) -> (u32, u32) {
    (rect.x + rect.w / 2, rect.y + rect.h / 2)
}

/// Moves onto `rect`, presses and releases, the way the window glue reports a click.
pub fn click(game: &mut GameContext, rect: Rect, now: Instant) -> AppControl {
    let (x, y) = centre(rect);
    let mut control = AppControl::Continue;
    for event in [
        InputEvent::PointerMoved { x, y },
        InputEvent::PointerPressed { x, y },
        InputEvent::PointerReleased { x, y },
        InputEvent::PointerClicked { x, y },
    ] {
        if game.handle_input(event, now) == AppControl::Exit {
            control = AppControl::Exit;
        }
    }
    control
}

pub fn click_at(game: &mut GameContext, x: u32, y: u32, now: Instant) -> AppControl {
    click(game, Rect::new(x, y, 1, 1), now)
}

pub fn key(game: &mut GameContext, key: VirtualKeyCode, now: Instant) -> AppControl {
    game.handle_input(InputEvent::KeyPressed(key), now)
}
