use std::cell::RefCell;
use std::rc::Rc;

use engine::audio::{
    AudioOutput, MAX_EFFECT_VOICES, MusicTrack, Playback, SoundClip, SoundEffect,
    volume_to_amplitude,
};

#[derive(Debug, Default)]
struct VoiceState {
    clip: String,
    looping: bool,
    amplitude: f32,
    paused: bool,
    stopped: bool,
    finished: bool,
}

/// Records every voice it starts; tests poke at the shared state directly.
#[derive(Default)]
struct FakeOutput {
    voices: RefCell<Vec<Rc<RefCell<VoiceState>>>>,
}

impl FakeOutput {
    fn started(&self) -> usize {
        self.voices.borrow().len()
    }

    fn voice(&self, index: usize) -> Rc<RefCell<VoiceState>> {
        self.voices.borrow()[index].clone()
    }

    fn live(&self) -> usize {
        self.voices
            .borrow()
            .iter()
            .filter(|v| {
                let v = v.borrow();
                !v.stopped && !v.finished
            })
            .count()
    }
}

struct FakeVoice(Rc<RefCell<VoiceState>>);

impl Playback for FakeVoice {
    fn set_amplitude(&mut self, amplitude: f32) {
        self.0.borrow_mut().amplitude = amplitude;
    }
    fn pause(&mut self) {
        self.0.borrow_mut().paused = true;
    }
    fn resume(&mut self) {
        self.0.borrow_mut().paused = false;
    }
    fn stop(&mut self) {
        self.0.borrow_mut().stopped = true;
    }
    fn is_finished(&self) -> bool {
        let v = self.0.borrow();
        v.stopped || v.finished
    }
}

impl AudioOutput for FakeOutput {
    fn start(&self, clip: &SoundClip, looping: bool, amplitude: f32) -> Option<Box<dyn Playback>> {
        let state = Rc::new(RefCell::new(VoiceState {
            clip: clip.name().to_string(),
            looping,
            amplitude,
            ..VoiceState::default()
        }));
        self.voices.borrow_mut().push(state.clone());
        Some(Box::new(FakeVoice(state)))
    }
}

fn clip(name: &str) -> SoundClip {
    SoundClip::from_bytes(name, vec![0u8; 4])
}

fn setup() -> (Rc<FakeOutput>, Rc<dyn AudioOutput>) {
    let fake = Rc::new(FakeOutput::default());
    let output: Rc<dyn AudioOutput> = fake.clone();
    (fake, output)
}

#[test]
fn effect_overlaps_rapid_repeats() {
    let (fake, output) = setup();
    let mut click = SoundEffect::new(clip("click"), output, 1.0);
    click.play();
    click.play();
    assert_eq!(fake.started(), 2);
    assert_eq!(click.active_voices(), 2);
    assert!(!fake.voice(0).borrow().looping);
}

#[test]
fn effect_steals_the_oldest_voice_past_the_cap() {
    let (fake, output) = setup();
    let mut click = SoundEffect::new(clip("click"), output, 1.0);
    for _ in 0..MAX_EFFECT_VOICES + 1 {
        click.play();
    }
    assert_eq!(click.active_voices(), MAX_EFFECT_VOICES);
    assert!(fake.voice(0).borrow().stopped);
    assert!(!fake.voice(1).borrow().stopped);
}

#[test]
fn finished_voices_free_their_slot() {
    let (fake, output) = setup();
    let mut click = SoundEffect::new(clip("click"), output, 1.0);
    for _ in 0..MAX_EFFECT_VOICES {
        click.play();
    }
    for i in 0..MAX_EFFECT_VOICES {
        fake.voice(i).borrow_mut().finished = true;
    }
    click.play();
    assert_eq!(click.active_voices(), 1);
    // Nothing had to be cut short.
    assert!((0..MAX_EFFECT_VOICES).all(|i| !fake.voice(i).borrow().stopped));
}

#[test]
fn effect_volume_applies_to_live_voices() {
    let (fake, output) = setup();
    let mut win = SoundEffect::new(clip("win"), output, 1.0);
    win.play();
    win.set_volume(0.5);
    let amplitude = fake.voice(0).borrow().amplitude;
    assert!((amplitude - volume_to_amplitude(0.5)).abs() < 1e-6);
    assert_eq!(win.volume(), 0.5);
}

#[test]
fn inert_clips_never_reach_the_output() {
    let (fake, output) = setup();
    let mut sfx = SoundEffect::new(SoundClip::inert("gone.wav"), output.clone(), 1.0);
    let mut music = MusicTrack::new(SoundClip::inert("gone.wav"), output, 1.0);
    sfx.play();
    music.play();
    assert_eq!(fake.started(), 0);
    assert!(!music.is_playing());
}

#[test]
fn music_loops_and_ignores_play_while_audible() {
    let (fake, output) = setup();
    let mut music = MusicTrack::new(clip("menu"), output, 0.3);
    music.play();
    music.play();
    assert_eq!(fake.started(), 1);
    assert!(fake.voice(0).borrow().looping);
    assert!(music.is_playing());
}

#[test]
fn music_pause_then_resume_continues_the_same_voice() {
    let (fake, output) = setup();
    let mut music = MusicTrack::new(clip("menu"), output, 0.3);
    music.play();
    music.pause();
    assert!(music.is_paused());
    assert!(!music.is_playing());
    assert!(fake.voice(0).borrow().paused);

    music.resume();
    assert!(music.is_playing());
    assert_eq!(fake.started(), 1);
    assert!(!fake.voice(0).borrow().paused);
}

#[test]
fn music_play_after_stop_starts_from_the_beginning() {
    let (fake, output) = setup();
    let mut music = MusicTrack::new(clip("playing"), output, 0.3);
    music.play();
    music.stop();
    assert!(fake.voice(0).borrow().stopped);
    music.play();
    assert_eq!(fake.started(), 2);
    assert_eq!(fake.live(), 1);
}

#[test]
fn music_play_after_pause_starts_a_fresh_voice() {
    let (fake, output) = setup();
    let mut music = MusicTrack::new(clip("menu"), output, 0.3);
    music.play();
    music.pause();
    music.play();
    assert_eq!(fake.started(), 2);
    assert!(fake.voice(0).borrow().stopped);
    assert!(!fake.voice(1).borrow().paused);
    assert_eq!(fake.live(), 1);
    assert!(music.is_playing());
}

#[test]
fn reset_while_playing_restarts_immediately() {
    let (fake, output) = setup();
    let mut music = MusicTrack::new(clip("playing"), output, 0.3);
    music.play();
    music.reset_to_beginning();
    assert_eq!(fake.started(), 2);
    assert!(music.is_playing());
    assert_eq!(fake.live(), 1);
}

#[test]
fn reset_while_stopped_stays_silent() {
    let (fake, output) = setup();
    let mut music = MusicTrack::new(clip("playing"), output, 0.3);
    music.reset_to_beginning();
    assert_eq!(fake.started(), 0);
    assert!(!music.is_playing());
}

#[test]
fn change_track_swaps_clips() {
    let (fake, output) = setup();
    let mut music = MusicTrack::new(clip("menu"), output, 0.3);
    music.play();
    music.change_track(clip("playing"));
    assert!(fake.voice(0).borrow().stopped);
    assert_eq!(fake.voice(1).borrow().clip, "playing");
    assert_eq!(music.clip().name(), "playing");
}

#[test]
fn zero_volume_is_near_silent_but_keeps_the_voice() {
    let (fake, output) = setup();
    let mut music = MusicTrack::new(clip("menu"), output, 0.7);
    music.play();
    music.set_volume(0.0);
    assert!(music.is_playing());
    assert!(fake.voice(0).borrow().amplitude < 1e-3);
}
