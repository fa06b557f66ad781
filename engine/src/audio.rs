//! Volume mapping and playback bookkeeping, independent of any audio device.
//!
//! The device side lives behind `AudioOutput`/`Playback`; everything here only decides what to
//! start, stop and at which amplitude.

use std::collections::VecDeque;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use thiserror::Error;

pub const MIN_GAIN_DB: f32 = -80.0;
pub const MAX_GAIN_DB: f32 = 6.0;

/// Live voices kept per sound effect; the oldest is cut when another one starts.
pub const MAX_EFFECT_VOICES: usize = 8;

/// Clamps a linear volume to `0.0..=1.0`. NaN counts as silence.
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

/// `20 * log10(volume)`, clamped to `MIN_GAIN_DB..=MAX_GAIN_DB`.
pub fn volume_to_db(volume: f32) -> f32 {
    let volume = clamp_volume(volume);
    if volume <= 0.0 {
        return MIN_GAIN_DB;
    }
    (20.0 * volume.log10()).clamp(MIN_GAIN_DB, MAX_GAIN_DB)
}

pub fn db_to_amplitude(db: f32) -> f32 {
    10f32.powf(db.clamp(MIN_GAIN_DB, MAX_GAIN_DB) / 20.0)
}

/// Linear amplitude handed to the mixer for a linear volume setting.
pub fn volume_to_amplitude(volume: f32) -> f32 {
    db_to_amplitude(volume_to_db(volume))
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is empty", .0.display())]
    Empty(PathBuf),
}

/// Encoded sound data, loaded once and shared by every voice that plays it.
///
/// An inert clip (failed load) is still a valid value: everything that plays it does nothing.
#[derive(Clone)]
pub struct SoundClip {
    name: Arc<str>,
    bytes: Option<Arc<[u8]>>,
}

impl SoundClip {
    pub fn load(path: &Path) -> Result<Self, AudioError> {
        let bytes = fs::read(path).map_err(|source| AudioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(AudioError::Empty(path.to_path_buf()));
        }
        Ok(Self::from_bytes(path.display().to_string(), bytes))
    }

    /// Loads `path`, logging and returning an inert clip on failure.
    pub fn load_or_inert(path: &Path) -> Self {
        match Self::load(path) {
            Ok(clip) => clip,
            Err(err) => {
                log::warn!("sound unavailable: {err}");
                Self::inert(path.display().to_string())
            }
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into().into(),
            bytes: Some(bytes.into()),
        }
    }

    pub fn inert(name: impl Into<String>) -> Self {
        Self {
            name: name.into().into(),
            bytes: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> Option<&Arc<[u8]>> {
        self.bytes.as_ref()
    }

    pub fn is_inert(&self) -> bool {
        self.bytes.is_none()
    }
}

impl fmt::Debug for SoundClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundClip")
            .field("name", &self.name)
            .field("len", &self.bytes.as_ref().map(|b| b.len()))
            .finish()
    }
}

/// A device (or a fake) that can start playing clips.
pub trait AudioOutput {
    /// Starts `clip` from its beginning. `None` means nothing is playing (undecodable clip,
    /// device error); callers treat that as silence.
    fn start(&self, clip: &SoundClip, looping: bool, amplitude: f32) -> Option<Box<dyn Playback>>;
}

/// Handle to one playing voice.
pub trait Playback {
    fn set_amplitude(&mut self, amplitude: f32);
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
    fn is_finished(&self) -> bool;
}

/// Output used when no audio device is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOutput;

impl AudioOutput for NullOutput {
    fn start(
        &self,
        _clip: &SoundClip,
        _looping: bool,
        _amplitude: f32,
    ) -> Option<Box<dyn Playback>> {
        None
    }
}

/// Fire-and-forget effect. Each `play` starts an independent voice, so rapid repeats overlap
/// instead of restarting.
pub struct SoundEffect {
    clip: SoundClip,
    output: Rc<dyn AudioOutput>,
    volume: f32,
    voices: VecDeque<Box<dyn Playback>>,
}

impl SoundEffect {
    pub fn new(clip: SoundClip, output: Rc<dyn AudioOutput>, volume: f32) -> Self {
        Self {
            clip,
            output,
            volume: clamp_volume(volume),
            voices: VecDeque::new(),
        }
    }

    pub fn clip(&self) -> &SoundClip {
        &self.clip
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn play(&mut self) {
        if self.clip.is_inert() {
            return;
        }
        self.voices.retain(|v| !v.is_finished());
        while self.voices.len() >= MAX_EFFECT_VOICES {
            if let Some(mut oldest) = self.voices.pop_front() {
                oldest.stop();
            }
        }
        if let Some(voice) = self
            .output
            .start(&self.clip, false, volume_to_amplitude(self.volume))
        {
            self.voices.push_back(voice);
        }
    }

    pub fn stop(&mut self) {
        for mut voice in self.voices.drain(..) {
            voice.stop();
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        let amplitude = volume_to_amplitude(self.volume);
        for voice in &mut self.voices {
            voice.set_amplitude(amplitude);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.voices.iter().any(|v| !v.is_finished())
    }

    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| !v.is_finished()).count()
    }
}

/// Looping background track with a single voice.
///
/// `play` always starts from the beginning when the track is not currently audible; `resume`
/// continues a paused voice.
pub struct MusicTrack {
    clip: SoundClip,
    output: Rc<dyn AudioOutput>,
    volume: f32,
    voice: Option<Box<dyn Playback>>,
    paused: bool,
}

impl MusicTrack {
    pub fn new(clip: SoundClip, output: Rc<dyn AudioOutput>, volume: f32) -> Self {
        Self {
            clip,
            output,
            volume: clamp_volume(volume),
            voice: None,
            paused: false,
        }
    }

    pub fn clip(&self) -> &SoundClip {
        &self.clip
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        !self.paused && self.voice.as_ref().is_some_and(|v| !v.is_finished())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn play(&mut self) {
        if self.is_playing() {
            return;
        }
        self.restart();
    }

    /// Halts playback and rewinds.
    pub fn stop(&mut self) {
        if let Some(mut voice) = self.voice.take() {
            voice.stop();
        }
        self.paused = false;
    }

    pub fn pause(&mut self) {
        if let Some(voice) = self.voice.as_mut() {
            voice.pause();
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        match self.voice.as_mut() {
            Some(voice) if self.paused => {
                voice.resume();
                self.paused = false;
            }
            Some(_) => {}
            None => self.restart(),
        }
    }

    /// Rewinds to the start. An audible track keeps playing from 0; a paused or stopped one
    /// starts from 0 next time.
    pub fn reset_to_beginning(&mut self) {
        let audible = self.is_playing();
        let paused = self.paused;
        if let Some(mut voice) = self.voice.take() {
            voice.stop();
        }
        if audible {
            self.restart();
        }
        self.paused = paused && !audible;
    }

    pub fn change_track(&mut self, clip: SoundClip) {
        self.stop();
        self.clip = clip;
        self.play();
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        if let Some(voice) = self.voice.as_mut() {
            voice.set_amplitude(volume_to_amplitude(self.volume));
        }
    }

    fn restart(&mut self) {
        if let Some(mut old) = self.voice.take() {
            old.stop();
        }
        self.paused = false;
        if self.clip.is_inert() {
            return;
        }
        self.voice = self
            .output
            .start(&self.clip, true, volume_to_amplitude(self.volume));
    }
}
