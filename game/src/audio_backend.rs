use std::io::Cursor;

use engine::audio::{AudioOutput, Playback, SoundClip};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),
}

/// Default output device through `rodio`. Every voice gets its own `Sink`.
pub struct RodioOutput {
    // Dropping the stream silences every sink.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioOutput {
    pub fn try_default() -> Result<Self, BackendError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl AudioOutput for RodioOutput {
    fn start(&self, clip: &SoundClip, looping: bool, amplitude: f32) -> Option<Box<dyn Playback>> {
        let bytes = clip.bytes()?.clone();
        let decoder = match Decoder::new(Cursor::new(bytes)) {
            Ok(decoder) => decoder,
            Err(err) => {
                log::warn!("cannot decode {}: {err}", clip.name());
                return None;
            }
        };
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(err) => {
                log::warn!("cannot play {}: {err}", clip.name());
                return None;
            }
        };
        sink.set_volume(amplitude);
        if looping {
            sink.append(decoder.repeat_infinite());
        } else {
            sink.append(decoder);
        }
        Some(Box::new(RodioVoice { sink }))
    }
}

struct RodioVoice {
    sink: Sink,
}

impl Playback for RodioVoice {
    fn set_amplitude(&mut self, amplitude: f32) {
        self.sink.set_volume(amplitude);
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.stop();
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}
