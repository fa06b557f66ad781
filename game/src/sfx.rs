use serde::{Deserialize, Serialize};

/// Music volume before the settings presets are applied (0.0..=1.0).
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.3;
/// Effect volume before the settings presets are applied (0.0..=1.0).
pub const DEFAULT_SFX_VOLUME: f32 = 0.7;

pub const SFX_MUTE_VOLUME: f32 = 0.0;
pub const SFX_UNMUTE_VOLUME: f32 = 1.0;

pub const MUSIC_MUTE_VOLUME: f32 = 0.0;
pub const MUSIC_HALF_VOLUME: f32 = 0.15;
pub const MUSIC_FULL_VOLUME: f32 = 0.7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SfxPreset {
    Mute,
    #[default]
    Unmute,
}

impl SfxPreset {
    /// Button order on the settings screen.
    pub const ALL: [SfxPreset; 2] = [SfxPreset::Mute, SfxPreset::Unmute];

    pub fn volume(self) -> f32 {
        match self {
            SfxPreset::Mute => SFX_MUTE_VOLUME,
            SfxPreset::Unmute => SFX_UNMUTE_VOLUME,
        }
    }

    pub fn index(self) -> usize {
        match self {
            SfxPreset::Mute => 0,
            SfxPreset::Unmute => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            SfxPreset::Mute => "MUTE",
            SfxPreset::Unmute => "ON",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicPreset {
    Mute,
    Half,
    #[default]
    Full,
}

impl MusicPreset {
    /// Button order on the settings screen.
    pub const ALL: [MusicPreset; 3] = [MusicPreset::Mute, MusicPreset::Half, MusicPreset::Full];

    pub fn volume(self) -> f32 {
        match self {
            MusicPreset::Mute => MUSIC_MUTE_VOLUME,
            MusicPreset::Half => MUSIC_HALF_VOLUME,
            MusicPreset::Full => MUSIC_FULL_VOLUME,
        }
    }

    pub fn index(self) -> usize {
        match self {
            MusicPreset::Mute => 0,
            MusicPreset::Half => 1,
            MusicPreset::Full => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MusicPreset::Mute => "MUTE",
            MusicPreset::Half => "HALF",
            MusicPreset::Full => "FULL",
        }
    }
}
