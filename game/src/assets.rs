use std::path::{Path, PathBuf};

use engine::audio::SoundClip;
use engine::image::{Image, load_png};

use crate::screens::menu::MenuImages;
use crate::screens::playing::PlayingImages;
use crate::screens::settings::SettingsImages;
use crate::sound::SoundClips;

/// Root directory all asset paths in `config::paths` are relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Loads a PNG, logging and returning `None` if it is missing or broken.
    pub fn image(&self, relative: &str) -> Option<Image> {
        let path = self.path(relative);
        match load_png(&path) {
            Ok(image) => Some(image),
            Err(err) => {
                log::warn!("image {} unavailable: {err}", path.display());
                None
            }
        }
    }

    pub fn sound(&self, relative: &str) -> SoundClip {
        SoundClip::load_or_inert(&self.path(relative))
    }
}

/// Everything loaded from disk at startup.
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub menu: MenuImages,
    pub playing: PlayingImages,
    pub settings: SettingsImages,
    pub sounds: SoundClips,
}

impl GameAssets {
    pub fn load(dir: &AssetDir) -> Self {
        log::info!("loading assets from {}", dir.root().display());
        Self {
            menu: MenuImages::load(dir),
            playing: PlayingImages::load(dir),
            settings: SettingsImages::load(dir),
            sounds: SoundClips::load(dir),
        }
    }

    /// No images and silent sounds; every screen draws its fallbacks.
    pub fn missing() -> Self {
        Self {
            menu: MenuImages::default(),
            playing: PlayingImages::default(),
            settings: SettingsImages::default(),
            sounds: SoundClips::silent(),
        }
    }
}
