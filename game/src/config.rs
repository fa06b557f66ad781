use std::path::PathBuf;

use engine::app::AppConfig;
use engine::game_loop::LoopRates;
use engine::surface::SurfaceSize;
use serde::{Deserialize, Serialize};
use winit::dpi::PhysicalSize;

pub const WINDOW_TITLE: &str = "Bato Bato Pik";
pub const WINDOW_WIDTH: u32 = 1530;
pub const WINDOW_HEIGHT: u32 = 890;
pub const UPDATES_PER_SECOND: u32 = 120;
pub const FRAMES_PER_SECOND: u32 = 60;

/// Overrides the directory images and sounds are loaded from.
pub const ASSET_DIR_ENV: &str = "BATO_ASSET_DIR";
pub const DEFAULT_ASSET_DIR: &str = "res";

pub mod menu {
    pub const BUTTON_WIDTH: u32 = 300;
    pub const BUTTON_HEIGHT: u32 = 160;
    pub const BUTTON_SPACING: u32 = 5;
    pub const BUTTON_Y: u32 = 250;

    pub const TITLE_WIDTH: u32 = 700;
    pub const TITLE_HEIGHT: u32 = 350;

    /// The background is drawn this much larger than the window on both axes.
    pub const BACKGROUND_PADDING: u32 = 100;

    pub const TEXT_X: u32 = 20;
    /// (baseline y, text) pairs for the info block.
    pub const INFO_LINES: [(u32, &str); 6] = [
        (400, "Bato Bato Pik Game v1.0"),
        (425, "By VI-BYTES"),
        (480, "Controls:"),
        (500, "Q - Bato"),
        (517, "W - Papel"),
        (535, "E - Gunting"),
    ];
}

pub mod playing {
    use std::time::Duration;

    pub const BUTTON_WIDTH: u32 = 120;
    pub const BUTTON_HEIGHT: u32 = 120;
    pub const BUTTON_SPACING: u32 = 20;
    pub const BUTTON_Y_FROM_BOTTOM: u32 = 100;

    pub const HAND_WIDTH: u32 = 500;
    pub const HAND_HEIGHT: u32 = 500;
    pub const HAND_X: u32 = 5;
    pub const HAND_Y: u32 = 300;

    pub const TOTAL_HEARTS: u8 = 3;
    pub const HEART_SIZE: u32 = 40;
    pub const HEART_SPACING: u32 = 10;
    pub const HEART_Y: u32 = 20;

    pub const RESULT_DISPLAY_DURATION: Duration = Duration::from_millis(500);
    pub const RESULT_TEXT_Y: u32 = 200;
    pub const CONTINUE_TEXT_Y: u32 = 250;

    pub const PAUSE_BUTTON_X: u32 = 10;
    pub const PAUSE_BUTTON_Y: u32 = 10;
    pub const PAUSE_BUTTON_SIZE: u32 = 40;

    pub const PAUSE_MENU_BUTTON_WIDTH: u32 = 120;
    pub const PAUSE_MENU_BUTTON_HEIGHT: u32 = 120;
    pub const PAUSE_MENU_SPACING: u32 = 20;
    pub const PAUSE_OVERLAY_OPACITY: f32 = 0.7;
    pub const PAUSE_FALLBACK_ALPHA: u8 = 180;

    pub const TEXT_X: u32 = 20;
    pub const CONTROL_LINES: [(u32, &str); 4] = [
        (380, "Controls:"),
        (400, "Q - Bato"),
        (417, "W - Papel"),
        (435, "E - Gunting"),
    ];

    pub const CONTINUE_TEXT: &str = "Press Enter / Click anywhere to continue";
    pub const CONTINUE_TEXT_GAME_OVER: &str =
        "Press ESC to return to pause or Press Enter / Click anywhere to continue";
}

pub mod settings {
    pub const BUTTON_WIDTH: u32 = 80;
    pub const BUTTON_HEIGHT: u32 = 80;
    pub const BUTTON_SPACING: u32 = 10;

    pub const SFX_Y: u32 = 250;
    pub const MUSIC_Y: u32 = 430;

    pub const TEXT_X: u32 = 20;
    pub const BACK_HINT: (u32, &str) = (40, "Press ESC to go back.");
    pub const CREDIT_LINES: [(u32, &str); 8] = [
        (480, "Credits::"),
        (500, "VI - BYTES"),
        (517, "Caluza, Nash Francis M"),
        (535, "Mapanao, Jan Emmerson R."),
        (553, "Sanez, Gian Cristopher M."),
        (572, "Ferrer, Alex A."),
        (590, "Ureta, Donato Jr. G"),
        (605, "Escanilla, Mark Fermin A."),
    ];
}

/// Asset file names, relative to the asset directory.
pub mod paths {
    pub const MENU_BACKGROUND: &str = "images/menu/mainBack.png";
    pub const MENU_TITLE: &str = "images/menu/mainTitle.png";
    pub const PLAY_BUTTON: &str = "images/menu/playButton.png";
    pub const SETTINGS_BUTTON: &str = "images/menu/settingsButton.png";
    pub const QUIT_BUTTON: &str = "images/menu/quitButton.png";
    pub const PLAY_CLICKED: &str = "images/menu/playClicked.png";
    pub const SETTINGS_CLICKED: &str = "images/menu/settingsClicked.png";
    pub const QUIT_CLICKED: &str = "images/menu/quitClicked.png";

    pub const PLAYING_BG: &str = "images/playing/playingBG.png";
    pub const HEART: &str = "images/playing/heart.png";
    pub const EMPTY_HEART: &str = "images/playing/emptyHeart.png";
    pub const ROCK_BUTTON: &str = "images/playing/rock.png";
    pub const PAPER_BUTTON: &str = "images/playing/paper.png";
    pub const SCISSORS_BUTTON: &str = "images/playing/scissors.png";
    pub const ROCK_CLICKED: &str = "images/playing/rockClicked.png";
    pub const PAPER_CLICKED: &str = "images/playing/paperClicked.png";
    pub const SCISSORS_CLICKED: &str = "images/playing/scissorsClicked.png";
    pub const ROCK_HAND: &str = "images/playing/rockHand.png";
    pub const PAPER_HAND: &str = "images/playing/paperHand.png";
    pub const SCISSORS_HAND: &str = "images/playing/scissorsHand.png";
    pub const ROCK_COMP: &str = "images/playing/rockComp.png";
    pub const PAPER_COMP: &str = "images/playing/paperComp.png";
    pub const SCISSORS_COMP: &str = "images/playing/scissorsComp.png";
    pub const PAUSE_BUTTON: &str = "images/playing/pauseButton.png";
    pub const PAUSE_BUTTON_HOVER: &str = "images/playing/pauseButtonHover.png";
    pub const PAUSE_OVERLAY: &str = "images/playing/pauseOverlay.png";
    pub const RESUME_BUTTON: &str = "images/playing/resumeButton.png";
    pub const RESUME_BUTTON_HOVER: &str = "images/playing/resumeButtonHover.png";
    pub const RETRY_BUTTON: &str = "images/playing/retryButton.png";
    pub const RETRY_BUTTON_HOVER: &str = "images/playing/retryButtonHover.png";
    pub const MENU_BUTTON: &str = "images/playing/menuButton.png";
    pub const MENU_BUTTON_HOVER: &str = "images/playing/menuButtonHover.png";

    pub const SETTINGS_BACKGROUND: &str = "images/settings/settingsBackground.png";
    pub const SFX_MUTE: &str = "images/settings/sfxMute.png";
    pub const SFX_UNMUTE: &str = "images/settings/sfxUnmute.png";
    pub const SFX_MUTE_HOVER: &str = "images/settings/sfxMuteHovered.png";
    pub const SFX_UNMUTE_HOVER: &str = "images/settings/sfxUnmuteHovered.png";
    pub const MUSIC_MUTE: &str = "images/settings/musicMute.png";
    pub const MUSIC_HALF: &str = "images/settings/musicHalf.png";
    pub const MUSIC_FULL: &str = "images/settings/musicFull.png";
    pub const MUSIC_MUTE_HOVER: &str = "images/settings/musicMuteHovered.png";
    pub const MUSIC_HALF_HOVER: &str = "images/settings/musicHalfHovered.png";
    pub const MUSIC_FULL_HOVER: &str = "images/settings/musicFullHovered.png";

    pub const CLICK_SOUND: &str = "sounds/click.wav";
    pub const MENU_MUSIC: &str = "sounds/menu_background.wav";
    pub const PLAYING_MUSIC: &str = "sounds/playing_background.wav";
    pub const WIN_SOUND: &str = "sounds/winSound.wav";
    pub const LOSE_SOUND: &str = "sounds/loseSound.wav";
}

/// Runtime knobs for the windowed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub resizable: bool,
    pub rates: LoopRates,
    pub asset_root: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            resizable: true,
            rates: LoopRates::new(UPDATES_PER_SECOND, FRAMES_PER_SECOND),
            asset_root: PathBuf::from(DEFAULT_ASSET_DIR),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::default().with_asset_override(std::env::var_os(ASSET_DIR_ENV).map(PathBuf::from))
    }

    pub fn with_asset_override(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
            self.asset_root = dir;
        }
        self
    }

    pub fn window_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.window_width, self.window_height)
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            title: self.title.clone(),
            desired_size: PhysicalSize::new(self.window_width, self.window_height),
            clamp_to_monitor: true,
            resizable: self.resizable,
            rates: self.rates,
        }
    }
}
