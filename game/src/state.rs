use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateEvent {
    /// Play button on the menu.
    Play,
    /// Settings button on the menu.
    OpenSettings,
    /// Escape on the settings screen.
    CloseSettings,
    /// Escape while paused, or the pause menu's Menu button.
    ReturnToMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateEffect {
    None,
    SwitchToPlayingMusic,
    SwitchToMenuMusic,
}

impl GameState {
    /// Pure transition function. Music changes are reported as effects for the caller to apply.
    pub fn handle(self, event: StateEvent) -> (GameState, StateEffect) {
        match (self, event) {
            (GameState::Menu, StateEvent::Play) => {
                (GameState::Playing, StateEffect::SwitchToPlayingMusic)
            }
            (GameState::Menu, StateEvent::OpenSettings) => (GameState::Settings, StateEffect::None),

            (GameState::Settings, StateEvent::CloseSettings) => {
                (GameState::Menu, StateEffect::None)
            }

            (GameState::Playing, StateEvent::ReturnToMenu) => {
                (GameState::Menu, StateEffect::SwitchToMenuMusic)
            }

            // Ignore events that make no sense in the current state.
            (state, _) => (state, StateEffect::None),
        }
    }

    pub fn is_playing(self) -> bool {
        self == GameState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_menu() {
        assert_eq!(GameState::default(), GameState::Menu);
    }

    #[test]
    fn play_from_menu_switches_music() {
        assert_eq!(
            GameState::Menu.handle(StateEvent::Play),
            (GameState::Playing, StateEffect::SwitchToPlayingMusic)
        );
    }

    #[test]
    fn settings_round_trip_leaves_music_alone() {
        let (state, effect) = GameState::Menu.handle(StateEvent::OpenSettings);
        assert_eq!((state, effect), (GameState::Settings, StateEffect::None));
        assert_eq!(
            state.handle(StateEvent::CloseSettings),
            (GameState::Menu, StateEffect::None)
        );
    }

    #[test]
    fn return_to_menu_from_playing_switches_music() {
        assert_eq!(
            GameState::Playing.handle(StateEvent::ReturnToMenu),
            (GameState::Menu, StateEffect::SwitchToMenuMusic)
        );
    }

    #[test]
    fn playing_ignores_menu_events() {
        assert_eq!(
            GameState::Playing.handle(StateEvent::OpenSettings),
            (GameState::Playing, StateEffect::None)
        );
        assert_eq!(
            GameState::Playing.handle(StateEvent::Play),
            (GameState::Playing, StateEffect::None)
        );
    }
}
