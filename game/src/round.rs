use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::playing::{RESULT_DISPLAY_DURATION, TOTAL_HEARTS};
use crate::hand::{Hand, HandPicker, Outcome, resolve};

/// Remaining lives for one side, always within `0..=TOTAL_HEARTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lives(u8);

impl Lives {
    pub const fn full() -> Self {
        Self(TOTAL_HEARTS)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_out(self) -> bool {
        self.0 == 0
    }

    pub fn lose_one(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

impl Default for Lives {
    fn default() -> Self {
        Self::full()
    }
}

/// Which side ran out of lives first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayingRound {
    pub player: Hand,
    pub computer: Hand,
    pub outcome: Outcome,
    #[serde(skip)]
    pub shown_at: Instant,
}

/// What an accepted choice did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub round: PlayingRound,
    /// Set only for the round that ended the game.
    pub game_over: Option<Winner>,
}

/// Lives, the current round and game-over status of one match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Match {
    player_lives: Lives,
    computer_lives: Lives,
    round: Option<PlayingRound>,
    winner: Option<Winner>,
}

impl Match {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_lives(&self) -> u8 {
        self.player_lives.get()
    }

    pub fn computer_lives(&self) -> u8 {
        self.computer_lives.get()
    }

    pub fn round(&self) -> Option<&PlayingRound> {
        self.round.as_ref()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn has_choice(&self) -> bool {
        self.round.is_some()
    }

    /// Plays one round. Returns `None` when a choice is already recorded or the game is over.
    pub fn choose_hand(
        &mut self,
        player: Hand,
        picker: &mut dyn HandPicker,
        now: Instant,
    ) -> Option<RoundReport> {
        if self.round.is_some() || self.winner.is_some() {
            return None;
        }

        let computer = picker.pick();
        let outcome = resolve(player, computer);
        match outcome {
            Outcome::Win => self.computer_lives.lose_one(),
            Outcome::Lose => self.player_lives.lose_one(),
            Outcome::Tie => {}
        }

        let game_over = if self.computer_lives.is_out() {
            Some(Winner::Player)
        } else if self.player_lives.is_out() {
            Some(Winner::Computer)
        } else {
            None
        };
        self.winner = game_over;

        let round = PlayingRound {
            player,
            computer,
            outcome,
            shown_at: now,
        };
        self.round = Some(round);
        Some(RoundReport { round, game_over })
    }

    /// True when no choice is pending, or the current result has been on screen long enough.
    pub fn can_advance(&self, now: Instant) -> bool {
        match &self.round {
            None => true,
            Some(round) => now.saturating_duration_since(round.shown_at) >= RESULT_DISPLAY_DURATION,
        }
    }

    /// Clears the current round. After a game over this also starts a new game.
    pub fn reset_round(&mut self) {
        if self.winner.is_some() {
            self.restart();
        } else {
            self.round = None;
        }
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Hands to draw for (player, computer). Both show Rock until a choice is made.
    pub fn displayed_hands(&self) -> (Hand, Hand) {
        match &self.round {
            Some(round) => (round.player, round.computer),
            None => (Hand::Rock, Hand::Rock),
        }
    }

    pub fn result_text(&self) -> Option<&'static str> {
        let round = self.round.as_ref()?;
        Some(match (self.winner, round.outcome) {
            (Some(Winner::Player), _) => "Game Over - You Win!",
            (Some(Winner::Computer), _) => "Game Over - Computer Wins!",
            (None, Outcome::Tie) => "It's a Tie!",
            (None, Outcome::Win) => "You Win This Round!",
            (None, Outcome::Lose) => "Computer Wins This Round!",
        })
    }
}
