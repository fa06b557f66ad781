use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// The hand this one defeats.
    pub fn beats(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Scissors => Hand::Paper,
            Hand::Paper => Hand::Rock,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Hand::Rock => 0,
            Hand::Paper => 1,
            Hand::Scissors => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Hand> {
        Self::ALL.get(index).copied()
    }

    /// Filipino name, as printed in the controls legend.
    pub fn label(self) -> &'static str {
        match self {
            Hand::Rock => "Bato",
            Hand::Paper => "Papel",
            Hand::Scissors => "Gunting",
        }
    }
}

/// Round result from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// The same round seen from the other side.
    pub fn reversed(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

pub fn resolve(player: Hand, computer: Hand) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Source of the computer's hand.
pub trait HandPicker {
    fn pick(&mut self) -> Hand;
}

/// Uniform pick over all three hands.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: SmallRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl HandPicker for RandomPicker {
    fn pick(&mut self) -> Hand {
        Hand::ALL[self.rng.gen_range(0..Hand::ALL.len())]
    }
}

/// Replays a fixed sequence of hands, wrapping around at the end. An empty script always
/// answers Rock.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    hands: Vec<Hand>,
    next: usize,
}

impl ScriptedPicker {
    pub fn new(hands: impl Into<Vec<Hand>>) -> Self {
        Self {
            hands: hands.into(),
            next: 0,
        }
    }

    pub fn always(hand: Hand) -> Self {
        Self::new(vec![hand])
    }
}

impl HandPicker for ScriptedPicker {
    fn pick(&mut self) -> Hand {
        let Some(&hand) = self.hands.get(self.next % self.hands.len().max(1)) else {
            return Hand::Rock;
        };
        self.next = self.next.wrapping_add(1);
        hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_dominance() {
        assert_eq!(resolve(Hand::Rock, Hand::Scissors), Outcome::Win);
        assert_eq!(resolve(Hand::Scissors, Hand::Paper), Outcome::Win);
        assert_eq!(resolve(Hand::Paper, Hand::Rock), Outcome::Win);
        assert_eq!(resolve(Hand::Scissors, Hand::Rock), Outcome::Lose);
    }

    #[test]
    fn index_round_trips() {
        for hand in Hand::ALL {
            assert_eq!(Hand::from_index(hand.index()), Some(hand));
        }
        assert_eq!(Hand::from_index(3), None);
    }

    #[test]
    fn scripted_picker_cycles() {
        let mut picker = ScriptedPicker::new(vec![Hand::Paper, Hand::Scissors]);
        assert_eq!(picker.pick(), Hand::Paper);
        assert_eq!(picker.pick(), Hand::Scissors);
        assert_eq!(picker.pick(), Hand::Paper);
    }

    #[test]
    fn empty_script_answers_rock() {
        let mut picker = ScriptedPicker::default();
        assert_eq!(picker.pick(), Hand::Rock);
    }

    #[test]
    fn random_picker_covers_every_hand() {
        let mut picker = RandomPicker::seeded(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[picker.pick().index()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}
