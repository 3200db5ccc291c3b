//! Round outcome from the human player's perspective.

use serde::{Deserialize, Serialize};

use super::choice::Choice;

/// Result of a round for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Decide the outcome of `player` against `system`.
    ///
    /// Total over all nine pairs of choices.
    #[must_use]
    pub const fn between(player: Choice, system: Choice) -> Outcome {
        if player as usize == system as usize {
            Outcome::Draw
        } else if player.beats(system) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// The same round seen from the other side.
    #[must_use]
    pub const fn reversed(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        };
        f.write_str(s)
    }
}
