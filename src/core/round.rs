//! A single pairing of a player choice with a system choice.

use serde::{Deserialize, Serialize};

use super::choice::Choice;
use super::outcome::Outcome;

/// One round: the player's choice against the system's choice.
///
/// A plain value with no identity. The engine builds one per play and
/// hands it back; nothing keeps it afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    pub player: Choice,
    pub system: Choice,
}

impl Round {
    #[must_use]
    pub const fn new(player: Choice, system: Choice) -> Self {
        Self { player, system }
    }

    /// Outcome for the player.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        Outcome::between(self.player, self.system)
    }

    /// The round with player and system exchanged.
    #[must_use]
    pub const fn swapped(&self) -> Round {
        Round::new(self.system, self.player)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.player, self.system)
    }
}
