//! The three selectable gestures and the beats-relation between them.
//!
//! ## Beats-relation
//!
//! The relation is a fixed cycle: Rock > Scissors > Paper > Rock.
//! Every choice beats exactly one other choice and is beaten by exactly one.
//!
//! ```
//! use rps_engine::core::Choice;
//!
//! assert!(Choice::Rock.beats(Choice::Scissors));
//! assert_eq!(Choice::Paper.beaten_by(), Choice::Scissors);
//!
//! let parsed: Choice = "Scissors".parse().unwrap();
//! assert_eq!(parsed, Choice::Scissors);
//! assert!("lizard".parse::<Choice>().is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use super::error::{EngineError, Result};

/// A hand gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices in canonical order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Number of choices.
    pub const COUNT: usize = Self::ALL.len();

    /// Check if this choice beats the other.
    #[must_use]
    pub const fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }

    /// The one choice this choice defeats.
    #[must_use]
    pub const fn beats_what(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// The one choice that defeats this choice.
    #[must_use]
    pub const fn beaten_by(self) -> Choice {
        match self {
            Choice::Rock => Choice::Paper,
            Choice::Paper => Choice::Scissors,
            Choice::Scissors => Choice::Rock,
        }
    }

    /// Position in `Choice::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a choice by its position in `Choice::ALL`.
    pub fn from_index(index: usize) -> Result<Choice> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| EngineError::InvalidChoice(format!("index {}", index)))
    }

    /// Lowercase label, also used as the serde representation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Choice {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Choice::Rock),
            "paper" | "p" => Ok(Choice::Paper),
            "scissors" | "s" => Ok(Choice::Scissors),
            _ => Err(EngineError::InvalidChoice(s.to_string())),
        }
    }
}
