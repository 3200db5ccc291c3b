//! Where the system's choice comes from.
//!
//! Sources are trait-based so the engine can be driven by:
//! - `UniformChoice`: each choice with probability 1/3 (gameplay)
//! - `ScriptedChoices`: a fixed sequence (replays, tests)

use std::collections::VecDeque;

use crate::core::{Choice, EngineError, EngineConfig, GameRng, Result};

/// Produces the system's choice for a round.
pub trait ChoiceSource: Send {
    /// Produce the next system choice.
    fn next_choice(&mut self) -> Result<Choice>;
}

// =============================================================================
// Uniform
// =============================================================================

/// Uniformly random choice.
///
/// Draws an integer in `0..3` and maps it through `Choice::ALL`.
#[derive(Clone, Debug)]
pub struct UniformChoice {
    rng: GameRng,
}

impl UniformChoice {
    /// Create a uniform source over the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a uniform source from configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.build_rng())
    }

    /// Access the underlying RNG (for checkpointing).
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Draw a choice. Never fails.
    pub fn draw(&mut self) -> Choice {
        Choice::ALL[self.rng.gen_range_usize(0..Choice::COUNT)]
    }
}

impl ChoiceSource for UniformChoice {
    fn next_choice(&mut self) -> Result<Choice> {
        Ok(self.draw())
    }
}

// =============================================================================
// Scripted
// =============================================================================

/// Replays a fixed sequence of choices, front to back.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoices {
    queue: VecDeque<Choice>,
}

impl ScriptedChoices {
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            queue: choices.into_iter().collect(),
        }
    }

    /// Choices not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ChoiceSource for ScriptedChoices {
    fn next_choice(&mut self) -> Result<Choice> {
        self.queue.pop_front().ok_or(EngineError::ExhaustedScript)
    }
}
