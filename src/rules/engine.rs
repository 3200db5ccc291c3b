//! The game engine: system choice generation plus outcome determination.
//!
//! The engine keeps no round history. Its only state is the choice source
//! (an RNG for normal play), so every `play_round` is independent of the
//! calls before it.
//!
//! ```
//! use rps_engine::core::{Choice, Outcome};
//! use rps_engine::rules::GameEngine;
//!
//! assert_eq!(GameEngine::determine_outcome(Choice::Rock, Choice::Scissors), Outcome::Win);
//!
//! let mut engine = GameEngine::seeded(42);
//! let result = engine.play(Choice::Paper);
//! assert_eq!(result.outcome, GameEngine::determine_outcome(Choice::Paper, result.system_choice()));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Choice, EngineConfig, GameRng, Outcome, Result, Round};

use super::source::{ChoiceSource, UniformChoice};

/// What a round hands back to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The two choices played.
    pub round: Round,
    /// Outcome for the player.
    pub outcome: Outcome,
}

impl RoundResult {
    /// Settle a round between two choices.
    #[must_use]
    pub const fn new(player: Choice, system: Choice) -> Self {
        let round = Round::new(player, system);
        Self {
            round,
            outcome: round.outcome(),
        }
    }

    /// The system's choice, for rendering its gesture.
    #[must_use]
    pub const fn system_choice(&self) -> Choice {
        self.round.system
    }

    /// The player's choice.
    #[must_use]
    pub const fn player_choice(&self) -> Choice {
        self.round.player
    }
}

/// Stateless rock-paper-scissors engine.
#[derive(Clone, Debug)]
pub struct GameEngine<S: ChoiceSource = UniformChoice> {
    source: S,
}

impl GameEngine<UniformChoice> {
    /// Create an engine with a uniform source built from `config`.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_source(UniformChoice::from_config(config))
    }

    /// Create an engine with a uniform source seeded by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(UniformChoice::new(GameRng::new(seed)))
    }

    /// Decide the round for the player.
    ///
    /// Pure: same inputs, same outcome, nothing touched.
    #[must_use]
    pub const fn determine_outcome(player: Choice, system: Choice) -> Outcome {
        Outcome::between(player, system)
    }

    /// Produce the system's choice. The uniform source cannot fail.
    pub fn draw_system_choice(&mut self) -> Choice {
        self.source.draw()
    }

    /// Play one round against a uniformly drawn system choice.
    pub fn play(&mut self, player: Choice) -> RoundResult {
        let system = self.draw_system_choice();
        settle(player, system)
    }
}

impl Default for GameEngine<UniformChoice> {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl<S: ChoiceSource> GameEngine<S> {
    /// Create an engine over an arbitrary choice source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// The choice source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Produce the system's choice.
    pub fn generate_system_choice(&mut self) -> Result<Choice> {
        self.source.next_choice()
    }

    /// Play one round against a freshly generated system choice.
    pub fn play_round(&mut self, player: Choice) -> Result<RoundResult> {
        let system = self.generate_system_choice()?;
        Ok(settle(player, system))
    }

    /// Play one round from a raw gesture label.
    ///
    /// The label is validated before any randomness is consumed.
    pub fn play_label(&mut self, label: &str) -> Result<RoundResult> {
        let player = label.parse::<Choice>()?;
        self.play_round(player)
    }
}

fn settle(player: Choice, system: Choice) -> RoundResult {
    let result = RoundResult::new(player, system);
    debug!(%player, %system, outcome = %result.outcome, "round played");
    result
}
