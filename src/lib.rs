//! # rps-engine
//!
//! A stateless rock-paper-scissors decision engine.
//!
//! ## Design Principles
//!
//! 1. **Closed Enumerations**: `Choice` and `Outcome` are sum types. Raw
//!    labels are parsed once at the boundary and rejected with
//!    `EngineError::InvalidChoice`; nothing downstream sees a string.
//!
//! 2. **Stateless Rounds**: `GameEngine` keeps no history or score. Each
//!    `play_round` call is independent and can be replayed from a seed.
//!
//! 3. **Engine / View Split**: the engine holds no view references. The
//!    `presentation` module maps controls, images and messages on top.
//!
//! ## Modules
//!
//! - `core`: Choices, outcomes, rounds, RNG, configuration, errors
//! - `rules`: `GameEngine` and pluggable `ChoiceSource`s
//! - `presentation`: Control/image/message mapping for a UI front end

pub mod core;
pub mod rules;
pub mod presentation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Choice, Outcome, Round,
    GameRng, GameRngState,
    EngineConfig, EngineError, Result,
};

pub use crate::rules::{GameEngine, RoundResult, ChoiceSource, UniformChoice, ScriptedChoices};

pub use crate::presentation::{outcome_message, Control, GestureImage, Presenter, RoundView};
