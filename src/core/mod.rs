//! Core engine types: choices, outcomes, rounds, RNG, configuration, errors.
//!
//! Everything here is a plain value. Nothing in this module keeps state
//! between rounds.

pub mod choice;
pub mod outcome;
pub mod round;
pub mod rng;
pub mod config;
pub mod error;

pub use choice::Choice;
pub use outcome::Outcome;
pub use round::Round;
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, SEED_ENV};
pub use error::{EngineError, Result};
