//! Decision logic.
//!
//! `GameEngine` pairs a `ChoiceSource` (where the system's gesture comes
//! from) with the fixed beats-relation. The presentation layer calls
//! `play_round` once per tap and never sees the source directly.

pub mod engine;
pub mod source;

pub use engine::{GameEngine, RoundResult};
pub use source::{ChoiceSource, ScriptedChoices, UniformChoice};
