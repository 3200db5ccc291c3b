//! Engine error type.
//!
//! The decision logic itself cannot fail: `Choice` is a closed enumeration,
//! so every error here comes from a boundary where raw input (labels,
//! indices, snapshot bytes, environment settings) is turned into engine
//! types.

use derive_more::{Display, Error};

/// Errors raised at the engine boundary.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A label or index outside `Rock`, `Paper`, `Scissors`.
    #[display("invalid choice: {:?}", _0)]
    InvalidChoice(#[error(not(source))] String),

    /// RNG snapshot bytes could not be decoded.
    #[display("corrupt rng snapshot: {}", _0)]
    Snapshot(#[error(not(source))] String),

    /// A scripted choice source has no choices left.
    #[display("scripted choice source is exhausted")]
    ExhaustedScript,

    /// An environment setting could not be parsed.
    #[display("invalid configuration: {}", _0)]
    Config(#[error(not(source))] String),
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EngineError::InvalidChoice("lizard".to_string());
        assert_eq!(err.to_string(), "invalid choice: \"lizard\"");

        assert_eq!(
            EngineError::ExhaustedScript.to_string(),
            "scripted choice source is exhausted"
        );
        assert_eq!(
            EngineError::Config("RPS_SEED=abc".to_string()).to_string(),
            "invalid configuration: RPS_SEED=abc"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&EngineError::ExhaustedScript);
    }
}
