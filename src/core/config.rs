//! Engine configuration.
//!
//! The only knob is the RNG seed. Gameplay runs unseeded (entropy);
//! tests, replays and the CLI `--seed` flag pin it.

use super::error::{EngineError, Result};
use super::rng::GameRng;

/// Environment variable read by [`EngineConfig::from_env`].
pub const SEED_ENV: &str = "RPS_SEED";

/// Engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed seed for the system's choices. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Create a configuration that seeds from entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_ENV) {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                EngineError::Config(format!("{}={:?}: {}", SEED_ENV, raw, e))
            })?),
        };
        Ok(Self { seed })
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn build_rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
