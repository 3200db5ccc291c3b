//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Choice, EngineConfig, EngineError};
use crate::presentation::outcome_message;
use crate::rules::GameEngine;

fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_choice(label: &str) -> PyResult<Choice> {
    label.parse::<Choice>().map_err(to_py_err)
}

/// Python wrapper for GameEngine.
#[pyclass(name = "GameEngine")]
#[derive(Clone, Debug)]
pub struct PyGameEngine(pub GameEngine);

#[pymethods]
impl PyGameEngine {
    /// Create an engine. Without a seed, choices come from entropy.
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let config = EngineConfig { seed };
        Self(GameEngine::new(&config))
    }

    /// Produce a system choice.
    fn generate_system_choice(&mut self) -> String {
        self.0.draw_system_choice().to_string()
    }

    /// Play one round. Returns `(system_choice, outcome, message)`.
    fn play(&mut self, choice: &str) -> PyResult<(String, String, String)> {
        let result = self.0.play(parse_choice(choice)?);
        Ok((
            result.system_choice().to_string(),
            result.outcome.to_string(),
            outcome_message(result.outcome).to_string(),
        ))
    }

    fn __repr__(&self) -> String {
        format!("GameEngine(seed={})", self.0.source().rng().seed())
    }
}

/// Decide the outcome of `player` against `system`.
#[pyfunction]
pub fn determine_outcome(player: &str, system: &str) -> PyResult<String> {
    let outcome = GameEngine::determine_outcome(parse_choice(player)?, parse_choice(system)?);
    Ok(outcome.to_string())
}
