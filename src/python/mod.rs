//! Python bindings for the rps-engine decision logic.
//!
//! # Quick Start
//!
//! ```python
//! import rps_engine as rps
//!
//! engine = rps.GameEngine(seed=42)
//! system, outcome, message = engine.play("rock")
//!
//! rps.determine_outcome("paper", "rock")  # "win"
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// rps_engine: rock-paper-scissors decision engine.
#[pymodule]
fn rps_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameEngine>()?;
    m.add_function(wrap_pyfunction!(determine_outcome, m)?)?;
    Ok(())
}
