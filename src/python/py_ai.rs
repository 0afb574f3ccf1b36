//! Strategy bindings for Python.

use pyo3::prelude::*;

use crate::ai::{strategy_for, Strategy};
use crate::analysis::MisereSolver;
use crate::core::{Difficulty, GameRng, DEFAULT_EXPERT_PROBABILITY};

use super::py_core::{PyBoard, PyMove};

/// A computer opponent with its own seeded RNG.
#[pyclass(name = "Strategy")]
pub struct PyStrategy {
    strategy: Box<dyn Strategy>,
    rng: GameRng,
}

#[pymethods]
impl PyStrategy {
    /// Create a strategy.
    ///
    /// # Arguments
    /// - difficulty: "novice", "intermediate", "expert" or 1-3
    /// - seed: RNG seed for reproducible choices
    /// - expert_probability: expert share for the intermediate opponent
    #[new]
    #[pyo3(signature = (difficulty = "expert", seed = 42, expert_probability = DEFAULT_EXPERT_PROBABILITY))]
    fn new(difficulty: &str, seed: u64, expert_probability: f64) -> PyResult<Self> {
        let to_py = |e: crate::error::ConfigError| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
        };
        let difficulty: Difficulty = difficulty.parse().map_err(to_py)?;
        let strategy = strategy_for(difficulty, expert_probability).map_err(to_py)?;
        Ok(Self {
            strategy,
            rng: GameRng::new(seed),
        })
    }

    /// Choose a move, or None on an empty board.
    fn select_move(&mut self, board: &PyBoard) -> Option<PyMove> {
        self.strategy.select_move(&board.0, &mut self.rng).map(PyMove)
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn __repr__(&self) -> String {
        format!("Strategy({})", self.strategy.name())
    }
}

/// Check if the player to move wins the position with perfect play.
#[pyfunction]
pub fn is_winning(board: &PyBoard) -> bool {
    MisereSolver::new().is_winning(&board.0)
}
