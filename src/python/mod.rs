//! Python bindings for the Pins engine.
//!
//! # Quick Start
//!
//! ```python
//! import pins
//!
//! board = pins.Board()                # [[3], [5], [7]]
//! expert = pins.Strategy("expert", seed=7)
//!
//! mv = expert.select_move(board)
//! board = board.apply(mv)
//! assert board.nim_sum() == 0
//! ```

use pyo3::prelude::*;

mod py_ai;
mod py_core;

pub use py_ai::*;
pub use py_core::*;

/// pins: engine, AI opponents and solver for the game of Pins.
#[pymodule]
fn pins(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_class::<PyMove>()?;
    m.add_class::<PyStrategy>()?;
    m.add_function(wrap_pyfunction!(is_winning, m)?)?;

    Ok(())
}
