//! Board and move bindings for Python.

use pyo3::prelude::*;

use crate::analysis::{is_endgame, nim_sum};
use crate::core::{Board, Move};
use crate::rules::{apply_move, legal_moves};

/// Python wrapper for Move.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Create a move: row, block, start offset, pin count (all 0-based except count).
    #[new]
    fn new(row: usize, block: usize, start: u32, count: u32) -> Self {
        Self(Move::new(row, block, start, count))
    }

    #[getter]
    fn row(&self) -> usize {
        self.0.row
    }

    #[getter]
    fn block(&self) -> usize {
        self.0.block
    }

    #[getter]
    fn start(&self) -> u32 {
        self.0.start
    }

    #[getter]
    fn count(&self) -> u32 {
        self.0.count
    }

    /// The move as a `(row, block, start, count)` tuple.
    fn as_tuple(&self) -> (usize, usize, u32, u32) {
        (self.0.row, self.0.block, self.0.start, self.0.count)
    }

    fn __repr__(&self) -> String {
        format!(
            "Move(row={}, block={}, start={}, count={})",
            self.0.row, self.0.block, self.0.start, self.0.count
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Python wrapper for Board.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create a board from block sizes per row, or the initial board if omitted.
    #[new]
    #[pyo3(signature = (rows = None))]
    fn new(rows: Option<Vec<Vec<u32>>>) -> PyResult<Self> {
        match rows {
            None => Ok(Self(Board::initial())),
            Some(rows) => Board::from_rows(rows)
                .map(Self)
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())),
        }
    }

    /// Block sizes per row.
    #[getter]
    fn rows(&self) -> Vec<Vec<u32>> {
        self.0.to_vecs()
    }

    /// All legal moves, in generation order.
    fn legal_moves(&self) -> Vec<PyMove> {
        legal_moves(&self.0).into_iter().map(PyMove).collect()
    }

    /// Apply a move, returning the successor board.
    fn apply(&self, mv: &PyMove) -> PyResult<PyBoard> {
        apply_move(&self.0, &mv.0)
            .map(PyBoard)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// XOR of all block sizes.
    fn nim_sum(&self) -> u32 {
        nim_sum(&self.0)
    }

    /// Check if only single pins remain.
    fn is_endgame(&self) -> bool {
        is_endgame(&self.0)
    }

    /// Check if no pins remain.
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[getter]
    fn total_pins(&self) -> u32 {
        self.0.total_pins()
    }

    fn __repr__(&self) -> String {
        format!("Board({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
