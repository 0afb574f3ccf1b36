//! Position analysis: the Nim-sum invariant and an exact misère solver.

pub mod nim_sum;
pub mod solver;

pub use nim_sum::{heap_count, is_endgame, nim_sum};
pub use solver::MisereSolver;
