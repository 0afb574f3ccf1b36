//! # pins
//!
//! The game of Pins: a misère Nim variant played against a computer opponent.
//!
//! Three rows of 3, 5 and 7 pins. On your turn, take any number of adjacent
//! pins from a single block; taking from the middle splits the block in two.
//! Whoever takes the last pin loses.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: boards and moves are values. Generating moves,
//!    applying a move and computing the Nim-sum never mutate their input.
//!
//! 2. **Injected randomness**: every random choice draws from a caller-owned
//!    `GameRng`, so a seed replays a game exactly.
//!
//! 3. **One strategy trait**: novice, intermediate and expert opponents are
//!    interchangeable `Strategy` implementations.
//!
//! ## Modules
//!
//! - `core`: board, moves, players, RNG, configuration
//! - `rules`: move generation, move application, win detection
//! - `analysis`: Nim-sum, endgame detection, exact misère solver
//! - `ai`: computer opponents
//! - `session`: turn loop and computer-vs-computer matches
//! - `ui`: board rendering and interactive prompts

pub mod ai;
pub mod analysis;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod ui;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Difficulty, GameConfig, GameRng, GameRngState, Move, PlayerId, PlayerMap, Row,
    INITIAL_ROWS,
};

pub use crate::rules::{apply_move, legal_moves, outcome, GameResult};

pub use crate::analysis::{is_endgame, nim_sum, MisereSolver};

pub use crate::ai::{strategy_for, Expert, Intermediate, Novice, Strategy};

pub use crate::session::{run_match, Controller, MatchConfig, MatchReport, Session};

pub use crate::error::{BoardError, ConfigError, InputError, MoveError, SessionError, SimulationError};
