//! Core engine types: board, moves, players, RNG, configuration.
//!
//! Everything here is a plain value. Boards and moves are never mutated once
//! built; every transition produces a new value.

pub mod board;
pub mod config;
pub mod moves;
pub mod player;
pub mod rng;

pub use board::{Blocks, Board, Row};
pub use config::{Difficulty, GameConfig, DEFAULT_EXPERT_PROBABILITY, INITIAL_ROWS};
pub use moves::Move;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
