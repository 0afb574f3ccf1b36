//! Session loop: turn alternation, computer moves and win detection.
//!
//! The session does not read input or print anything. Callers drive it:
//! - `play` for a move chosen outside (a human)
//! - `play_cpu` to let the seat's strategy move
//! - `play_out` to finish a computer-only game
//!
//! `simulate` runs whole matches between two computer difficulties.

pub mod game;
pub mod simulate;

pub use game::{Controller, Session, TurnRecord};
pub use simulate::{run_match, MatchConfig, MatchReport};
