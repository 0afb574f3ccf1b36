//! Game rules: which moves are legal, what they do, and who has won.
//!
//! - `legal_moves` enumerates every contiguous run that can be removed
//! - `apply_move` produces the successor board
//! - `outcome` detects the end of the game under misère play: whoever takes
//!   the last pin loses

pub mod engine;

pub use engine::{apply_move, legal_moves, move_count, outcome, validate_move, GameResult};
pub(crate) use engine::successor;
