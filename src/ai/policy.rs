//! Move selection policies.
//!
//! Every computer opponent implements `Strategy`: given a board and an RNG,
//! pick one of the legal moves. The three difficulties are:
//! - `Novice`: uniform random legal move
//! - `Intermediate`: expert with some probability, novice otherwise
//! - `Expert`: Nim-sum play with the misère endgame rule (see `expert`)

use crate::core::{Board, Difficulty, GameRng, Move, DEFAULT_EXPERT_PROBABILITY};
use crate::error::ConfigError;
use crate::rules::legal_moves;

use super::expert::Expert;

/// Policy for choosing the computer's move.
pub trait Strategy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Choose a move from `legal_moves(board)`.
    ///
    /// Returns `None` if the board is empty. All randomness is drawn from
    /// `rng`, so a fixed seed reproduces the choice.
    fn select_move(&self, board: &Board, rng: &mut GameRng) -> Option<Move>;
}

// =============================================================================
// Novice
// =============================================================================

/// Uniform random opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Novice;

impl Strategy for Novice {
    fn name(&self) -> &'static str {
        "novice"
    }

    fn select_move(&self, board: &Board, rng: &mut GameRng) -> Option<Move> {
        let moves = legal_moves(board);
        rng.choose(&moves).copied()
    }
}

// =============================================================================
// Intermediate
// =============================================================================

/// Fallible opponent: plays the expert move with probability
/// `expert_probability` and a random move otherwise.
#[derive(Clone, Copy, Debug)]
pub struct Intermediate {
    expert_probability: f64,
}

impl Intermediate {
    /// Create an intermediate opponent.
    pub fn new(expert_probability: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&expert_probability) {
            return Err(ConfigError::ExpertProbability(expert_probability));
        }
        Ok(Self { expert_probability })
    }

    /// Probability of delegating to the expert.
    #[must_use]
    pub fn expert_probability(&self) -> f64 {
        self.expert_probability
    }
}

impl Default for Intermediate {
    fn default() -> Self {
        Self {
            expert_probability: DEFAULT_EXPERT_PROBABILITY,
        }
    }
}

impl Strategy for Intermediate {
    fn name(&self) -> &'static str {
        "intermediate"
    }

    fn select_move(&self, board: &Board, rng: &mut GameRng) -> Option<Move> {
        if rng.gen_bool(self.expert_probability) {
            tracing::debug!("intermediate delegating to expert");
            Expert.select_move(board, rng)
        } else {
            Novice.select_move(board, rng)
        }
    }
}

/// Build the strategy for a difficulty level.
pub fn strategy_for(
    difficulty: Difficulty,
    expert_probability: f64,
) -> Result<Box<dyn Strategy>, ConfigError> {
    Ok(match difficulty {
        Difficulty::Novice => Box::new(Novice),
        Difficulty::Intermediate => Box::new(Intermediate::new(expert_probability)?),
        Difficulty::Expert => Box::new(Expert),
    })
}
