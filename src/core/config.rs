//! Game configuration.
//!
//! The board shape is fixed; what a game can configure is the opponent's
//! difficulty, how often the intermediate opponent plays expert moves, the
//! RNG seed and who moves first.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PLAYER_COUNT};
use crate::error::ConfigError;

/// Pins per row at the start of every game.
pub const INITIAL_ROWS: [u32; 3] = [3, 5, 7];

/// Chance that the intermediate opponent plays an expert move.
pub const DEFAULT_EXPERT_PROBABILITY: f64 = 0.6;

/// Computer opponent strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Novice,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Novice, Difficulty::Intermediate, Difficulty::Expert];

    /// Menu number shown to the player (1-3).
    #[must_use]
    pub fn menu_number(self) -> u8 {
        match self {
            Difficulty::Novice => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Expert => 3,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Novice => "novice",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Expert => "expert",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ConfigError;

    /// Accepts either the name or the menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "novice" => Ok(Difficulty::Novice),
            "2" | "intermediate" => Ok(Difficulty::Intermediate),
            "3" | "expert" => Ok(Difficulty::Expert),
            other => Err(ConfigError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Strength of the computer opponent.
    pub difficulty: Difficulty,

    /// Probability that the intermediate opponent delegates to the expert.
    pub expert_probability: f64,

    /// Random seed. Same seed produces the same game given the same human input.
    pub seed: u64,

    /// Seat that moves first. `None` picks one at random from the seed.
    pub first_player: Option<PlayerId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Intermediate,
            expert_probability: DEFAULT_EXPERT_PROBABILITY,
            seed: 42,
            first_player: None,
        }
    }
}

impl GameConfig {
    /// Set the opponent difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the intermediate opponent's expert probability.
    pub fn with_expert_probability(mut self, probability: f64) -> Self {
        self.expert_probability = probability;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fix the seat that moves first.
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = Some(player);
        self
    }

    /// Check that all values are in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.expert_probability) {
            return Err(ConfigError::ExpertProbability(self.expert_probability));
        }
        if let Some(player) = self.first_player {
            if player.index() >= PLAYER_COUNT {
                return Err(ConfigError::UnknownSeat(player.into()));
            }
        }
        Ok(())
    }
}
