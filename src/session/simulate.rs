//! Computer-vs-computer matches.
//!
//! Plays many seeded games between two difficulties and tallies the results,
//! which is how the relative strength of the opponents is checked.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameConfig, GameRng, PlayerId, PlayerMap, DEFAULT_EXPERT_PROBABILITY};
use crate::error::SimulationError;

use super::game::{Controller, Session};

/// Configuration for a match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Difficulty in the first seat.
    pub first: Difficulty,

    /// Difficulty in the second seat.
    pub second: Difficulty,

    /// Number of games to play.
    pub games: u32,

    /// Seed for the match; each game gets its own fork.
    pub seed: u64,

    /// Expert probability for intermediate seats.
    pub expert_probability: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first: Difficulty::Expert,
            second: Difficulty::Novice,
            games: 100,
            seed: 42,
            expert_probability: DEFAULT_EXPERT_PROBABILITY,
        }
    }
}

impl MatchConfig {
    /// Create a match between two difficulties.
    pub fn new(first: Difficulty, second: Difficulty) -> Self {
        Self {
            first,
            second,
            ..Self::default()
        }
    }

    /// Set number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the match seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the intermediate expert probability.
    pub fn with_expert_probability(mut self, probability: f64) -> Self {
        self.expert_probability = probability;
        self
    }
}

/// Tallied match results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Games played.
    pub games: u32,

    /// Wins per seat.
    pub wins: PlayerMap<u32>,

    /// Games won by whoever moved first.
    pub first_mover_wins: u32,

    /// Moves played across all games.
    pub total_turns: u64,
}

impl MatchReport {
    /// Fraction of games won by a seat.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins[player]) / f64::from(self.games)
    }

    /// Average number of moves per game.
    #[must_use]
    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / f64::from(self.games)
    }
}

/// Play a full match.
pub fn run_match(config: &MatchConfig) -> Result<MatchReport, SimulationError> {
    let mut rng = GameRng::new(config.seed);
    let controllers = PlayerMap::from_pair(Controller::Cpu(config.first), Controller::Cpu(config.second));

    let mut report = MatchReport {
        games: 0,
        wins: PlayerMap::with_value(0),
        first_mover_wins: 0,
        total_turns: 0,
    };

    for game in 0..config.games {
        let game_config = GameConfig::default()
            .with_seed(rng.fork().seed())
            .with_expert_probability(config.expert_probability);

        let mut session = Session::new(&game_config, controllers.clone())?;
        let result = session.play_out()?;

        report.games += 1;
        report.wins[result.winner] += 1;
        if result.winner == session.first_player() {
            report.first_mover_wins += 1;
        }
        report.total_turns += session.history().len() as u64;

        tracing::debug!(game, winner = %result.winner, turns = session.history().len(), "match game finished");
    }

    tracing::info!(
        games = report.games,
        first_wins = report.wins[PlayerId::FIRST],
        second_wins = report.wins[PlayerId::SECOND],
        "match finished"
    );
    Ok(report)
}
