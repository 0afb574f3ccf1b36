//! A single game from the initial board to the last pin.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::ai::{strategy_for, Strategy};
use crate::core::{Board, Difficulty, GameConfig, GameRng, Move, PlayerId, PlayerMap};
use crate::error::{ConfigError, SessionError};
use crate::rules::{apply_move, outcome, GameResult};

/// Who decides the moves for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Moves are supplied from outside through `Session::play`.
    Human,
    /// Moves are chosen by the strategy for this difficulty.
    Cpu(Difficulty),
}

/// One applied move, kept for the lifetime of the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// The player who moved.
    pub player: PlayerId,
    /// The move played.
    pub mv: Move,
    /// Board after the move.
    pub board: Board,
}

/// Session loop state: board, player to move and the controllers.
///
/// The session owns the only mutable game state. Boards are replaced, never
/// mutated, so history entries stay valid snapshots.
pub struct Session {
    board: Board,
    to_move: PlayerId,
    first_player: PlayerId,
    controllers: PlayerMap<Controller>,
    strategies: PlayerMap<Option<Box<dyn Strategy>>>,
    rng: GameRng,
    history: Vector<TurnRecord>,
    result: Option<GameResult>,
}

impl Session {
    /// Start a game on the initial board.
    ///
    /// The first player comes from the config, or is drawn from the seeded
    /// RNG when the config leaves it open.
    pub fn new(config: &GameConfig, controllers: PlayerMap<Controller>) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut strategies = PlayerMap::new(|_| None);
        for (player, controller) in controllers.iter() {
            if let Controller::Cpu(difficulty) = *controller {
                strategies[player] = Some(strategy_for(difficulty, config.expert_probability)?);
            }
        }

        let mut rng = GameRng::new(config.seed);
        let first_player = config.first_player.unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                PlayerId::FIRST
            } else {
                PlayerId::SECOND
            }
        });

        tracing::info!(
            seed = config.seed,
            first = %first_player,
            "starting game"
        );

        Ok(Self {
            board: Board::initial(),
            to_move: first_player,
            first_player,
            controllers,
            strategies,
            rng,
            history: Vector::new(),
            result: None,
        })
    }

    /// Human in the first seat against the configured computer opponent.
    pub fn human_vs_cpu(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::new(
            config,
            PlayerMap::from_pair(Controller::Human, Controller::Cpu(config.difficulty)),
        )
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    /// Player who moved first.
    #[must_use]
    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    /// Controller of a seat.
    #[must_use]
    pub fn controller(&self, player: PlayerId) -> Controller {
        self.controllers[player]
    }

    /// Check if the next move must come from a human.
    #[must_use]
    pub fn awaiting_human(&self) -> bool {
        !self.is_over() && self.controllers[self.to_move] == Controller::Human
    }

    /// Moves played so far.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Result, once the last pin has been taken.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Apply a move for the player to move.
    ///
    /// Returns the result if this move took the last pin.
    pub fn play(&mut self, mv: Move) -> Result<Option<GameResult>, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }

        let next = apply_move(&self.board, &mv)?;
        let player = self.to_move;
        let turn = self.history.len() as u32 + 1;

        tracing::debug!(turn, %player, mv = %mv, board = %next, "move applied");

        self.history.push_back(TurnRecord {
            turn,
            player,
            mv,
            board: next.clone(),
        });
        self.board = next;
        self.to_move = player.opponent();
        self.result = outcome(&self.board, self.to_move);

        if let Some(result) = self.result {
            tracing::info!(winner = %result.winner, turns = turn, "game over");
        }
        Ok(self.result)
    }

    /// Let the computer choose and play the next move.
    pub fn play_cpu(&mut self) -> Result<Move, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }

        let player = self.to_move;
        let strategy = self.strategies[player]
            .as_deref()
            .ok_or(SessionError::NotCpuTurn(player))?;
        let mv = strategy
            .select_move(&self.board, &mut self.rng)
            .ok_or(SessionError::GameOver)?;

        self.play(mv)?;
        Ok(mv)
    }

    /// Play computer moves until the game ends.
    ///
    /// Fails with `NotCpuTurn` as soon as a human seat is to move.
    pub fn play_out(&mut self) -> Result<GameResult, SessionError> {
        loop {
            if let Some(result) = self.result {
                return Ok(result);
            }
            self.play_cpu()?;
        }
    }
}
