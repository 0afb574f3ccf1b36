//! Error types for board construction, move application, input and sessions.

use crate::core::PlayerId;

/// Errors raised when building a board from raw block sizes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("row {row} contains a block of size 0")]
    EmptyBlock { row: usize },
}

/// A move that does not fit the board it is applied to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("row {row} does not exist (board has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("block {block} does not exist in row {row} ({blocks} blocks)")]
    BlockOutOfRange { row: usize, block: usize, blocks: usize },

    #[error("a move must remove at least one pin")]
    ZeroCount,

    #[error("removing {count} pins from offset {start} overruns a block of {block_size}")]
    PastBlockEnd { start: u32, count: u32, block_size: u32 },
}

/// Rejected human input. The message is shown to the player before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input. Please enter numbers only.")]
    NotANumber,

    #[error("Invalid row. Please try again.")]
    InvalidRow,

    #[error("Invalid block size. Please try again.")]
    InvalidBlock,

    #[error("You must take between 1 and {block_size} pins.")]
    InvalidCount { block_size: u32 },

    #[error("Invalid position. Please try again.")]
    InvalidPlacement,

    #[error("Cannot take from middle and leave two equal sides. Try again.")]
    UnevenCenter,

    #[error("Invalid choice. Please enter 1, 2, or 3.")]
    InvalidDifficulty,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown difficulty '{0}' (expected novice, intermediate or expert)")]
    UnknownDifficulty(String),

    #[error("expert probability must be within [0, 1], got {0}")]
    ExpertProbability(f64),

    #[error("seat {0} does not exist (expected 0 or 1)")]
    UnknownSeat(u8),
}

/// Errors raised by the session loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the game is already over")]
    GameOver,

    #[error("{0} is not controlled by the computer")]
    NotCpuTurn(PlayerId),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),
}

/// Errors raised while running computer-vs-computer matches.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid match configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),
}
