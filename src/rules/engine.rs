//! Move generation, move application and win detection.
//!
//! All functions are pure: they read a `Board` and return new values.

use smallvec::SmallVec;

use crate::core::{Blocks, Board, Move, PlayerId};
use crate::error::MoveError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// The player who did not take the last pin.
    pub winner: PlayerId,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// The player who took the last pin.
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        self.winner.opponent()
    }
}

/// Enumerate every legal move.
///
/// Order is rows, then blocks, then `count` ascending, then `start`
/// ascending. An empty board yields no moves, which is how callers detect
/// the end of the game.
///
/// ```
/// use pins::core::{Board, Move};
/// use pins::rules::legal_moves;
///
/// let board = Board::from_rows(vec![vec![2]]).unwrap();
/// assert_eq!(
///     legal_moves(&board),
///     vec![Move::new(0, 0, 0, 1), Move::new(0, 0, 1, 1), Move::new(0, 0, 0, 2)]
/// );
/// ```
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(move_count(board));

    for (row, r) in board.rows().enumerate() {
        for (block, &size) in r.blocks().iter().enumerate() {
            for count in 1..=size {
                for start in 0..=size - count {
                    moves.push(Move::new(row, block, start, count));
                }
            }
        }
    }

    tracing::trace!(board = %board, moves = moves.len(), "generated moves");
    moves
}

/// Number of legal moves: a block of `n` pins has `n(n+1)/2` contiguous runs.
#[must_use]
pub fn move_count(board: &Board) -> usize {
    board
        .blocks()
        .map(|n| (n as usize * (n as usize + 1)) / 2)
        .sum()
}

/// Check a move against a board without applying it.
pub fn validate_move(board: &Board, mv: &Move) -> Result<u32, MoveError> {
    let row = board.row(mv.row).ok_or(MoveError::RowOutOfRange {
        row: mv.row,
        rows: board.row_count(),
    })?;
    let block_size = row
        .blocks()
        .get(mv.block)
        .copied()
        .ok_or(MoveError::BlockOutOfRange {
            row: mv.row,
            block: mv.block,
            blocks: row.blocks().len(),
        })?;

    if mv.count == 0 {
        return Err(MoveError::ZeroCount);
    }
    if !mv.fits(block_size) {
        return Err(MoveError::PastBlockEnd {
            start: mv.start,
            count: mv.count,
            block_size,
        });
    }
    Ok(block_size)
}

/// Apply a move, returning the successor board.
///
/// The targeted block is replaced by its non-empty remainders, the row is
/// re-sorted, and the row is dropped if nothing is left. The input board is
/// not modified.
///
/// ```
/// use pins::core::{Board, Move};
/// use pins::rules::apply_move;
///
/// let board = Board::from_rows(vec![vec![3]]).unwrap();
/// let next = apply_move(&board, &Move::new(0, 0, 1, 1)).unwrap();
/// assert_eq!(next.to_vecs(), vec![vec![1, 1]]);
/// ```
pub fn apply_move(board: &Board, mv: &Move) -> Result<Board, MoveError> {
    let block_size = validate_move(board, mv)?;
    Ok(split_block(board, mv, block_size))
}

/// Apply a move taken from `legal_moves(board)`.
///
/// Skips validation; callers guarantee the move came from the generator.
pub(crate) fn successor(board: &Board, mv: &Move) -> Board {
    let block_size = board.block(mv.row, mv.block);
    debug_assert!(
        block_size.is_some_and(|size| mv.fits(size)),
        "move {mv:?} is not legal on {board}"
    );
    split_block(board, mv, block_size.unwrap_or_default())
}

fn split_block(board: &Board, mv: &Move, block_size: u32) -> Board {
    let (left, right) = mv.remainders(block_size);

    let mut blocks: Blocks = board
        .row(mv.row)
        .map(|r| SmallVec::from_slice(r.blocks()))
        .unwrap_or_default();
    blocks.remove(mv.block);
    blocks.extend([left, right].into_iter().filter(|&n| n > 0));

    board.replace_row(mv.row, blocks)
}

/// Check if the game is over.
///
/// `to_move` is the player whose turn it would be. On an empty board the
/// other player took the last pin, so `to_move` wins.
#[must_use]
pub fn outcome(board: &Board, to_move: PlayerId) -> Option<GameResult> {
    board.is_empty().then_some(GameResult { winner: to_move })
}
