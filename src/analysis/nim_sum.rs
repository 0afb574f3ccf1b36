//! Nim-sum and endgame detection.
//!
//! Every block is treated as an independent Nim heap. In normal-play Nim a
//! position is lost for the player to move iff the XOR of all heap sizes is
//! zero. Pins is misère, so the expert only trusts that rule until the board
//! degenerates into single-pin heaps (the endgame), where heap parity decides.

use crate::core::Board;

/// XOR of all block sizes. Zero for the empty board.
///
/// ```
/// use pins::analysis::nim_sum;
/// use pins::core::Board;
///
/// assert_eq!(nim_sum(&Board::initial()), 3 ^ 5 ^ 7);
/// ```
#[must_use]
pub fn nim_sum(board: &Board) -> u32 {
    board.blocks().fold(0, |acc, n| acc ^ n)
}

/// Check if every remaining block has exactly one pin.
///
/// Vacuously true for the empty board.
#[must_use]
pub fn is_endgame(board: &Board) -> bool {
    board.blocks().all(|n| n == 1)
}

/// Number of heaps (blocks) on the board.
#[must_use]
pub fn heap_count(board: &Board) -> usize {
    board.block_count()
}
