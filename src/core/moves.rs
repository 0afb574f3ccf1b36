//! Move representation.
//!
//! A move removes `count` contiguous pins from one block, starting `start`
//! pins in from the block's left edge. Whatever is left on either side of
//! the removed run becomes a new block.

use serde::{Deserialize, Serialize};

/// A single move: `(row, block, start, count)`.
///
/// ## Example
///
/// ```
/// use pins::core::Move;
///
/// // Take the middle pin out of the first block of row 0.
/// let mv = Move::new(0, 0, 1, 1);
/// assert_eq!(mv.remainders(3), (1, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index (0-based).
    pub row: usize,

    /// Block index within the row (0-based).
    pub block: usize,

    /// Offset of the first removed pin within the block.
    pub start: u32,

    /// Number of contiguous pins removed.
    pub count: u32,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(row: usize, block: usize, start: u32, count: u32) -> Self {
        Self {
            row,
            block,
            start,
            count,
        }
    }

    /// One past the last removed pin, saturating at `u32::MAX`.
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.count)
    }

    /// Check that this move fits inside a block of `block_size` pins.
    #[must_use]
    pub const fn fits(&self, block_size: u32) -> bool {
        self.count >= 1 && self.start as u64 + self.count as u64 <= block_size as u64
    }

    /// Sizes of the left and right remainders left behind in a block of
    /// `block_size`. Either may be zero.
    ///
    /// Only meaningful when the move `fits`; otherwise the right remainder
    /// saturates to zero.
    #[must_use]
    pub const fn remainders(&self, block_size: u32) -> (u32, u32) {
        (self.start, block_size.saturating_sub(self.end()))
    }

    /// Check if this move takes the whole block.
    #[must_use]
    pub const fn takes_whole(&self, block_size: u32) -> bool {
        self.start == 0 && self.count == block_size
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "take {} from row {} block {} at offset {}",
            self.count,
            self.row + 1,
            self.block + 1,
            self.start
        )
    }
}
