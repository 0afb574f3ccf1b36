//! Board state: rows of contiguous pin blocks.
//!
//! A board is an ordered list of rows, each row a list of block sizes. A
//! block is a maximal run of pins that are still standing. Two invariants
//! hold for every `Board` value:
//!
//! - every block has at least one pin
//! - a row with no blocks left is removed from the board
//!
//! Blocks inside a row are kept sorted ascending. That ordering is a display
//! convention only; nothing strategic depends on it.
//!
//! Rows are stored in an `im::Vector` so that AI lookahead can take
//! successor snapshots without copying untouched rows.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::INITIAL_ROWS;
use crate::error::BoardError;

/// Block sizes of one row. Rows rarely split into more than four blocks.
pub type Blocks = SmallVec<[u32; 4]>;

/// One row of the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Row {
    /// Index of the initial row this row descends from.
    origin: usize,
    blocks: Blocks,
}

impl Row {
    /// The single canonicalization step: sort blocks ascending and drop the
    /// row entirely when nothing is left.
    pub(crate) fn canonical(origin: usize, mut blocks: Blocks) -> Option<Row> {
        if blocks.is_empty() {
            return None;
        }
        blocks.sort_unstable();
        Some(Row { origin, blocks })
    }

    /// Index of the initial row this row descends from.
    #[must_use]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Block sizes, ascending.
    #[must_use]
    pub fn blocks(&self) -> &[u32] {
        &self.blocks
    }

    /// Number of pins standing in this row.
    #[must_use]
    pub fn pins(&self) -> u32 {
        self.blocks.iter().sum()
    }
}

/// The full board.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    rows: Vector<Row>,
}

impl Board {
    /// The starting position: one block per initial row.
    #[must_use]
    pub fn initial() -> Self {
        let rows = INITIAL_ROWS
            .iter()
            .enumerate()
            .filter_map(|(origin, &size)| Row::canonical(origin, Blocks::from_slice(&[size])))
            .collect();
        Self { rows }
    }

    /// A board with no pins left.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a board from raw block sizes, one inner sequence per row.
    ///
    /// Rows are canonicalized: blocks are sorted and empty rows dropped.
    /// A zero-sized block is rejected.
    ///
    /// ```
    /// use pins::core::Board;
    ///
    /// let board = Board::from_rows(vec![vec![5, 1], vec![]]).unwrap();
    /// assert_eq!(board.to_vecs(), vec![vec![1, 5]]);
    /// ```
    pub fn from_rows<R, B>(rows: R) -> Result<Self, BoardError>
    where
        R: IntoIterator<Item = B>,
        B: IntoIterator<Item = u32>,
    {
        let mut out = Vector::new();
        for (origin, row) in rows.into_iter().enumerate() {
            let blocks: Blocks = row.into_iter().collect();
            if blocks.contains(&0) {
                return Err(BoardError::EmptyBlock { row: origin });
            }
            if let Some(row) = Row::canonical(origin, blocks) {
                out.push_back(row);
            }
        }
        Ok(Self { rows: out })
    }

    /// Replace the blocks of one row, canonicalizing the result.
    ///
    /// Used by the move applicator; never mutates `self`.
    pub(crate) fn replace_row(&self, row: usize, blocks: Blocks) -> Self {
        let mut rows = self.rows.clone();
        let origin = rows[row].origin;
        match Row::canonical(origin, blocks) {
            Some(updated) => {
                rows.set(row, updated);
            }
            None => {
                rows.remove(row);
            }
        }
        Self { rows }
    }

    /// Iterate over rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Get a row by index.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of non-empty rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Size of a block, if it exists.
    #[must_use]
    pub fn block(&self, row: usize, block: usize) -> Option<u32> {
        self.row(row).and_then(|r| r.blocks.get(block).copied())
    }

    /// All block sizes across all rows.
    pub fn blocks(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flat_map(|r| r.blocks.iter().copied())
    }

    /// Number of blocks (heaps) on the board.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.rows.iter().map(|r| r.blocks.len()).sum()
    }

    /// Total pins standing.
    #[must_use]
    pub fn total_pins(&self) -> u32 {
        self.rows.iter().map(Row::pins).sum()
    }

    /// Check if no pins remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain nested block sizes, for comparisons and debugging.
    #[must_use]
    pub fn to_vecs(&self) -> Vec<Vec<u32>> {
        self.rows.iter().map(|r| r.blocks.to_vec()).collect()
    }
}

// Row origins are display metadata and do not take part in equality.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(a, b)| a.blocks == b.blocks)
    }
}

impl Eq for Board {}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.to_vecs())
    }
}
