//! Exact misère solver.
//!
//! Rows and block order are irrelevant to who wins, so positions are keyed
//! by the sorted multiset of block sizes and memoized. The state space from
//! `[3, 5, 7]` has only a few hundred such multisets.
//!
//! The expert strategy does not use this; it exists to check the expert's
//! play and to answer "is this position won?" for the player to move.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Board, Move};
use crate::rules::{legal_moves, successor};

type Heaps = SmallVec<[u32; 8]>;

fn heaps_of(board: &Board) -> Heaps {
    let mut heaps: Heaps = board.blocks().collect();
    heaps.sort_unstable();
    heaps
}

/// Memoizing win/loss solver for the player to move.
#[derive(Clone, Debug, Default)]
pub struct MisereSolver {
    memo: FxHashMap<Heaps, bool>,
}

impl MisereSolver {
    /// Create a solver with an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct positions solved so far.
    #[must_use]
    pub fn positions_solved(&self) -> usize {
        self.memo.len()
    }

    /// Check if the player to move wins with perfect play.
    ///
    /// On the empty board the opponent has just taken the last pin, so the
    /// player to move has already won.
    pub fn is_winning(&mut self, board: &Board) -> bool {
        self.solve(heaps_of(board))
    }

    /// Moves that leave the opponent in a lost position.
    pub fn winning_moves(&mut self, board: &Board) -> Vec<Move> {
        legal_moves(board)
            .into_iter()
            .filter(|mv| !self.is_winning(&successor(board, mv)))
            .collect()
    }

    fn solve(&mut self, heaps: Heaps) -> bool {
        if heaps.is_empty() {
            return true;
        }
        if let Some(&known) = self.memo.get(&heaps) {
            return known;
        }

        let mut winning = false;
        'search: for (i, &size) in heaps.iter().enumerate() {
            // Equal heaps produce identical successors.
            if i > 0 && heaps[i - 1] == size {
                continue;
            }
            for count in 1..=size {
                // Mirror-image starts give the same remainders.
                for start in 0..=(size - count) / 2 {
                    let right = size - count - start;
                    let mut next: Heaps = heaps.clone();
                    next.remove(i);
                    next.extend([start, right].into_iter().filter(|&n| n > 0));
                    next.sort_unstable();
                    if !self.solve(next) {
                        winning = true;
                        break 'search;
                    }
                }
            }
        }

        self.memo.insert(heaps, winning);
        winning
    }
}
