//! Expert strategy: Nim-sum play with a misère endgame correction.
//!
//! Outside the endgame the expert plays normal-play Nim, moving to a zero
//! Nim-sum. Close to the end the parity of single-pin heaps is what matters:
//! leaving the opponent an odd number of them wins, leaving an even number
//! (or none at all) loses.

use crate::analysis::{heap_count, is_endgame, nim_sum};
use crate::core::{Board, GameRng, Move};
use crate::rules::{legal_moves, successor};

use super::policy::Strategy;

/// How a candidate move leaves the board for the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// Only single pins remain and there is an odd number of them.
    OddUnits,
    /// Only single pins remain and there is an even number of them,
    /// including the empty board.
    EvenUnits,
    /// Larger blocks remain and the Nim-sum is zero.
    Balanced,
    /// Larger blocks remain and the Nim-sum is non-zero.
    Unbalanced,
}

impl Continuation {
    /// Classify the board the opponent will face.
    #[must_use]
    pub fn of(next: &Board) -> Self {
        if is_endgame(next) {
            if heap_count(next) % 2 == 1 {
                Continuation::OddUnits
            } else {
                Continuation::EvenUnits
            }
        } else if nim_sum(next) == 0 {
            Continuation::Balanced
        } else {
            Continuation::Unbalanced
        }
    }
}

/// Optimal-play opponent.
///
/// Candidate moves are shuffled first, so among equally good moves the
/// choice depends only on the RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct Expert;

impl Strategy for Expert {
    fn name(&self) -> &'static str {
        "expert"
    }

    fn select_move(&self, board: &Board, rng: &mut GameRng) -> Option<Move> {
        let mut moves = legal_moves(board);
        rng.shuffle(&mut moves);

        let first = *moves.first()?;

        // Only single pins left: every move removes one heap.
        if is_endgame(board) {
            tracing::debug!(%board, mv = %first, "expert in unit endgame");
            return Some(first);
        }

        for mv in &moves {
            let next = successor(board, mv);
            match Continuation::of(&next) {
                Continuation::OddUnits | Continuation::Balanced => {
                    tracing::debug!(%board, %next, mv = %mv, "expert found winning move");
                    return Some(*mv);
                }
                // Leaving an even number of single pins hands the opponent
                // the misère win, even though the Nim-sum is zero.
                Continuation::EvenUnits | Continuation::Unbalanced => {}
            }
        }

        let fallback = rng.choose(&moves).copied();
        tracing::debug!(%board, "expert has no winning move, playing at random");
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_move;

    fn board(rows: Vec<Vec<u32>>) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_continuation_classes() {
        assert_eq!(Continuation::of(&board(vec![vec![1, 1, 1]])), Continuation::OddUnits);
        assert_eq!(Continuation::of(&board(vec![vec![1], vec![1]])), Continuation::EvenUnits);
        assert_eq!(Continuation::of(&Board::empty()), Continuation::EvenUnits);
        assert_eq!(Continuation::of(&board(vec![vec![2, 2]])), Continuation::Balanced);
        assert_eq!(Continuation::of(&Board::initial()), Continuation::Unbalanced);
    }

    #[test]
    fn test_empty_board_has_no_move() {
        assert_eq!(Expert.select_move(&Board::empty(), &mut GameRng::new(1)), None);
    }

    #[test]
    fn test_three_unit_heaps_leaves_two() {
        let start = board(vec![vec![1, 1, 1]]);
        for seed in 0..20 {
            let mv = Expert.select_move(&start, &mut GameRng::new(seed)).unwrap();
            let next = apply_move(&start, &mv).unwrap();
            assert_eq!(next, board(vec![vec![1, 1]]));
        }
    }

    #[test]
    fn test_avoids_taking_last_pin() {
        // Taking both pins of the 2 would empty the board.
        let start = board(vec![vec![2]]);
        for seed in 0..20 {
            let mv = Expert.select_move(&start, &mut GameRng::new(seed)).unwrap();
            assert_eq!(mv.count, 1);
        }
    }

    #[test]
    fn test_leaves_odd_units() {
        // [1, 1, 2]: reducing the 2 to a single pin leaves three units.
        let start = board(vec![vec![1, 1, 2]]);
        for seed in 0..20 {
            let mv = Expert.select_move(&start, &mut GameRng::new(seed)).unwrap();
            let next = apply_move(&start, &mv).unwrap();
            assert_eq!(next, board(vec![vec![1, 1, 1]]));
        }
    }

    #[test]
    fn test_balances_initial_position() {
        let start = Board::initial();
        for seed in 0..50 {
            let mv = Expert.select_move(&start, &mut GameRng::new(seed)).unwrap();
            let next = apply_move(&start, &mv).unwrap();
            assert_eq!(nim_sum(&next), 0, "seed {seed} played {mv}");
        }
    }

    #[test]
    fn test_same_seed_same_move() {
        let start = Board::initial();
        let a = Expert.select_move(&start, &mut GameRng::new(9));
        let b = Expert.select_move(&start, &mut GameRng::new(9));
        assert_eq!(a, b);
    }
}
