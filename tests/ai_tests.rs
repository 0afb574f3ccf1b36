//! Strategy integration tests, including exhaustive checks of the expert
//! over every position reachable from the initial board.

use std::collections::HashSet;

use pins::ai::{strategy_for, Continuation, Expert, Intermediate, Novice, Strategy};
use pins::analysis::{is_endgame, nim_sum, MisereSolver};
use pins::core::{Board, Difficulty, GameRng};
use pins::rules::{apply_move, legal_moves};

fn board(rows: Vec<Vec<u32>>) -> Board {
    Board::from_rows(rows).unwrap()
}

/// Every distinct board reachable from the initial position.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut stack = vec![Board::initial()];

    while let Some(b) = stack.pop() {
        if !seen.insert(b.to_vecs()) {
            continue;
        }
        for mv in legal_moves(&b) {
            stack.push(apply_move(&b, &mv).unwrap());
        }
        out.push(b);
    }
    out
}

// =============================================================================
// Expert
// =============================================================================

#[test]
fn test_expert_three_unit_heaps() {
    let start = board(vec![vec![1, 1, 1]]);
    for seed in 0..10 {
        let mv = Expert.select_move(&start, &mut GameRng::new(seed)).unwrap();
        assert_eq!(apply_move(&start, &mv).unwrap(), board(vec![vec![1, 1]]));
    }
}

#[test]
fn test_expert_first_move_balances() {
    for seed in 0..100 {
        let start = Board::initial();
        let mv = Expert.select_move(&start, &mut GameRng::new(seed)).unwrap();
        let next = apply_move(&start, &mv).unwrap();
        assert_eq!(nim_sum(&next), 0, "seed {seed}: {mv}");
        assert!(!is_endgame(&next));
    }
}

#[test]
fn test_expert_self_play_keeps_nim_sum_zero() {
    for seed in 0..30 {
        let mut rng = GameRng::new(seed);
        let mut current = Board::initial();

        while !current.is_empty() {
            let mv = Expert.select_move(&current, &mut rng).unwrap();
            let next = apply_move(&current, &mv).unwrap();

            if nim_sum(&current) != 0 && !is_endgame(&current) && !is_endgame(&next) {
                assert_eq!(nim_sum(&next), 0, "seed {seed}: {current} -> {next}");
            }
            current = next;
        }
    }
}

#[test]
fn test_expert_never_misses_a_winning_continuation() {
    let mut rng = GameRng::new(2024);
    for b in reachable_boards() {
        if b.is_empty() || is_endgame(&b) || nim_sum(&b) == 0 {
            continue;
        }
        for _ in 0..3 {
            let mv = Expert.select_move(&b, &mut rng).unwrap();
            let next = apply_move(&b, &mv).unwrap();
            let class = Continuation::of(&next);
            assert!(
                matches!(class, Continuation::Balanced | Continuation::OddUnits),
                "{b} -> {next} is {class:?}"
            );
        }
    }
}

#[test]
fn test_expert_agrees_with_solver() {
    let mut solver = MisereSolver::new();
    let mut rng = GameRng::new(7);

    for b in reachable_boards() {
        if b.is_empty() || !solver.is_winning(&b) {
            continue;
        }
        let mv = Expert.select_move(&b, &mut rng).unwrap();
        let next = apply_move(&b, &mv).unwrap();
        assert!(
            !solver.is_winning(&next),
            "expert threw away {b} by playing {mv}"
        );
    }
}

#[test]
fn test_expert_from_lost_position_still_moves_legally() {
    // [[1, 2, 3]] has Nim-sum 0: no winning move exists.
    let start = board(vec![vec![1, 2, 3]]);
    let legal = legal_moves(&start);
    for seed in 0..20 {
        let mv = Expert.select_move(&start, &mut GameRng::new(seed)).unwrap();
        assert!(legal.contains(&mv));
    }
}

// =============================================================================
// Novice and Intermediate
// =============================================================================

#[test]
fn test_all_strategies_choose_legal_moves() {
    let boards = reachable_boards();
    let mut rng = GameRng::new(1);
    for difficulty in Difficulty::ALL {
        let strategy = strategy_for(difficulty, 0.6).unwrap();
        for b in boards.iter().step_by(7) {
            let legal = legal_moves(b);
            match strategy.select_move(b, &mut rng) {
                Some(mv) => assert!(legal.contains(&mv), "{} chose {mv} on {b}", strategy.name()),
                None => assert!(b.is_empty()),
            }
        }
    }
}

#[test]
fn test_strategies_are_seed_deterministic() {
    let b = Board::initial();
    for difficulty in Difficulty::ALL {
        let strategy = strategy_for(difficulty, 0.6).unwrap();
        let a: Vec<_> = {
            let mut rng = GameRng::new(77);
            (0..20).map(|_| strategy.select_move(&b, &mut rng)).collect()
        };
        let c: Vec<_> = {
            let mut rng = GameRng::new(77);
            (0..20).map(|_| strategy.select_move(&b, &mut rng)).collect()
        };
        assert_eq!(a, c, "{difficulty}");
    }
}

#[test]
fn test_intermediate_plays_expert_more_often_than_novice() {
    let start = Board::initial();
    let balanced = |strategy: &dyn Strategy, seed| {
        let mut rng = GameRng::new(seed);
        (0..400)
            .filter(|_| {
                let mv = strategy.select_move(&start, &mut rng).unwrap();
                nim_sum(&apply_move(&start, &mv).unwrap()) == 0
            })
            .count()
    };

    let novice = balanced(&Novice, 5);
    let intermediate = balanced(&Intermediate::default(), 5);
    let expert = balanced(&Expert, 5);

    assert_eq!(expert, 400);
    assert!(intermediate > novice, "intermediate {intermediate} vs novice {novice}");
    // About 60% expert plus a few lucky random moves.
    assert!((200..=300).contains(&intermediate), "intermediate {intermediate}");
}
