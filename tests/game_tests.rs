//! End-to-end game flow tests.

mod common;

use std::time::Duration;

use common::{board, game_on, seeded_game};
use proset::{
    Feedback, GameEvent, GamePhase, GameSnapshot, HintResult, ManualClock, ProsetConfig,
    ProsetError, ProsetGame,
};
use rustc_hash::FxHashSet;

fn assert_unique(game: &ProsetGame<ManualClock>) {
    let unique: FxHashSet<_> = game.cards().iter().collect();
    assert_eq!(unique.len(), game.cards().len(), "duplicate card on board");
}

// =============================================================================
// Full Play-Through
// =============================================================================

#[test]
fn test_reveal_and_submit_loop() {
    let mut game = seeded_game(42);
    let mut last_score = 0;

    for round in 0..50 {
        let before = game.cards().to_vec();
        let solution = game.reveal_solution();

        // Seven 6-dot cards are always linearly dependent
        assert!(solution.found, "round {} had no solution", round);

        let result = game.submit().unwrap();
        assert!(result.valid);
        assert_eq!(result.replaced, solution.indices);
        assert_eq!(result.score_delta, solution.indices.len() as u64);
        assert_eq!(game.score(), last_score + result.score_delta);
        last_score = game.score();

        for (i, card) in game.cards().iter().enumerate() {
            if solution.indices.contains(&i) {
                assert!(!before.contains(card));
            } else {
                assert_eq!(*card, before[i]);
            }
        }
        assert_unique(&game);
        assert!(game.selection().is_empty());
    }

    assert_eq!(game.stats().valid_submits, 50);
}

#[test]
fn test_seed_reproduces_whole_game() {
    let mut a = seeded_game(9);
    let mut b = seeded_game(9);

    for _ in 0..10 {
        a.reveal_solution();
        b.reveal_solution();
        a.submit().unwrap();
        b.submit().unwrap();
        assert_eq!(a.cards(), b.cards());
    }
    assert_eq!(a.score(), b.score());
    assert_eq!(a.rng_state(), b.rng_state());
}

// =============================================================================
// Submits
// =============================================================================

#[test]
fn test_known_board_submits() {
    let mut game = game_on(board(&[
        &[1, 0, 1, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0],
        &[0, 1, 1, 0, 0, 0],
        &[0, 0, 0, 1, 1, 0],
    ]));

    game.toggle(0).unwrap();
    game.toggle(1).unwrap();
    let miss = game.submit().unwrap();
    assert!(!miss.valid);
    assert_eq!(game.score(), 0);

    game.toggle(2).unwrap();
    let hit = game.submit().unwrap();
    assert!(hit.valid);
    assert_eq!(hit.score_delta, 3);
    assert_eq!(game.score(), 3);
    assert_eq!(game.cards()[3].to_vec(), vec![0, 0, 0, 1, 1, 0]);
}

#[test]
fn test_invalid_toggle_leaves_state() {
    let mut game = seeded_game(3);
    game.toggle(1).unwrap();
    let cards = game.cards().to_vec();

    assert_eq!(game.toggle(7), Err(ProsetError::InvalidIndex { index: 7, len: 7 }));
    assert_eq!(game.selection().iter().collect::<Vec<_>>(), vec![1]);
    assert_eq!(game.cards(), cards.as_slice());
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_empty_submit_is_retry_not_error() {
    let mut game = seeded_game(5);
    let result = game.submit().unwrap();
    assert!(!result.valid);
    assert_eq!(result.feedback, Feedback::Retry);
    assert!(matches!(
        game.history().back(),
        Some(GameEvent::Submitted { valid: false, score_delta: 0, .. })
    ));
}

// =============================================================================
// Feedback Timing
// =============================================================================

#[test]
fn test_rapid_double_submit_keeps_newest_feedback() {
    let mut game = seeded_game(11);

    game.submit().unwrap();
    assert_eq!(game.phase(), GamePhase::Evaluated);

    game.clock().advance(Duration::from_millis(1200));
    game.reveal_solution();
    game.submit().unwrap();

    // Past the first deadline, before the second
    game.clock().advance(Duration::from_millis(1000));
    assert_eq!(game.feedback(), Some(Feedback::Correct));

    game.clock().advance(Duration::from_millis(500));
    assert_eq!(game.feedback(), None);
    assert_eq!(game.phase(), GamePhase::Idle);
}

#[test]
fn test_custom_feedback_delay() {
    let config = ProsetConfig::default()
        .with_seed(1)
        .with_feedback_delay(Duration::from_millis(100));
    let mut game = ProsetGame::with_clock(config, ManualClock::new()).unwrap();

    game.submit().unwrap();
    game.clock().advance(Duration::from_millis(99));
    assert_eq!(game.feedback(), Some(Feedback::Retry));
    game.clock().advance(Duration::from_millis(1));
    assert_eq!(game.feedback(), None);
}

// =============================================================================
// Solutions and Hints
// =============================================================================

#[test]
fn test_reveal_replaces_selection() {
    let mut game = seeded_game(21);
    game.toggle(0).unwrap();
    game.toggle(6).unwrap();

    let solution = game.reveal_solution();
    assert!(solution.found);
    assert_eq!(game.selection().to_indices(), solution.indices);
    assert!(game.guide().is_even());
}

#[test]
fn test_no_solution_board() {
    let mut game = game_on(board(&[&[1, 0, 0, 0], &[0, 1, 0, 0], &[0, 0, 1, 0], &[0, 0, 0, 1]]));

    let solution = game.reveal_solution();
    assert!(!solution.found);
    assert!(solution.indices.is_empty());
    assert_eq!(game.hint(), HintResult::NoSolution);

    // Nothing selected: submitting is a plain Retry
    assert!(!game.submit().unwrap().valid);
}

#[test]
fn test_following_hints_solves_board() {
    let mut game = seeded_game(8);

    for _ in 0..16 {
        match game.hint() {
            HintResult::Select(i) | HintResult::Deselect(i) => {
                game.toggle(i).unwrap();
            }
            HintResult::AlreadySolved => break,
            HintResult::NoSolution => panic!("default board always has a solution"),
        }
    }

    assert_eq!(game.hint(), HintResult::AlreadySolved);
    assert!(game.submit().unwrap().valid);
}

// =============================================================================
// Configuration and Snapshots
// =============================================================================

#[test]
fn test_exhausted_domain_surfaces() {
    let config = ProsetConfig::new(8, 3).with_seed(1);
    assert!(matches!(
        ProsetGame::with_clock(config, ManualClock::new()),
        Err(ProsetError::ExhaustedDomain { num_dots: 3, .. })
    ));

    // Allowing the blank card makes room for the eighth card
    let config = ProsetConfig::new(8, 3).with_seed(1).with_forbid_zero(false);
    assert!(ProsetGame::with_clock(config, ManualClock::new()).is_ok());
}

#[test]
fn test_snapshot_serde() {
    let mut game = seeded_game(4);
    game.toggle(2).unwrap();
    game.submit().unwrap();

    let snap = game.snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snap, back);
    assert_eq!(back.cards.len(), 7);
    assert!(back.cards.iter().all(|c| c.len() == 6));
}
