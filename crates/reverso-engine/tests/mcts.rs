//! Integration tests for the MCTS engine.
//!
//! Drives full searches through the public API: legality of the chosen
//! move, iteration accounting, progress reporting, and complete games.

use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;

use reverso_core::{Board, Color};
use reverso_engine::{MctsSearcher, SearchConfig, SearchProgress, compute_move};

const MIDGAME: &str = "
    ........
    ........
    ..WB....
    ..BBBW..
    ..WWBB..
    ...W.B..
    ........
    ........";

fn searcher(iterations: u32, seed: u64) -> MctsSearcher {
    MctsSearcher::new(SearchConfig::with_iterations(iterations).seeded(seed))
}

// ── Move legality ────────────────────────────────────────────────────────────

#[test]
fn starting_position_black_move_is_legal() {
    let board = Board::starting_position();
    let mv = compute_move(&board, Color::Black, 100, None).expect("black has four moves");
    assert!(board.legal_moves(Color::Black).contains(mv));
}

#[test]
fn midgame_moves_are_legal_for_both_sides() {
    let board: Board = MIDGAME.parse().unwrap();
    for color in Color::ALL {
        let result = searcher(150, 21).search(&board, color, |_| {});
        let mv = result.best_move.expect("both sides can move in this position");
        assert!(
            board.is_legal(color, mv),
            "{color} chose illegal move {mv}"
        );
        assert_eq!(result.children.len(), board.legal_moves(color).len());
    }
}

#[test]
fn only_move_is_chosen() {
    // Black's single legal move captures the last white disc.
    let board: Board = "
        BW......
        ........
        ........
        ........
        ........
        ........
        ........
        ........"
        .parse()
        .unwrap();
    let result = searcher(30, 1).search(&board, Color::Black, |_| {});
    let mv = result.best_move.unwrap();
    assert_eq!(mv.coords(), (2, 0));
    assert_eq!(result.children.len(), 1);
    assert_eq!(result.children[0].visits, 30);
    // Every rollout from the capture is an immediate black win.
    assert_eq!(result.children[0].reward, 30.0);
}

#[test]
fn terminal_position_has_no_move() {
    let board = Board::empty();
    assert_eq!(compute_move(&board, Color::Black, 10, None), None);
}

// ── Accounting ───────────────────────────────────────────────────────────────

#[test]
fn rollout_count_matches_budget() {
    let board: Board = MIDGAME.parse().unwrap();
    for budget in [0, 1, 3, 64, 257] {
        let result = searcher(budget, 77).search(&board, Color::White, |_| {});
        assert_eq!(result.rollouts, budget);
        assert_eq!(result.root_visits, budget);
        assert!(result.tree_size >= 1 + result.children.len());
    }
}

#[test]
fn injected_rng_is_reproducible() {
    let board = Board::starting_position();
    let engine = MctsSearcher::new(SearchConfig::with_iterations(90));
    let a = engine.search_with_rng(&board, Color::Black, &mut StdRng::seed_from_u64(5), |_| {});
    let b = engine.search_with_rng(&board, Color::Black, &mut StdRng::seed_from_u64(5), |_| {});
    assert_eq!(a, b);
}

// ── Progress ─────────────────────────────────────────────────────────────────

#[test]
fn progress_polled_from_another_thread() {
    let progress = SearchProgress::new();
    progress.start(300);
    let worker_progress = progress.clone();
    let board = Board::starting_position();

    let handle = thread::spawn(move || {
        searcher(300, 12).search_tracked(&board, Color::Black, &worker_progress)
    });

    let mut last = 0.0;
    while !handle.is_finished() {
        let now = progress.fraction();
        assert!(now >= last, "progress went backwards: {last} -> {now}");
        last = now;
        thread::yield_now();
    }

    let result = handle.join().expect("search thread panicked");
    assert!(result.best_move.is_some());
    assert_eq!(progress.fraction(), 1.0);
}

#[test]
fn zero_budget_reports_done_immediately() {
    let mut reports = Vec::new();
    let mut sink = |p: f64| reports.push(p);
    compute_move(&Board::starting_position(), Color::Black, 0, Some(&mut sink));
    assert_eq!(reports, vec![1.0]);
}

// ── Full games ───────────────────────────────────────────────────────────────

/// Play engine against engine to the end, returning the final board.
fn self_play(iterations: u32, seed: u64) -> Board {
    let mut board = Board::starting_position();
    let mut color = Color::Black;
    let mut rng = StdRng::seed_from_u64(seed);
    let engine = MctsSearcher::new(SearchConfig::with_iterations(iterations));

    while !board.is_terminal() {
        let before = board.score().total();
        match engine.search_with_rng(&board, color, &mut rng, |_| {}).best_move {
            Some(mv) => {
                board.apply_move(color, mv).expect("engine move must be legal");
                assert_eq!(board.score().total(), before + 1);
            }
            None => assert!(!board.has_legal_move(color), "engine passed with moves available"),
        }
        color = !color;
    }
    board
}

#[test]
fn self_play_reaches_terminal_state() {
    let board = self_play(20, 3);
    assert!(board.is_terminal());
    assert!(board.score().total() <= 64);
    board.validate().unwrap();
}

#[test]
#[ignore] // slow
fn self_play_default_budget() {
    let board = self_play(500, 8);
    assert!(board.is_terminal());
}
