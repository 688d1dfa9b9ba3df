//! Search algorithm tests.
//!
//! Alpha-beta must return the same value as exhaustive minimax whatever
//! the configuration; ordering and tables may only change the work done.

use super::position;
use crate::board::search::{
    get_best_move, minimax, search, SearchConfig, MATE_SCORE, MATE_THRESHOLD,
};
use crate::board::{Board, Color, Position};

fn configs(depth: u32) -> [SearchConfig; 4] {
    [
        SearchConfig::depth(depth),
        SearchConfig::depth(depth).with_transposition_table(false),
        SearchConfig::depth(depth).with_iterative_deepening(false),
        SearchConfig::depth(depth)
            .with_iterative_deepening(false)
            .with_transposition_table(false),
    ]
}

fn assert_matches_minimax(board: &Board, color: Color, depth: u32) {
    let (_, expected) = minimax(board, color, depth);
    for config in configs(depth) {
        let result = search(board, color, &config);
        assert_eq!(result.score, expected, "depth {depth} config {config:?}");
        assert!(result.best_move.is_some());
    }
}

// ============================================================================
// Alpha-beta vs minimax
// ============================================================================

#[test]
fn alphabeta_equals_minimax_in_pawn_ending() {
    let pos = position("4k3/4p3/8/8/8/8/4P3/4K3 w - - 0 1");
    for depth in 1..=3 {
        assert_matches_minimax(&pos.board, Color::White, depth);
        assert_matches_minimax(&pos.board, Color::Black, depth);
    }
}

#[test]
fn alphabeta_equals_minimax_with_mate_available() {
    let pos = position("6k1/5ppp/8/8/8/8/8/4R2K w - - 0 1");
    for depth in 1..=3 {
        assert_matches_minimax(&pos.board, Color::White, depth);
    }
}

#[test]
fn alphabeta_equals_minimax_from_start() {
    for depth in 1..=2 {
        assert_matches_minimax(&Board::new(), Color::White, depth);
    }
}

#[test]
fn alphabeta_equals_minimax_for_black() {
    let mut pos = Position::new();
    for m in ["e2e4", "e7e5", "g1f3"] {
        pos.play(m).expect("legal");
    }
    assert_matches_minimax(&pos.board, Color::Black, 2);
}

// ============================================================================
// Mate and terminal handling
// ============================================================================

#[test]
fn finds_back_rank_mate() {
    let pos = position("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let result = search(&pos.board, Color::White, &SearchConfig::depth(2));
    assert_eq!(result.best_move.map(|m| m.to_string()), Some("e1e8".to_string()));
    assert_eq!(result.score, MATE_SCORE - 1);
}

#[test]
fn black_finds_fools_mate() {
    let mut pos = Position::new();
    for m in ["f2f3", "e7e5", "g2g4"] {
        pos.play(m).expect("legal");
    }
    let result = search(&pos.board, Color::Black, &SearchConfig::depth(2));
    assert_eq!(result.best_move.map(|m| m.to_string()), Some("d8h4".to_string()));
    assert_eq!(result.score, -(MATE_SCORE - 1));
}

#[test]
fn proven_mate_stops_deepening() {
    let pos = position("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let result = search(&pos.board, Color::White, &SearchConfig::depth(6));
    assert_eq!(result.depth, 1);
    assert!(result.score >= MATE_THRESHOLD);
}

#[test]
fn no_move_when_stalemated() {
    let pos = position("k7/8/1QK5/8/8/8/8/8 b - - 0 1");
    let result = search(&pos.board, Color::Black, &SearchConfig::depth(3));
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
    assert_eq!(result.depth, 0);
}

#[test]
fn no_move_when_mated() {
    let mut pos = Position::new();
    for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        pos.play(m).expect("legal");
    }
    assert_eq!(get_best_move(&pos.board, Color::White, &SearchConfig::default()), None);
    let (best, score) = minimax(&pos.board, Color::White, 2);
    assert_eq!(best, None);
    assert_eq!(score, -MATE_SCORE);
}

#[test]
fn missing_king_does_not_crash() {
    let pos = position("8/8/8/8/8/8/8/4K3 w - - 0 1");
    let result = search(&pos.board, Color::White, &SearchConfig::depth(2));
    assert!(result.best_move.is_some());
    assert!(result.score >= MATE_THRESHOLD);
}

#[test]
fn insufficient_material_scores_draw() {
    let pos = position("8/8/8/4k3/8/8/8/3NK3 w - - 0 1");
    let result = search(&pos.board, Color::White, &SearchConfig::depth(2));
    assert!(result.best_move.is_some());
    assert_eq!(result.score, 0);
}

// ============================================================================
// Configuration, stats and purity
// ============================================================================

#[test]
fn search_leaves_board_untouched() {
    let board = position("r3k2r/pp3ppp/8/3pP3/8/8/PP3PPP/R3K2R w KQkq d6 0 1").board;
    let before = board.clone();
    let _ = search(&board, Color::White, &SearchConfig::depth(2));
    assert_eq!(board, before);
}

#[test]
fn stats_reflect_configuration() {
    let board = Board::new();
    let with_tt = search(&board, Color::White, &SearchConfig::depth(2));
    assert!(with_tt.stats.nodes > 0);
    assert!(with_tt.stats.tt_stores > 0);
    assert_eq!(with_tt.stats.completed_depth, 2);
    assert_eq!(with_tt.depth, 2);

    let without_tt = search(
        &board,
        Color::White,
        &SearchConfig::depth(2).with_transposition_table(false),
    );
    assert_eq!(without_tt.stats.tt_stores, 0);
    assert_eq!(without_tt.stats.tt_hits, 0);
}

#[test]
fn time_budget_still_completes_first_depth() {
    let config = SearchConfig::depth(64).with_time_limit(1);
    let result = search(&Board::new(), Color::White, &config);
    assert!(result.best_move.is_some());
    assert!(result.depth >= 1);
    assert!(result.depth < 5);
}

#[test]
fn result_move_is_legal() {
    let pos = position("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let best = get_best_move(&pos.board, Color::White, &SearchConfig::depth(2)).expect("move");
    assert!(pos.legal_moves().contains(&best));
}

#[test]
fn wins_hanging_queen() {
    let pos = position("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let best = get_best_move(&pos.board, Color::White, &SearchConfig::depth(2)).expect("move");
    assert_eq!(best.to_string(), "d1d5");
}

#[test]
fn equal_scores_keep_first_ordered_move() {
    // Every reply is a dead draw, so all root moves score the same
    for (fen, color) in [
        ("8/8/8/4k3/8/8/8/4K3 w - - 0 1", Color::White),
        ("8/8/8/4k3/8/8/8/4K3 b - - 0 1", Color::Black),
    ] {
        let pos = position(fen);
        let moves = pos.board.legal_moves(color);
        assert!(moves.len() > 1);
        for depth in 1..=3 {
            let result = search(&pos.board, color, &SearchConfig::depth(depth));
            assert_eq!(result.score, 0);
            assert_eq!(result.best_move, Some(moves[0]), "depth {depth}");
        }
        assert_eq!(minimax(&pos.board, color, 2), (Some(moves[0]), 0));
    }
}
