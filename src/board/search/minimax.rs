//! Reference search without pruning, tables or ordering.
//!
//! Shares terminal scoring with alpha-beta, so both agree on every value.

use crate::board::{Board, Color, Move};

use super::{decided_score, no_moves_score};

/// Best move and score for `color` by exhaustive minimax to `depth` plies.
///
/// Ties keep the first move in generation order. Returns `(None, score)`
/// when `color` has no legal move.
#[must_use]
pub fn minimax(board: &Board, color: Color, depth: u32) -> (Option<Move>, i32) {
    let mut scratch = board.clone();
    let depth = depth.max(1);
    let moves = scratch.generate_legal_moves(color);
    if moves.is_empty() {
        return (None, no_moves_score(&scratch, color, 0));
    }

    let maximizing = color == Color::White;
    let mut best: Option<(Move, i32)> = None;
    for m in moves {
        let info = scratch.make_move(&m);
        let score = minimax_value(&mut scratch, depth - 1, color.opponent(), 1);
        scratch.unmake_move(&m, info);
        let better = best.map_or(true, |(_, b)| {
            if maximizing {
                score > b
            } else {
                score < b
            }
        });
        if better {
            best = Some((m, score));
        }
    }
    match best {
        Some((m, score)) => (Some(m), score),
        None => (None, no_moves_score(&scratch, color, 0)),
    }
}

pub(super) fn minimax_value(board: &mut Board, depth: u32, side: Color, ply: usize) -> i32 {
    if let Some(score) = decided_score(board, side, ply) {
        return score;
    }
    if depth == 0 {
        return if board.has_legal_move(side) {
            board.evaluate()
        } else {
            no_moves_score(board, side, ply)
        };
    }

    let moves = board.generate_legal_moves(side);
    if moves.is_empty() {
        return no_moves_score(board, side, ply);
    }

    let maximizing = side == Color::White;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for m in &moves {
        let info = board.make_move(m);
        let score = minimax_value(board, depth - 1, side.opponent(), ply + 1);
        board.unmake_move(m, info);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
