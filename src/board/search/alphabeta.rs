//! Alpha-beta with a transposition table, killers and history.
//!
//! Minimax form: White maximizes, Black minimizes. Values are fail-soft
//! and stored with their bound type, so any cached value is only reused
//! where it proves the same result a full search would.

use crate::board::{Board, Color, Move};
use crate::tt::{BoundType, TtKey};

use super::constants::INFINITY;
use super::{
    decided_score, no_moves_score, score_from_tt, score_to_tt, SearchConfig, SearchStats,
    SearchTables,
};

/// Per-search mutable state: scratch board, tables and counters.
pub(crate) struct SearchContext<'a> {
    pub(crate) board: Board,
    pub(crate) tables: SearchTables,
    pub(crate) stats: SearchStats,
    pub(crate) config: &'a SearchConfig,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(board: Board, config: &'a SearchConfig) -> Self {
        SearchContext {
            board,
            tables: SearchTables::new(),
            stats: SearchStats::default(),
            config,
        }
    }

    /// Search every root move to `depth` and keep the strictly best one.
    ///
    /// Returns `None` when `side` has no legal move.
    pub(crate) fn search_root(&mut self, depth: u32, side: Color) -> Option<(Move, i32)> {
        let mut moves = self.board.generate_legal_moves(side);
        if moves.is_empty() {
            return None;
        }
        self.order_moves(&mut moves, side, 0);

        let maximizing = side == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for m in moves {
            let info = self.board.make_move(&m);
            let score = self.alphabeta(depth - 1, alpha, beta, side.opponent(), 1);
            self.board.unmake_move(&m, info);

            let better = best.map_or(true, |(_, b)| {
                if maximizing {
                    score > b
                } else {
                    score < b
                }
            });
            if better {
                best = Some((m, score));
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }
        best
    }

    pub(crate) fn alphabeta(
        &mut self,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        side: Color,
        ply: usize,
    ) -> i32 {
        self.stats.nodes += 1;

        if let Some(score) = decided_score(&mut self.board, side, ply) {
            return score;
        }

        let key = TtKey::new(self.board.key(), side);
        if self.config.use_transposition_table {
            if let Some(entry) = self.tables.tt.probe(&key, depth) {
                let score = score_from_tt(entry.score, ply);
                let usable = match entry.bound_type {
                    BoundType::Exact => true,
                    BoundType::LowerBound => score >= beta,
                    BoundType::UpperBound => score <= alpha,
                };
                if usable {
                    self.stats.tt_hits += 1;
                    return score;
                }
            }
        }

        if depth == 0 {
            let score = if self.board.has_legal_move(side) {
                self.board.evaluate()
            } else {
                no_moves_score(&self.board, side, ply)
            };
            self.store(key, 0, score, BoundType::Exact, ply);
            return score;
        }

        let mut moves = self.board.generate_legal_moves(side);
        if moves.is_empty() {
            let score = no_moves_score(&self.board, side, ply);
            self.store(key, depth, score, BoundType::Exact, ply);
            return score;
        }
        self.order_moves(&mut moves, side, ply);

        let (alpha_orig, beta_orig) = (alpha, beta);
        let maximizing = side == Color::White;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for m in &moves {
            let info = self.board.make_move(m);
            let score = self.alphabeta(depth - 1, alpha, beta, side.opponent(), ply + 1);
            self.board.unmake_move(m, info);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.record_cutoff(m, depth, ply);
                break;
            }
        }

        let bound = if best <= alpha_orig {
            BoundType::UpperBound
        } else if best >= beta_orig {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.store(key, depth, best, bound, ply);
        best
    }

    fn store(&mut self, key: TtKey, depth: u32, score: i32, bound: BoundType, ply: usize) {
        if self.config.use_transposition_table {
            self.tables
                .tt
                .store(key, depth, score_to_tt(score, ply), bound);
            self.stats.tt_stores += 1;
        }
    }

    fn record_cutoff(&mut self, m: &Move, depth: u32, ply: usize) {
        self.stats.cutoffs += 1;
        self.tables.killers.update(ply, *m);
        if let Some(piece) = self.board.piece_at(m.from) {
            self.tables.history.update(piece.kind, m, depth);
        }
    }
}
