//! Adversarial search.
//!
//! Features:
//! - Alpha-beta in minimax form (White maximizes, Black minimizes)
//! - Iterative deepening with a between-iterations time budget
//! - Transposition table keyed by exact board encoding and side to move
//! - Move ordering (MVV-LVA, promotions, killers, history, checks)
//! - Exhaustive minimax reference with identical terminal scoring

mod alphabeta;
mod constants;
mod iterative;
mod log;
mod minimax;
mod move_order;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tt::TranspositionTable;

use super::{Board, Color, Move, PieceKind, MAX_PLY};
use alphabeta::SearchContext;
use constants::{DEFAULT_DEPTH, DRAW_SCORE, HISTORY_MAX};

pub use constants::{MATE_SCORE, MATE_THRESHOLD};
pub use log::IterationInfo;
pub use minimax::minimax;

/// Configuration for a search operation.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Deepest iteration to search, in plies
    pub max_depth: u32,
    /// Soft time budget in milliseconds (0 = unlimited)
    pub time_limit_ms: u64,
    pub iterative_deepening: bool,
    pub use_transposition_table: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_DEPTH,
            time_limit_ms: 0,
            iterative_deepening: true,
            use_transposition_table: true,
        }
    }
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    #[must_use]
    pub fn with_iterative_deepening(mut self, enabled: bool) -> Self {
        self.iterative_deepening = enabled;
        self
    }

    #[must_use]
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.use_transposition_table = enabled;
        self
    }
}

/// Statistics tracked during search
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_hits: u64,
    pub tt_stores: u64,
    pub cutoffs: u64,
    pub completed_depth: u32,
    pub elapsed_ms: u64,
}

/// Outcome of a search
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Value of `best_move` from White's perspective
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u32,
    pub stats: SearchStats,
}

/// Two most recent cutoff moves per ply.
pub struct KillerTable {
    slots: [[Option<Move>; 2]; MAX_PLY],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[None; 2]; MAX_PLY],
        }
    }

    #[must_use]
    pub fn primary(&self, ply: usize) -> Option<Move> {
        self.slots.get(ply).and_then(|row| row[0])
    }

    #[must_use]
    pub fn secondary(&self, ply: usize) -> Option<Move> {
        self.slots.get(ply).and_then(|row| row[1])
    }

    pub fn update(&mut self, ply: usize, mv: Move) {
        let Some(row) = self.slots.get_mut(ply) else {
            return;
        };
        if row[0] != Some(mv) {
            row[1] = row[0];
            row[0] = Some(mv);
        }
    }

    pub fn reset(&mut self) {
        self.slots = [[None; 2]; MAX_PLY];
    }
}

/// Cutoff counts keyed by moving piece kind and from/to squares.
pub struct HistoryTable {
    entries: Vec<i32>,
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    const SIZE: usize = 6 * 64 * 64;

    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            entries: vec![0; Self::SIZE],
        }
    }

    #[inline]
    fn index(kind: PieceKind, mv: &Move) -> usize {
        (kind.index() * 64 + mv.from.as_index()) * 64 + mv.to.as_index()
    }

    /// Ordering bonus, capped below the killer scores
    #[must_use]
    pub fn score(&self, kind: PieceKind, mv: &Move) -> i32 {
        self.entries[Self::index(kind, mv)].min(HISTORY_MAX)
    }

    /// Reward a move that caused a cutoff at `depth`
    pub fn update(&mut self, kind: PieceKind, mv: &Move, depth: u32) {
        let entry = &mut self.entries[Self::index(kind, mv)];
        *entry = entry.saturating_add((depth * depth) as i32);
    }

    pub fn reset(&mut self) {
        self.entries.fill(0);
    }
}

/// Tables owned by one top-level search call.
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub killers: KillerTable,
    pub history: HistoryTable,
}

impl Default for SearchTables {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTables {
    #[must_use]
    pub fn new() -> Self {
        SearchTables {
            tt: TranspositionTable::new(),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        }
    }

    pub fn reset(&mut self) {
        self.tt.clear();
        self.killers.reset();
        self.history.reset();
    }
}

/// Score for `loser` being mated `ply` plies from the root
#[inline]
pub(crate) fn mate_score(loser: Color, ply: usize) -> i32 {
    let score = MATE_SCORE - ply as i32;
    match loser {
        Color::White => -score,
        Color::Black => score,
    }
}

/// Positions that end the game before `side` moves: a missing king
/// loses, insufficient material draws, and an opponent without a legal
/// move is scored as mated or stalemated.
///
/// `side` running out of moves is left to the caller, which needs the
/// move list anyway.
pub(crate) fn decided_score(board: &mut Board, side: Color, ply: usize) -> Option<i32> {
    if board.find_king(Color::White).is_none() {
        return Some(mate_score(Color::White, ply));
    }
    if board.find_king(Color::Black).is_none() {
        return Some(mate_score(Color::Black, ply));
    }
    if board.is_insufficient_material() {
        return Some(DRAW_SCORE);
    }
    let opponent = side.opponent();
    (!board.has_legal_move(opponent)).then(|| no_moves_score(board, opponent, ply))
}

/// `side` has no legal move: mated if in check, otherwise stalemate.
pub(crate) fn no_moves_score(board: &Board, side: Color, ply: usize) -> i32 {
    if board.is_in_check(side) {
        mate_score(side, ply)
    } else {
        DRAW_SCORE
    }
}

/// Make a mate score relative to the node at `ply` before caching
#[inline]
pub(crate) fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply as i32
    } else if score <= -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

/// Re-base a cached mate score onto the probing node's ply
#[inline]
pub(crate) fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply as i32
    } else if score <= -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

/// Search `board` for `color` with fresh tables.
///
/// The caller's board is never mutated; the search works on a copy.
#[must_use]
pub fn search(board: &Board, color: Color, config: &SearchConfig) -> SearchResult {
    let mut ctx = SearchContext::new(board.clone(), config);
    let result = ctx.iterative_deepening(color);
    match result.best_move {
        Some(m) => ::log::info!(
            "best {m} score {} depth {} nodes {} in {}ms",
            result.score,
            result.depth,
            result.stats.nodes,
            result.stats.elapsed_ms
        ),
        None => ::log::info!("no legal move for {color}"),
    }
    result
}

/// Best move for `color`, or `None` when it has no legal move
#[must_use]
pub fn get_best_move(board: &Board, color: Color, config: &SearchConfig) -> Option<Move> {
    search(board, color, config).best_move
}

/// True for scores that encode a forced mate
#[inline]
#[must_use]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::constants::INFINITY;
    use super::*;
    use crate::board::{Position, Square};

    #[test]
    fn test_killer_update_shifts() {
        let mut killers = KillerTable::new();
        let a = Move::quiet(Square(6, 4), Square(4, 4));
        let b = Move::quiet(Square(6, 3), Square(4, 3));
        killers.update(2, a);
        killers.update(2, a);
        assert_eq!(killers.primary(2), Some(a));
        assert_eq!(killers.secondary(2), None);
        killers.update(2, b);
        assert_eq!(killers.primary(2), Some(b));
        assert_eq!(killers.secondary(2), Some(a));
        killers.update(MAX_PLY + 3, a);
        assert_eq!(killers.primary(MAX_PLY + 3), None);
    }

    #[test]
    fn test_history_accumulates_and_caps() {
        let mut history = HistoryTable::new();
        let m = Move::quiet(Square(7, 6), Square(5, 5));
        history.update(PieceKind::Knight, &m, 3);
        assert_eq!(history.score(PieceKind::Knight, &m), 9);
        assert_eq!(history.score(PieceKind::Bishop, &m), 0);
        for _ in 0..100 {
            history.update(PieceKind::Knight, &m, 20);
        }
        assert_eq!(history.score(PieceKind::Knight, &m), HISTORY_MAX);
        history.reset();
        assert_eq!(history.score(PieceKind::Knight, &m), 0);
    }

    #[test]
    fn test_mate_score_rebasing() {
        let at_root = MATE_SCORE - 5;
        let stored = score_to_tt(at_root, 3);
        assert_eq!(stored, MATE_SCORE - 2);
        assert_eq!(score_from_tt(stored, 1), MATE_SCORE - 3);
        assert_eq!(score_from_tt(score_to_tt(-at_root, 3), 3), -at_root);
        assert_eq!(score_to_tt(150, 7), 150);
    }

    #[test]
    fn test_stalemated_opponent_ends_search() {
        // White to reply has no legal move and is not in check
        let mut board = Position::from_fen("8/8/8/8/8/5k2/5p2/5K2 b - - 0 1")
            .expect("valid fen")
            .board;
        assert!(board.is_game_over());
        assert_ne!(board.evaluate(), DRAW_SCORE);
        assert_eq!(decided_score(&mut board, Color::Black, 1), Some(DRAW_SCORE));

        let config = SearchConfig::depth(2).with_transposition_table(false);
        let mut ctx = SearchContext::new(board.clone(), &config);
        assert_eq!(ctx.alphabeta(2, -INFINITY, INFINITY, Color::Black, 1), DRAW_SCORE);
        assert_eq!(ctx.stats.nodes, 1);
        assert_eq!(
            minimax::minimax_value(&mut board, 2, Color::Black, 1),
            DRAW_SCORE
        );
    }

    #[test]
    fn test_opponent_with_moves_is_not_decided() {
        let mut board = Board::new();
        assert_eq!(decided_score(&mut board, Color::White, 0), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_config_builders() {
        let config = SearchConfig::depth(6)
            .with_time_limit(250)
            .with_iterative_deepening(false)
            .with_transposition_table(false);
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.time_limit_ms, 250);
        assert!(!config.iterative_deepening);
        assert!(!config.use_transposition_table);
        assert_eq!(SearchConfig::default().max_depth, 4);
    }
}
