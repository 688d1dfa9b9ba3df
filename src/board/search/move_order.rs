use crate::board::{Color, Move, MoveList, PieceKind};

use super::alphabeta::SearchContext;
use super::constants::{
    CAPTURE_SCORE, CHECK_SCORE, KILLER1_SCORE, KILLER2_SCORE, PAWN_ADVANCE_SCORE,
    PROMOTION_SCORE,
};

impl SearchContext<'_> {
    /// Sort moves best-first. The sort is stable, so equal scores keep
    /// generation order.
    pub(crate) fn order_moves(&mut self, moves: &mut MoveList, side: Color, ply: usize) {
        let mut scored: Vec<(i32, Move)> = moves
            .iter()
            .map(|m| (self.score_move(m, side, ply), *m))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        moves.clear();
        moves.extend(scored.into_iter().map(|(_, m)| m));
    }

    fn score_move(&mut self, m: &Move, side: Color, ply: usize) -> i32 {
        let Some(mover) = self.board.piece_at(m.from) else {
            return 0;
        };
        let mut score = 0;

        // MVV-LVA
        if let Some(victim) = m.captured {
            score += CAPTURE_SCORE + 10 * victim.kind.value() - mover.kind.value();
        }
        if m.is_promotion() {
            score += PROMOTION_SCORE;
        }

        if self.tables.killers.primary(ply) == Some(*m) {
            score += KILLER1_SCORE;
        } else if self.tables.killers.secondary(ply) == Some(*m) {
            score += KILLER2_SCORE;
        }
        score += self.tables.history.score(mover.kind, m);

        if mover.kind == PieceKind::Pawn {
            let advanced = m.to.0.abs_diff(side.pawn_start_row()) as i32;
            score += PAWN_ADVANCE_SCORE * advanced;
        }

        let info = self.board.make_move(m);
        let gives_check = self.board.is_in_check(side.opponent());
        self.board.unmake_move(m, info);
        if gives_check {
            score += CHECK_SCORE;
        }

        score
    }
}
