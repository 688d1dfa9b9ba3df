//! King safety: castled placement, pawn shield, open files and nearby
//! enemy pieces. Not scored in the endgame.

use crate::board::state::Board;
use crate::board::types::{Color, PieceKind, Square};

use super::tables::{
    CASTLED_KING, NEARBY_ATTACKER, NEARBY_ATTACKER_DISTANCE, OPEN_FILE_NEAR_KING, PAWN_SHIELD,
};

impl Board {
    /// King safety from White's perspective
    #[must_use]
    pub fn eval_king_safety(&self) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| color.sign() * self.king_safety_for(color))
            .sum()
    }

    fn king_safety_for(&self, color: Color) -> i32 {
        let Some(king) = self.find_king(color) else {
            return 0;
        };
        let mut score = 0;

        if king.0 == color.back_row() && (king.1 <= 2 || king.1 >= 6) {
            score += CASTLED_KING;
        }

        let dir = color.pawn_direction();
        for dc in [-1, 0, 1] {
            if king
                .offset(dir, dc)
                .and_then(|sq| self.piece_at(sq))
                .is_some_and(|p| p.is(color, PieceKind::Pawn))
            {
                score += PAWN_SHIELD;
            }
        }

        for dc in [-1, 0, 1] {
            let Some(file) = king.1.checked_add_signed(dc).filter(|&f| f < 8) else {
                continue;
            };
            let has_own_pawn = (0..8).any(|row| {
                self.piece_at(Square(row, file))
                    .is_some_and(|p| p.is(color, PieceKind::Pawn))
            });
            if !has_own_pawn {
                score += OPEN_FILE_NEAR_KING;
            }
        }

        let attackers = self
            .pieces(color.opponent())
            .filter(|(sq, p)| {
                matches!(
                    p.kind,
                    PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
                ) && sq.distance(king) <= NEARBY_ATTACKER_DISTANCE
            })
            .count() as i32;
        score + NEARBY_ATTACKER * attackers
    }
}
