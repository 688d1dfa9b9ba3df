//! Pawn structure: doubled, isolated, connected, protected and passed pawns.

use crate::board::state::Board;
use crate::board::types::{Color, PieceKind, Square};

use super::tables::{CONNECTED_PAWN, DOUBLED_PAWN, ISOLATED_PAWN, PASSED_PAWN, PROTECTED_PAWN};

impl Board {
    /// Pawn structure score from White's perspective
    #[must_use]
    pub fn eval_pawn_structure(&self) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| color.sign() * self.pawn_structure_for(color))
            .sum()
    }

    fn pawn_structure_for(&self, color: Color) -> i32 {
        let mut files = [0u8; 8];
        let pawns: Vec<Square> = self
            .pieces(color)
            .filter(|(_, p)| p.kind == PieceKind::Pawn)
            .map(|(sq, _)| sq)
            .collect();
        for sq in &pawns {
            files[sq.1] += 1;
        }

        let own_pawn_at = |sq: Option<Square>| {
            sq.and_then(|s| self.piece_at(s))
                .is_some_and(|p| p.is(color, PieceKind::Pawn))
        };
        let dir = color.pawn_direction();

        let mut score = 0;
        for (file, &count) in files.iter().enumerate() {
            if count > 1 {
                score += DOUBLED_PAWN * i32::from(count - 1);
            }
            if count > 0 {
                let left = file.checked_sub(1).map_or(0, |f| files[f]);
                let right = files.get(file + 1).copied().unwrap_or(0);
                if left == 0 && right == 0 {
                    score += ISOLATED_PAWN * i32::from(count);
                }
            }
        }

        for &sq in &pawns {
            if own_pawn_at(sq.offset(0, 1)) {
                score += CONNECTED_PAWN;
            }
            if own_pawn_at(sq.offset(-dir, -1)) || own_pawn_at(sq.offset(-dir, 1)) {
                score += PROTECTED_PAWN;
            }
            if self.is_passed_pawn(sq, color) {
                let advanced = sq.0.abs_diff(color.pawn_start_row());
                score += PASSED_PAWN[advanced.min(PASSED_PAWN.len() - 1)];
            }
        }
        score
    }

    /// No enemy pawn ahead on the same or an adjacent file
    #[must_use]
    pub fn is_passed_pawn(&self, sq: Square, color: Color) -> bool {
        let dir = color.pawn_direction();
        let mut ahead = sq;
        while let Some(next) = ahead.offset(dir, 0) {
            for dc in [-1, 0, 1] {
                if next
                    .offset(0, dc)
                    .and_then(|s| self.piece_at(s))
                    .is_some_and(|p| p.is(color.opponent(), PieceKind::Pawn))
                {
                    return false;
                }
            }
            ahead = next;
        }
        true
    }
}
