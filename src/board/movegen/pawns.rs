use super::super::{Board, Piece, PieceKind, Square};

impl Board {
    /// Pawn destinations. In attack mode only the two diagonal squares.
    pub(crate) fn pawn_destinations(
        &self,
        from: Square,
        pawn: Piece,
        attacks_only: bool,
    ) -> Vec<Square> {
        let color = pawn.color;
        let dir = color.pawn_direction();
        let mut targets = Vec::with_capacity(4);

        for dc in [-1, 1] {
            let Some(diag) = from.offset(dir, dc) else {
                continue;
            };
            if attacks_only {
                targets.push(diag);
                continue;
            }
            match self.piece_at(diag) {
                Some(victim) if victim.color != color => targets.push(diag),
                Some(_) => {}
                None => {
                    if self.en_passant_victim(from, diag, pawn).is_some() {
                        targets.push(diag);
                    }
                }
            }
        }

        if attacks_only {
            return targets;
        }

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                targets.push(one);
                if from.0 == color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            targets.push(two);
                        }
                    }
                }
            }
        }

        targets
    }

    /// The enemy pawn a diagonal step onto an empty `to` would capture
    /// en passant, if that capture is available.
    pub(crate) fn en_passant_victim(&self, from: Square, to: Square, pawn: Piece) -> Option<Piece> {
        if from.0 != pawn.color.en_passant_row() {
            return None;
        }
        self.piece_at(Square(from.0, to.1)).filter(|victim| {
            victim.color != pawn.color
                && victim.kind == PieceKind::Pawn
                && victim.en_passant_vulnerable
        })
    }
}
