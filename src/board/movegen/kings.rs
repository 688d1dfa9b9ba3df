use super::super::attack_tables::{
    BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS,
};
use super::super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    pub(crate) fn king_destinations(
        &self,
        from: Square,
        king: Piece,
        attacks_only: bool,
    ) -> Vec<Square> {
        let mut targets: Vec<Square> = KING_TARGETS[from.as_index()]
            .iter()
            .copied()
            .filter(|&to| {
                attacks_only || self.piece_at(to).map_or(true, |p| p.color != king.color)
            })
            .collect();

        let home = Square(king.color.back_row(), 4);
        if !attacks_only && !king.has_moved && from == home {
            let row = from.0;
            // Kingside: rook on h-file, f and g empty
            if self.can_castle_through(king.color, row, 7, &[5, 6], &[4, 5, 6]) {
                targets.push(Square(row, 6));
            }
            // Queenside: rook on a-file, b c d empty
            if self.can_castle_through(king.color, row, 0, &[1, 2, 3], &[4, 3, 2]) {
                targets.push(Square(row, 2));
            }
        }

        targets
    }

    fn can_castle_through(
        &self,
        color: Color,
        row: usize,
        rook_col: usize,
        between: &[usize],
        king_path: &[usize],
    ) -> bool {
        let rook_ready = self
            .piece_at(Square(row, rook_col))
            .is_some_and(|r| r.is(color, PieceKind::Rook) && !r.has_moved);
        if !rook_ready {
            return false;
        }
        if between.iter().any(|&col| !self.is_empty(Square(row, col))) {
            return false;
        }
        let enemy = color.opponent();
        king_path
            .iter()
            .all(|&col| !self.is_square_attacked(Square(row, col), enemy))
    }

    /// Find the king of `color` by scanning the board
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Is `square` attacked by any piece of `attacker`?
    ///
    /// Probes outward from the target instead of generating every enemy
    /// footprint; agrees with the attack-mode destination sets.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // An attacking pawn stands one step behind the target on its own march
        let back = -attacker.pawn_direction();
        for dc in [-1, 1] {
            if let Some(sq) = square.offset(back, dc) {
                if self.piece_at(sq).is_some_and(|p| p.is(attacker, PieceKind::Pawn)) {
                    return true;
                }
            }
        }

        let leapers = [
            (&KNIGHT_TARGETS, PieceKind::Knight),
            (&KING_TARGETS, PieceKind::King),
        ];
        for (table, kind) in leapers {
            if table[square.as_index()]
                .iter()
                .any(|&sq| self.piece_at(sq).is_some_and(|p| p.is(attacker, kind)))
            {
                return true;
            }
        }

        let rays = [
            (&ROOK_DIRECTIONS, PieceKind::Rook),
            (&BISHOP_DIRECTIONS, PieceKind::Bishop),
        ];
        for (directions, kind) in rays {
            for &dir in directions {
                if self.first_piece_along(square, dir).is_some_and(|p| {
                    p.color == attacker && (p.kind == kind || p.kind == PieceKind::Queen)
                }) {
                    return true;
                }
            }
        }

        false
    }
}
