use super::{Board, Move, Piece, PieceKind, Square, UnmakeInfo};

/// Rook source and destination squares for a castling move
#[inline]
fn castling_rook_squares(m: &Move) -> (Square, Square) {
    let row = m.to.0;
    if m.is_castle_kingside() {
        (Square(row, 7), Square(row, 5))
    } else {
        (Square(row, 0), Square(row, 3))
    }
}

impl Board {
    /// Apply a move produced by move generation for this exact board.
    ///
    /// The source square must hold a piece; moves not drawn from
    /// `legal_moves` are a caller error.
    pub fn make_move(&mut self, m: &Move) -> UnmakeInfo {
        // Vulnerability lasts exactly one reply
        let previous_en_passant_pawn = self.en_passant_pawn.take();
        if let Some(sq) = previous_en_passant_pawn {
            if let Some(pawn) = self.squares[sq.0][sq.1].as_mut() {
                pawn.en_passant_vulnerable = false;
            }
        }

        let moved = self.squares[m.from.0][m.from.1]
            .take()
            .expect("make_move: source square empty");

        let captured = if m.is_castling {
            None
        } else {
            let capture_sq = if m.is_en_passant {
                Square(m.from.0, m.to.1)
            } else {
                m.to
            };
            self.squares[capture_sq.0][capture_sq.1]
                .take()
                .map(|piece| (capture_sq, piece))
        };

        let mut placed = Piece {
            has_moved: true,
            en_passant_vulnerable: false,
            ..moved
        };
        if m.promotion.is_some() {
            placed.kind = PieceKind::Queen;
        }
        if moved.kind == PieceKind::Pawn && m.from.0.abs_diff(m.to.0) == 2 {
            placed.en_passant_vulnerable = true;
            self.en_passant_pawn = Some(m.to);
        }
        self.squares[m.to.0][m.to.1] = Some(placed);

        let castling_rook = if m.is_castling {
            let (rook_from, rook_to) = castling_rook_squares(m);
            let rook = self.squares[rook_from.0][rook_from.1].take();
            if let Some(r) = rook {
                self.squares[rook_to.0][rook_to.1] = Some(Piece {
                    has_moved: true,
                    ..r
                });
            }
            rook.map(|r| (rook_from, r))
        } else {
            None
        };

        UnmakeInfo {
            moved,
            captured,
            castling_rook,
            previous_en_passant_pawn,
        }
    }

    /// Exactly reverse a `make_move` made with the same move.
    pub fn unmake_move(&mut self, m: &Move, info: UnmakeInfo) {
        self.en_passant_pawn = None;

        self.squares[m.to.0][m.to.1] = None;
        self.squares[m.from.0][m.from.1] = Some(info.moved);

        if let Some((rook_sq, rook)) = info.castling_rook {
            let (_, rook_to) = castling_rook_squares(m);
            self.squares[rook_to.0][rook_to.1] = None;
            self.squares[rook_sq.0][rook_sq.1] = Some(rook);
        }

        if let Some((sq, piece)) = info.captured {
            self.squares[sq.0][sq.1] = Some(piece);
        }

        // Restored last: the bypassed pawn may have just been put back
        if let Some(sq) = info.previous_en_passant_pawn {
            if let Some(pawn) = self.squares[sq.0][sq.1].as_mut() {
                pawn.en_passant_vulnerable = true;
            }
            self.en_passant_pawn = Some(sq);
        }
    }
}
