//! Pseudo-legal move rules.
//!
//! Every piece kind answers one question: which squares can it reach from
//! here? In attack mode the answer is the raw threat footprint (pawn
//! diagonals only, no castling, own pieces not filtered). Otherwise it is
//! the candidate move set, including pushes, en passant and castling.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, Move, MoveList, PieceKind, Square};

impl Board {
    /// Destinations for the piece on `from`; empty if the square is empty.
    #[must_use]
    pub fn pseudo_destinations(&self, from: Square, attacks_only: bool) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(from, piece, attacks_only),
            PieceKind::Knight => self.knight_destinations(from, piece, attacks_only),
            PieceKind::Bishop => {
                self.sliding_destinations(from, piece, &BISHOP_DIRECTIONS, attacks_only)
            }
            PieceKind::Rook => {
                self.sliding_destinations(from, piece, &ROOK_DIRECTIONS, attacks_only)
            }
            PieceKind::Queen => {
                self.sliding_destinations(from, piece, &QUEEN_DIRECTIONS, attacks_only)
            }
            PieceKind::King => self.king_destinations(from, piece, attacks_only),
        }
    }

    /// Candidate moves of the piece on `from`, with their flags filled in.
    pub(crate) fn pseudo_moves_from(&self, from: Square) -> MoveList {
        self.pseudo_destinations(from, false)
            .into_iter()
            .filter_map(|to| self.create_move(from, to))
            .collect()
    }

    /// Candidate moves of every piece of `color`
    pub(crate) fn pseudo_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::with_capacity(48);
        for (from, _) in self.pieces(color) {
            moves.extend(self.pseudo_moves_from(from));
        }
        moves
    }

    fn create_move(&self, from: Square, to: Square) -> Option<Move> {
        let piece = self.piece_at(from)?;
        let mut m = match piece.kind {
            PieceKind::King if from.1.abs_diff(to.1) == 2 => Move::castle(from, to),
            PieceKind::Pawn if from.1 != to.1 && self.is_empty(to) => {
                Move::en_passant(from, to, self.en_passant_victim(from, to, piece)?)
            }
            _ => match self.piece_at(to) {
                Some(victim) => Move::capture(from, to, victim),
                None => Move::quiet(from, to),
            },
        };
        if piece.kind == PieceKind::Pawn && to.0 == piece.color.promotion_row() {
            m.promotion = Some(PieceKind::Queen);
        }
        Some(m)
    }

    /// Attack test by scanning every enemy footprint. Slow; used to
    /// cross-check `is_square_attacked`.
    #[cfg(test)]
    pub(crate) fn is_attacked_by_footprint(&self, square: Square, attacker: Color) -> bool {
        self.pieces(attacker)
            .any(|(from, _)| self.pseudo_destinations(from, true).contains(&square))
    }
}
