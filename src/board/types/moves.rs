//! Move type and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// A move together with the flags needed to replay and undo it.
///
/// A move is only meaningful against the board it was generated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Piece removed by this move (the bypassed pawn for en passant)
    pub captured: Option<Piece>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    /// Always `Some(PieceKind::Queen)` for pawn promotions
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
            is_castling: false,
            is_en_passant: false,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square, captured: Piece) -> Self {
        Move {
            captured: Some(captured),
            ..Move::quiet(from, to)
        }
    }

    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square) -> Self {
        Move {
            is_castling: true,
            ..Move::quiet(from, to)
        }
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, captured: Piece) -> Self {
        Move {
            captured: Some(captured),
            is_en_passant: true,
            ..Move::quiet(from, to)
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(&self) -> bool {
        self.is_castling && self.to.1 > self.from.1
    }

    /// Same from/to squares, ignoring flags
    #[inline]
    #[must_use]
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

/// Moves are generated into plain vectors; ordering sorts them in place.
pub type MoveList = Vec<Move>;

/// Maximum search depth in plies
pub const MAX_PLY: usize = 64;
