//! Legal move filtering and game-end detection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, MoveList, Square};

/// Outcome of a position from the point of view of the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    /// A king is absent from the board; `winner` still has theirs
    MissingKing { winner: Color },
    /// The caller-tracked move counter ran out
    TurnLimit,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl Board {
    /// Legal moves for `color`, in generation order.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut scratch = self.clone();
        scratch.generate_legal_moves(color)
    }

    /// Legal moves for `color` using this board as the scratch board.
    /// The board is left exactly as it was.
    pub fn generate_legal_moves(&mut self, color: Color) -> MoveList {
        let pseudo = self.pseudo_moves(color);
        let mut legal = MoveList::with_capacity(pseudo.len());
        for m in pseudo {
            let info = self.make_move(&m);
            if !self.is_in_check(color) {
                legal.push(m);
            }
            self.unmake_move(&m, info);
        }
        legal
    }

    /// Legal destinations of the piece on `from` (empty for an empty square)
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut scratch = self.clone();
        let candidates = scratch.pseudo_moves_from(from);
        let mut targets = Vec::with_capacity(candidates.len());
        for m in candidates {
            let info = scratch.make_move(&m);
            if !scratch.is_in_check(piece.color) {
                targets.push(m.to);
            }
            scratch.unmake_move(&m, info);
        }
        targets
    }

    /// Stops at the first legal move found
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        for m in self.pseudo_moves(color) {
            let info = self.make_move(&m);
            let safe = !self.is_in_check(color);
            self.unmake_move(&m, info);
            if safe {
                return true;
            }
        }
        false
    }

    /// False when `color` has no king on the board.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// True if either side is out of legal moves, a king is missing, or
    /// neither side can mate.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        if Color::BOTH.iter().any(|&c| self.find_king(c).is_none()) {
            return true;
        }
        if self.is_insufficient_material() {
            return true;
        }
        let mut scratch = self.clone();
        Color::BOTH.iter().any(|&c| !scratch.has_legal_move(c))
    }

    /// Classify the position for `side_to_move`
    #[must_use]
    pub fn status(&self, side_to_move: Color) -> GameStatus {
        for color in Color::BOTH {
            if self.find_king(color).is_none() {
                return GameStatus::MissingKing {
                    winner: color.opponent(),
                };
            }
        }
        if self.is_insufficient_material() {
            return GameStatus::InsufficientMaterial;
        }
        let mut scratch = self.clone();
        if scratch.has_legal_move(side_to_move) {
            GameStatus::Ongoing
        } else if self.is_in_check(side_to_move) {
            GameStatus::Checkmate {
                winner: side_to_move.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}
