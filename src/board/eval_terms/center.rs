//! Center control: occupying and attacking the middle of the board.

use crate::board::state::Board;
use crate::board::types::{PieceKind, Square};

use super::tables::{
    CENTER_ATTACK, CENTER_OCCUPANCY, EXTENDED_CENTER_ATTACK, EXTENDED_CENTER_OCCUPANCY,
};

/// d4 e4 d5 e5
#[inline]
fn is_center(sq: Square) -> bool {
    (3..=4).contains(&sq.0) && (3..=4).contains(&sq.1)
}

/// The ring of 12 squares around the center
#[inline]
fn is_extended_center(sq: Square) -> bool {
    (2..=5).contains(&sq.0) && (2..=5).contains(&sq.1) && !is_center(sq)
}

impl Board {
    /// Center occupancy and attack footprint from White's perspective.
    /// Kings are ignored.
    #[must_use]
    pub fn eval_center_control(&self) -> i32 {
        let mut score = 0;
        for (from, piece) in self.occupied() {
            if piece.kind == PieceKind::King {
                continue;
            }
            let mut term = 0;
            if is_center(from) {
                term += CENTER_OCCUPANCY;
            } else if is_extended_center(from) {
                term += EXTENDED_CENTER_OCCUPANCY;
            }
            for target in self.pseudo_destinations(from, true) {
                if is_center(target) {
                    term += CENTER_ATTACK;
                } else if is_extended_center(target) {
                    term += EXTENDED_CENTER_ATTACK;
                }
            }
            score += piece.color.sign() * term;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_square_counts() {
        assert_eq!(Square::all().filter(|&sq| is_center(sq)).count(), 4);
        assert_eq!(Square::all().filter(|&sq| is_extended_center(sq)).count(), 12);
    }
}
