//! Material and piece placement.

use crate::board::eval::GamePhase;
use crate::board::state::Board;
use crate::board::types::Color;

use super::tables::{material_value, piece_square_table};

impl Board {
    /// Phase-scaled material, kings included, from White's perspective.
    ///
    /// Kings cancel out while both stand on the board.
    #[must_use]
    pub fn eval_material(&self, phase: GamePhase) -> i32 {
        self.occupied()
            .map(|(_, p)| p.color.sign() * material_value(p.kind, phase))
            .sum()
    }

    /// Piece-square bonuses from White's perspective
    #[must_use]
    pub fn eval_piece_squares(&self, phase: GamePhase) -> i32 {
        self.occupied()
            .map(|(sq, p)| {
                let table = piece_square_table(p.kind, phase);
                let row = match p.color {
                    Color::White => sq.0,
                    Color::Black => 7 - sq.0,
                };
                p.color.sign() * table[row][sq.1]
            })
            .sum()
    }
}
