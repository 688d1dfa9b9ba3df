//! Mobility from legal move counts.

use crate::board::state::Board;
use crate::board::types::Color;

use super::tables::MOBILITY_WEIGHT;

impl Board {
    /// Weighted legal move counts from White's perspective.
    ///
    /// Runs on a private copy; the board itself is never touched.
    #[must_use]
    pub fn eval_mobility(&self) -> i32 {
        let mut scratch = self.clone();
        Color::BOTH
            .iter()
            .map(|&color| {
                let weighted: i32 = scratch
                    .generate_legal_moves(color)
                    .iter()
                    .filter_map(|m| scratch.piece_at(m.from))
                    .map(|p| MOBILITY_WEIGHT[p.kind.index()])
                    .sum();
                color.sign() * weighted
            })
            .sum()
    }
}
