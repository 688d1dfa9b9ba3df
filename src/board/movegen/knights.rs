use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Piece, Square};

impl Board {
    pub(crate) fn knight_destinations(
        &self,
        from: Square,
        knight: Piece,
        attacks_only: bool,
    ) -> Vec<Square> {
        KNIGHT_TARGETS[from.as_index()]
            .iter()
            .copied()
            .filter(|&to| {
                attacks_only || self.piece_at(to).map_or(true, |p| p.color != knight.color)
            })
            .collect()
    }
}
