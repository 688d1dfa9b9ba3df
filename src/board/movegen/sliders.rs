use super::super::{Board, Piece, Square};

impl Board {
    /// Walk each ray up to and including the first occupied square.
    pub(crate) fn sliding_destinations(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(isize, isize)],
        attacks_only: bool,
    ) -> Vec<Square> {
        let mut targets = Vec::with_capacity(14);
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                match self.piece_at(next) {
                    None => targets.push(next),
                    Some(blocker) => {
                        if attacks_only || blocker.color != piece.color {
                            targets.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        targets
    }

    /// First piece met walking from `from` in one direction
    pub(crate) fn first_piece_along(
        &self,
        from: Square,
        (dr, dc): (isize, isize),
    ) -> Option<Piece> {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            if let Some(piece) = self.piece_at(next) {
                return Some(piece);
            }
            current = next;
        }
        None
    }
}
