use std::fmt;

use super::{Color, Piece, PieceKind, Square};

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// State needed to undo one `make_move`.
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    /// The moving piece exactly as it stood before the move
    pub(crate) moved: Piece,
    /// Captured piece and the square it was removed from
    pub(crate) captured: Option<(Square, Piece)>,
    /// Castling rook as it stood before the move
    pub(crate) castling_rook: Option<(Square, Piece)>,
    pub(crate) previous_en_passant_pawn: Option<Square>,
}

/// Canonical encoding of a board: one byte per square, row-major.
///
/// Empty squares are 0; occupied squares carry kind, color and both
/// piece flags, so equal keys mean identical move generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BoardKey(pub(crate) [u8; 64]);

/// 8x8 mailbox board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    /// Location of the pawn whose `en_passant_vulnerable` flag is set, if any
    pub(crate) en_passant_pawn: Option<Square>,
}

impl Board {
    /// Standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_ROW.iter().enumerate() {
            board.set_piece(Square(7, col), Piece::new(Color::White, *kind));
            board.set_piece(Square(0, col), Piece::new(Color::Black, *kind));
            board.set_piece(Square(6, col), Piece::new(Color::White, PieceKind::Pawn));
            board.set_piece(Square(1, col), Piece::new(Color::Black, PieceKind::Pawn));
        }
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            en_passant_pawn: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Place a piece, replacing whatever stood there.
    ///
    /// Keeps the en passant bookkeeping in sync with the piece's flag.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        if self.en_passant_pawn == Some(sq) {
            self.en_passant_pawn = None;
        }
        if piece.en_passant_vulnerable {
            if let Some(old) = self.en_passant_pawn {
                if let Some(p) = self.squares[old.0][old.1].as_mut() {
                    p.en_passant_vulnerable = false;
                }
            }
            self.en_passant_pawn = Some(sq);
        }
        self.squares[sq.0][sq.1] = Some(piece);
    }

    /// Remove and return the piece on a square
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        if self.en_passant_pawn == Some(sq) {
            self.en_passant_pawn = None;
        }
        self.squares[sq.0][sq.1].take()
    }

    /// Iterate over all pieces of one color
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    /// Iterate over all pieces on the board
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    #[must_use]
    pub fn en_passant_pawn(&self) -> Option<Square> {
        self.en_passant_pawn
    }

    #[must_use]
    pub fn key(&self) -> BoardKey {
        let mut key = [0u8; 64];
        for (sq, piece) in self.occupied() {
            key[sq.as_index()] = piece.encode();
        }
        BoardKey(key)
    }

    /// The same position with colors swapped and rows flipped.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut mirror = Board::empty();
        for (sq, piece) in self.occupied() {
            let swapped = Piece {
                color: piece.color.opponent(),
                ..piece
            };
            mirror.set_piece(sq.flip_vertical(), swapped);
        }
        mirror
    }

    /// Count pieces of one kind and color
    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces(color).filter(|(_, p)| p.kind == kind).count()
    }

    /// Sum of base values of all non-king pieces (both colors)
    #[must_use]
    pub fn total_material(&self) -> i32 {
        self.occupied()
            .filter(|(_, p)| p.kind != PieceKind::King)
            .map(|(_, p)| p.kind.value())
            .sum()
    }

    /// True when neither side can possibly deliver checkmate:
    /// K vs K, K vs K + one minor, K+B vs K+B with bishops on one square color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors: Vec<(Square, Piece)> = Vec::with_capacity(4);
        for (sq, piece) in self.occupied() {
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => {
                    if minors.len() == 2 {
                        return false;
                    }
                    minors.push((sq, piece));
                }
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }

        match minors.as_slice() {
            [] | [_] => true,
            [(sq_a, a), (sq_b, b)] => {
                a.kind == PieceKind::Bishop
                    && b.kind == PieceKind::Bishop
                    && a.color != b.color
                    && sq_a.is_light() == sq_b.is_light()
            }
            _ => false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some(p) => write!(f, "{}", p.to_fen_char())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
