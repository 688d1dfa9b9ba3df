use std::str::FromStr;

use super::error::FenError;
use super::position::Position;
use super::{Board, Color, Piece, PieceKind, Square};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling letters with their color and rook column
const CASTLING_SIDES: [(char, Color, usize); 4] = [
    ('K', Color::White, 7),
    ('Q', Color::White, 0),
    ('k', Color::Black, 7),
    ('q', Color::Black, 0),
];

impl Position {
    /// Parse a position from FEN.
    ///
    /// Only placement and side to move are required. Kings and rooks count
    /// as moved unless a castling letter vouches for them; pawns off their
    /// starting row count as moved; other pieces as unmoved. Move counters
    /// are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts.get(2).copied().unwrap_or("-").chars() {
            if c == '-' {
                continue;
            }
            let &(_, color, rook_col) = CASTLING_SIDES
                .iter()
                .find(|(letter, _, _)| *letter == c)
                .ok_or(FenError::InvalidCastling { char: c })?;
            let row = color.back_row();
            for (col, kind) in [(4, PieceKind::King), (rook_col, PieceKind::Rook)] {
                let sq = Square(row, col);
                if let Some(piece) = board.piece_at(sq).filter(|p| p.is(color, kind)) {
                    board.set_piece(
                        sq,
                        Piece {
                            has_moved: false,
                            ..piece
                        },
                    );
                }
            }
        }

        if let Some(&target) = parts.get(3).filter(|&&t| t != "-") {
            let invalid = || FenError::InvalidEnPassant {
                found: target.to_string(),
            };
            let target_sq: Square = target.parse().map_err(|_| invalid())?;
            // The double-pushed pawn sits one row past the skipped square
            let pawn_sq = match target_sq.0 {
                5 => Square(4, target_sq.1),
                2 => Square(3, target_sq.1),
                _ => return Err(invalid()),
            };
            let pawn = board
                .piece_at(pawn_sq)
                .filter(|p| p.kind == PieceKind::Pawn && p.color != side_to_move)
                .ok_or_else(invalid)?;
            board.set_piece(
                pawn_sq,
                Piece {
                    en_passant_vulnerable: true,
                    ..pawn
                },
            );
        }

        Ok(Position::from_board(board, side_to_move))
    }

    /// Render as FEN. Castling letters come from the unmoved king and
    /// rook flags; counters are written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.board.piece_at(Square(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let castling: String = CASTLING_SIDES
            .iter()
            .filter(|(_, color, rook_col)| self.board.can_still_castle(*color, *rook_col))
            .map(|(letter, _, _)| *letter)
            .collect();
        fen.push_str(if castling.is_empty() { "-" } else { &castling });

        fen.push(' ');
        match self.board.en_passant_pawn() {
            Some(pawn_sq) => {
                let skipped = if pawn_sq.0 == 4 {
                    Square(5, pawn_sq.1)
                } else {
                    Square(2, pawn_sq.1)
                };
                fen.push_str(&skipped.to_string());
            }
            None => fen.push('-'),
        }

        fen.push_str(" 0 1");
        fen
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl Board {
    fn can_still_castle(&self, color: Color, rook_col: usize) -> bool {
        let row = color.back_row();
        let unmoved = |col: usize, kind: PieceKind| {
            self.piece_at(Square(row, col))
                .is_some_and(|p| p.is(color, kind) && !p.has_moved)
        };
        unmoved(4, PieceKind::King) && unmoved(rook_col, PieceKind::Rook)
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::InvalidRowCount { rows: rows.len() });
    }

    let mut board = Board::empty();
    for (row, text) in rows.iter().enumerate() {
        let mut col = 0;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if col >= 8 {
                return Err(FenError::InvalidRowLength { row, cols: col + 1 });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let has_moved = match kind {
                PieceKind::Pawn => row != color.pawn_start_row(),
                PieceKind::King | PieceKind::Rook => true,
                _ => false,
            };
            board.set_piece(
                Square(row, col),
                Piece {
                    has_moved,
                    ..Piece::new(color, kind)
                },
            );
            col += 1;
        }
        if col != 8 {
            return Err(FenError::InvalidRowLength { row, cols: col });
        }
    }
    Ok(board)
}
