//! A board paired with the side to move and a simple move counter.

use std::fmt;

use super::error::MoveParseError;
use super::legality::GameStatus;
use super::search::{get_best_move, SearchConfig};
use super::{Board, Color, Move, MoveList, PieceKind, Square};

/// Moves (by either side) after which a game is declared drawn.
///
/// An informal cutoff, not the fifty-move rule.
pub const TURN_LIMIT: u32 = 50;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    /// Moves played since the position was created
    pub turn_count: u32,
}

impl Position {
    /// Standard starting position, White to move
    #[must_use]
    pub fn new() -> Self {
        Position::from_board(Board::new(), Color::White)
    }

    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Position {
            board,
            side_to_move,
            turn_count: 0,
        }
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.side_to_move)
    }

    /// Resolve coordinate notation ("e2e4", "e7e8q") against the legal moves.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let len = notation.chars().count();
        if !(4..=5).contains(&len) {
            return Err(MoveParseError::InvalidLength { len });
        }
        let square = |range: std::ops::Range<usize>| -> Result<Square, MoveParseError> {
            notation
                .get(range)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| MoveParseError::InvalidSquare {
                    notation: notation.to_string(),
                })
        };
        let from = square(0..2)?;
        let to = square(2..4)?;
        if let Some(c) = notation.chars().nth(4) {
            if PieceKind::from_char(c) != Some(PieceKind::Queen) {
                return Err(MoveParseError::InvalidPromotion { char: c });
            }
        }

        self.legal_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse and play a move for the side to move.
    pub fn play(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let m = self.parse_move(notation)?;
        self.make(&m);
        Ok(m)
    }

    /// Play a move taken from `legal_moves`
    pub fn make(&mut self, m: &Move) {
        self.board.make_move(m);
        self.side_to_move = self.side_to_move.opponent();
        self.turn_count += 1;
    }

    #[must_use]
    pub fn is_turn_limit_reached(&self) -> bool {
        self.turn_count >= TURN_LIMIT
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.board.status(self.side_to_move) {
            GameStatus::Ongoing if self.is_turn_limit_reached() => GameStatus::TurnLimit,
            status => status,
        }
    }

    /// Engine choice for the side to move
    #[must_use]
    pub fn best_move(&self, config: &SearchConfig) -> Option<Move> {
        get_best_move(&self.board, self.side_to_move, config)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.side_to_move)
    }
}
