//! Chess board representation and game logic.
//!
//! An 8x8 mailbox board where every piece carries its own `has_moved` and
//! `en_passant_vulnerable` flags. The board has no side to move; callers
//! pass the color they are asking about, or use `Position`.
//!
//! # Example
//! ```
//! use chess_ai::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod error;
mod eval;
mod eval_terms;
mod fen;
mod legality;
mod make_unmake;
mod movegen;
mod position;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use eval::{EvalBreakdown, GamePhase};
pub use fen::START_FEN;
pub use legality::GameStatus;
pub use position::{Position, TURN_LIMIT};
pub use state::{Board, BoardKey, UnmakeInfo};
pub use types::{Color, Move, MoveList, Piece, PieceKind, Square, MAX_PLY};

pub use search::{
    get_best_move, minimax, search, SearchConfig, SearchResult, SearchStats, MATE_SCORE,
};
