//! Chess move generation, evaluation and alpha-beta search.
//!
//! - [`board`]: pieces, move rules, legality, evaluation and search
//! - [`engine`]: background search with a completion callback
//! - [`tt`]: transposition table used by the search

pub mod board;
pub mod engine;
mod sync;
pub mod tt;

pub use board::{
    get_best_move, search, Board, Color, GameStatus, Move, Piece, PieceKind, Position,
    SearchConfig, SearchResult, Square,
};
pub use engine::{AsyncEngine, EngineError};
pub use tt::TranspositionTable;
