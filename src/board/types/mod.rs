//! Core chess types.
//!
//! - `Piece`, `PieceKind` and `Color` - pieces with their per-move flags
//! - `Square` - `(row, col)` board coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, MAX_PLY};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
