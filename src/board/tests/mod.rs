//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Piece move rules and attack footprints
//! - `legality.rs` - Legal filtering, check, mate and draw detection
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `fen.rs` - FEN parsing and move notation
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Alpha-beta, deepening and the minimax reference
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;
mod proptest;
mod search;

use rand::prelude::*;

use crate::board::Position;

pub(super) fn position(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid fen")
}

/// Play up to `plies` random legal moves from the start position
pub(super) fn random_position(seed: u64, plies: usize) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::new();
    for _ in 0..plies {
        let moves = pos.legal_moves();
        if moves.is_empty() {
            break;
        }
        let m = moves[rng.gen_range(0..moves.len())];
        pos.make(&m);
    }
    pos
}
