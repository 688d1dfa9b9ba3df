//! Evaluation weights and piece-square tables.
//!
//! Tables are written from White's side with row 0 as rank 8, so they read
//! like a diagram. Black looks them up with the row flipped.

use crate::board::types::PieceKind;

use super::super::eval::GamePhase;

/// Material scaling per phase, in percent, indexed by `PieceKind::index()`
pub const MATERIAL_SCALE: [[i32; 6]; 3] = [
    // Opening
    [100, 100, 100, 100, 100, 100],
    // Middlegame
    [100, 100, 105, 105, 100, 100],
    // Endgame
    [120, 90, 110, 115, 100, 100],
];

#[inline]
#[must_use]
pub fn material_value(kind: PieceKind, phase: GamePhase) -> i32 {
    kind.value() * MATERIAL_SCALE[phase.index()][kind.index()] / 100
}

// Phase thresholds
pub const OPENING_MIN_PIECES: usize = 28;
pub const OPENING_MIN_MATERIAL: i32 = 5800;
pub const ENDGAME_MAX_PIECES: usize = 12;
pub const ENDGAME_MAX_MATERIAL: i32 = 1500;

// Pawn structure
pub const DOUBLED_PAWN: i32 = -15;
pub const ISOLATED_PAWN: i32 = -12;
pub const CONNECTED_PAWN: i32 = 8;
pub const PROTECTED_PAWN: i32 = 10;
/// Passed pawn bonus by rows advanced from the starting row
pub const PASSED_PAWN: [i32; 7] = [10, 15, 25, 40, 65, 100, 100];

// King safety
pub const CASTLED_KING: i32 = 30;
pub const PAWN_SHIELD: i32 = 10;
pub const OPEN_FILE_NEAR_KING: i32 = -15;
pub const NEARBY_ATTACKER: i32 = -8;
pub const NEARBY_ATTACKER_DISTANCE: usize = 2;

/// Per legal move, indexed by `PieceKind::index()`
pub const MOBILITY_WEIGHT: [i32; 6] = [0, 4, 5, 2, 1, 0];

// Center control
pub const CENTER_OCCUPANCY: i32 = 15;
pub const EXTENDED_CENTER_OCCUPANCY: i32 = 5;
pub const CENTER_ATTACK: i32 = 4;
pub const EXTENDED_CENTER_ATTACK: i32 = 2;

#[rustfmt::skip]
pub const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
pub const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
pub const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

#[rustfmt::skip]
pub const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
pub const KING_MIDDLEGAME_TABLE: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

#[rustfmt::skip]
pub const KING_ENDGAME_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10,   0,   0, -10, -20, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -30,   0,   0,   0,   0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

/// Table for a piece kind; the king switches tables in the endgame.
#[must_use]
pub fn piece_square_table(kind: PieceKind, phase: GamePhase) -> &'static [[i32; 8]; 8] {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King if phase == GamePhase::Endgame => &KING_ENDGAME_TABLE,
        PieceKind::King => &KING_MIDDLEGAME_TABLE,
    }
}
