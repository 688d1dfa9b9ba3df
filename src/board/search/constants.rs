//! Search constants.

use crate::board::MAX_PLY;

// ============================================================================
// SCORES
// ============================================================================

/// Score for delivering mate at the root; mate at ply `p` scores `MATE_SCORE - p`
pub const MATE_SCORE: i32 = 100_000;

/// Scores with absolute value >= this are checkmate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

/// Window sentinel, beyond any reachable score
pub const INFINITY: i32 = 1_000_000;

pub const DRAW_SCORE: i32 = 0;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores are tried first: captures > promotions > killers > history

/// Base for captures; MVV-LVA is added on top
pub const CAPTURE_SCORE: i32 = 1 << 20;

pub const PROMOTION_SCORE: i32 = 1 << 19;

/// First killer move (move that caused a cutoff at the same ply)
pub const KILLER1_SCORE: i32 = 20000;

/// Second killer move (replaced killer)
pub const KILLER2_SCORE: i32 = 10000;

/// History bonus stays below the killer scores
pub const HISTORY_MAX: i32 = 9000;

pub const CHECK_SCORE: i32 = 5000;

/// Per row a pawn has advanced from its starting row
pub const PAWN_ADVANCE_SCORE: i32 = 10;

/// Default depth when no configuration is given
pub const DEFAULT_DEPTH: u32 = 4;
