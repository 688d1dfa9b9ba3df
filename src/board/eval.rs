//! Static evaluation.
//!
//! Scores are centipawns from White's perspective: positive favors White.
//! Mirroring a board (swap colors, flip rows) negates its score exactly.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::eval_terms::tables::{
    material_value, ENDGAME_MAX_MATERIAL, ENDGAME_MAX_PIECES, OPENING_MIN_MATERIAL,
    OPENING_MIN_PIECES,
};
use super::{Board, PieceKind};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl GamePhase {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            GamePhase::Opening => 0,
            GamePhase::Middlegame => 1,
            GamePhase::Endgame => 2,
        }
    }
}

/// Individual evaluation terms, all from White's perspective.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EvalBreakdown {
    pub phase: GamePhase,
    pub material: i32,
    pub piece_squares: i32,
    pub pawn_structure: i32,
    pub king_safety: i32,
    pub mobility: i32,
    pub center_control: i32,
}

impl EvalBreakdown {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.material
            + self.piece_squares
            + self.pawn_structure
            + self.king_safety
            + self.mobility
            + self.center_control
    }
}

impl fmt::Display for EvalBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "phase          {:?}", self.phase)?;
        writeln!(f, "material       {}", self.material)?;
        writeln!(f, "piece squares  {}", self.piece_squares)?;
        writeln!(f, "pawn structure {}", self.pawn_structure)?;
        writeln!(f, "king safety    {}", self.king_safety)?;
        writeln!(f, "mobility       {}", self.mobility)?;
        writeln!(f, "center control {}", self.center_control)?;
        write!(f, "total          {}", self.total())
    }
}

impl Board {
    /// Classify by piece count and non-pawn, non-king material.
    #[must_use]
    pub fn game_phase(&self) -> GamePhase {
        let pieces = self.occupied().count();
        let non_pawn_material: i32 = self
            .occupied()
            .filter(|(_, p)| !matches!(p.kind, PieceKind::Pawn | PieceKind::King))
            .map(|(_, p)| p.kind.value())
            .sum();

        if pieces <= ENDGAME_MAX_PIECES || non_pawn_material <= ENDGAME_MAX_MATERIAL {
            GamePhase::Endgame
        } else if pieces >= OPENING_MIN_PIECES && non_pawn_material >= OPENING_MIN_MATERIAL {
            GamePhase::Opening
        } else {
            GamePhase::Middlegame
        }
    }

    /// Phase-scaled material of one side, kings excluded
    #[must_use]
    pub fn side_material(&self, color: super::Color, phase: GamePhase) -> i32 {
        self.pieces(color)
            .filter(|(_, p)| p.kind != PieceKind::King)
            .map(|(_, p)| material_value(p.kind, phase))
            .sum()
    }

    #[must_use]
    pub fn eval_breakdown(&self) -> EvalBreakdown {
        let phase = self.game_phase();
        let king_safety = if phase == GamePhase::Endgame {
            0
        } else {
            self.eval_king_safety()
        };
        EvalBreakdown {
            phase,
            material: self.eval_material(phase),
            piece_squares: self.eval_piece_squares(phase),
            pawn_structure: self.eval_pawn_structure(),
            king_safety,
            mobility: self.eval_mobility(),
            center_control: self.eval_center_control(),
        }
    }

    /// Static score, White positive. Never mutates the board.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.eval_breakdown().total()
    }
}
