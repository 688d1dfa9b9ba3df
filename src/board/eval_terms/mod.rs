//! Evaluation terms.
//!
//! Each term scores the board from White's perspective:
//! - Material and piece-square tables
//! - Pawn structure (doubled, isolated, connected, protected, passed)
//! - King safety (castled corner, shield, open files, nearby attackers)
//! - Mobility (weighted legal move counts)
//! - Center control (occupancy and attacks)

mod center;
mod king_safety;
mod material;
mod mobility;
mod pawn_structure;
pub mod tables;
