//! Transposition table for caching search results.
//!
//! Keys are the exact board encoding plus the side to move, so two
//! positions only share an entry when every piece and flag matches.
//! Entries are never aged out; a later store for the same key overwrites.

use std::collections::HashMap;

use crate::board::{BoardKey, Color};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TtKey {
    board: BoardKey,
    side_to_move: Color,
}

impl TtKey {
    #[must_use]
    pub fn new(board: BoardKey, side_to_move: Color) -> Self {
        TtKey {
            board,
            side_to_move,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    /// Remaining depth the score was searched to
    pub depth: u32,
    pub score: i32,
    pub bound_type: BoundType,
}

#[derive(Default, Debug)]
pub struct TranspositionTable {
    entries: HashMap<TtKey, TTEntry>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TranspositionTable {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Entry for `key` searched at least `depth` deep.
    ///
    /// Shallower entries are a miss.
    #[must_use]
    pub fn probe(&self, key: &TtKey, depth: u32) -> Option<TTEntry> {
        self.entries
            .get(key)
            .copied()
            .filter(|entry| entry.depth >= depth)
    }

    pub fn store(&mut self, key: TtKey, depth: u32, score: i32, bound_type: BoundType) {
        self.entries.insert(
            key,
            TTEntry {
                depth,
                score,
                bound_type,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn start_key(side: Color) -> TtKey {
        TtKey::new(Board::new().key(), side)
    }

    #[test]
    fn test_probe_hit() {
        let mut tt = TranspositionTable::new();
        let key = start_key(Color::White);
        tt.store(key, 3, 42, BoundType::Exact);
        let entry = tt.probe(&key, 3).expect("entry stored");
        assert_eq!(entry.score, 42);
        assert_eq!(entry.bound_type, BoundType::Exact);
        assert!(tt.probe(&key, 1).is_some());
    }

    #[test]
    fn test_shallow_entry_is_miss() {
        let mut tt = TranspositionTable::new();
        let key = start_key(Color::Black);
        tt.store(key, 2, 10, BoundType::LowerBound);
        assert!(tt.probe(&key, 3).is_none());
    }

    #[test]
    fn test_side_to_move_separates_entries() {
        let mut tt = TranspositionTable::new();
        tt.store(start_key(Color::White), 1, 5, BoundType::Exact);
        assert!(tt.probe(&start_key(Color::Black), 1).is_none());
    }

    #[test]
    fn test_overwrite_and_clear() {
        let mut tt = TranspositionTable::with_capacity(16);
        let key = start_key(Color::White);
        tt.store(key, 4, 1, BoundType::Exact);
        tt.store(key, 1, 2, BoundType::UpperBound);
        assert_eq!(tt.len(), 1);
        assert!(tt.probe(&key, 2).is_none());
        assert_eq!(tt.probe(&key, 1).map(|e| e.score), Some(2));
        tt.clear();
        assert!(tt.is_empty());
    }
}
