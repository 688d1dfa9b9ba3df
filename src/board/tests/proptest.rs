//! Property-based tests using proptest.

use proptest::prelude::*;

use super::random_position;
use crate::board::search::{minimax, search, SearchConfig};
use crate::board::{Board, Color, Move, Square, UnmakeInfo};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// make_move followed by unmake_move restores the board exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), plies in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let initial_key = board.key();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut side = Color::White;
        let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

        for _ in 0..plies {
            let moves = board.legal_moves(side);
            if moves.is_empty() {
                break;
            }
            let m = moves[rng.gen_range(0..moves.len())];
            let info = board.make_move(&m);
            history.push((m, info));
            side = side.opponent();
        }

        while let Some((m, info)) = history.pop() {
            board.unmake_move(&m, info);
        }
        prop_assert_eq!(board.key(), initial_key);
        prop_assert_eq!(board, Board::new());
    }

    /// Every legal move can be undone from any reachable position
    #[test]
    fn prop_single_unmake_is_exact(seed in seed_strategy(), plies in move_count_strategy()) {
        let pos = random_position(seed, plies);
        let mut board = pos.board.clone();
        for m in pos.legal_moves() {
            let info = board.make_move(&m);
            board.unmake_move(&m, info);
            prop_assert_eq!(&board, &pos.board);
        }
    }

    /// Legal moves never leave the mover in check
    #[test]
    fn prop_legal_moves_are_safe(seed in seed_strategy(), plies in move_count_strategy()) {
        let pos = random_position(seed, plies);
        for m in pos.legal_moves() {
            let mut board = pos.board.clone();
            board.make_move(&m);
            prop_assert!(!board.is_in_check(pos.side_to_move));
        }
    }

    /// The reverse attack probe agrees with scanning every footprint
    #[test]
    fn prop_attack_probe_matches_footprints(seed in seed_strategy(), plies in move_count_strategy()) {
        let board = random_position(seed, plies).board;
        for sq in Square::all() {
            for color in Color::BOTH {
                prop_assert_eq!(
                    board.is_square_attacked(sq, color),
                    board.is_attacked_by_footprint(sq, color)
                );
            }
        }
    }

    /// Swapping colors and flipping the board negates the score
    #[test]
    fn prop_eval_color_symmetry(seed in seed_strategy(), plies in move_count_strategy()) {
        let board = random_position(seed, plies).board;
        prop_assert_eq!(board.mirrored().evaluate(), -board.evaluate());
    }

    /// Mirroring preserves the legal move count of the mirrored side
    #[test]
    fn prop_mirror_preserves_mobility(seed in seed_strategy(), plies in move_count_strategy()) {
        let board = random_position(seed, plies).board;
        let mirror = board.mirrored();
        for color in Color::BOTH {
            prop_assert_eq!(
                board.legal_moves(color).len(),
                mirror.legal_moves(color.opponent()).len()
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// Pruning, ordering and the table never change the searched value
    #[test]
    fn prop_alphabeta_equals_minimax(seed in seed_strategy(), plies in 0..=30usize) {
        let pos = random_position(seed, plies);
        let color = pos.side_to_move;
        for depth in 1..=2 {
            let (_, expected) = minimax(&pos.board, color, depth);
            let result = search(&pos.board, color, &SearchConfig::depth(depth));
            prop_assert_eq!(result.score, expected);
        }
    }
}
