//! Move rule tests.

use super::position;
use crate::board::{Board, Color, Piece, PieceKind, Square};

fn lone(kind: PieceKind, sq: Square) -> Board {
    let mut board = Board::empty();
    board.set_piece(sq, Piece::new(Color::White, kind));
    board
}

#[test]
fn startpos_has_twenty_moves_each() {
    let board = Board::new();
    assert_eq!(board.legal_moves(Color::White).len(), 20);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}

#[test]
fn knight_center_and_corner() {
    let d4 = Square(4, 3);
    assert_eq!(lone(PieceKind::Knight, d4).pseudo_destinations(d4, false).len(), 8);
    let a1 = Square(7, 0);
    let corner = lone(PieceKind::Knight, a1).pseudo_destinations(a1, false);
    assert_eq!(corner.len(), 2);
    assert!(corner.contains(&Square(5, 1)));
    assert!(corner.contains(&Square(6, 2)));
}

#[test]
fn sliders_on_open_board() {
    let d4 = Square(4, 3);
    assert_eq!(lone(PieceKind::Rook, d4).pseudo_destinations(d4, false).len(), 14);
    assert_eq!(lone(PieceKind::Bishop, d4).pseudo_destinations(d4, false).len(), 13);
    assert_eq!(lone(PieceKind::Queen, d4).pseudo_destinations(d4, false).len(), 27);
}

#[test]
fn empty_square_has_no_destinations() {
    assert!(Board::new().pseudo_destinations(Square(4, 4), false).is_empty());
    assert!(Board::new().pseudo_destinations(Square(4, 4), true).is_empty());
}

#[test]
fn pawn_attack_mode_is_diagonals_only() {
    let board = Board::new();
    let e2 = Square(6, 4);
    let mut attacks = board.pseudo_destinations(e2, true);
    attacks.sort();
    assert_eq!(attacks, vec![Square(5, 3), Square(5, 5)]);

    let mut pushes = board.pseudo_destinations(e2, false);
    pushes.sort();
    assert_eq!(pushes, vec![Square(4, 4), Square(5, 4)]);
}

#[test]
fn edge_pawn_has_one_diagonal() {
    let board = Board::new();
    assert_eq!(board.pseudo_destinations(Square(6, 0), true), vec![Square(5, 1)]);
}

#[test]
fn attack_mode_keeps_own_pieces() {
    let board = Board::new();
    let a1 = Square(7, 0);
    let mut attacks = board.pseudo_destinations(a1, true);
    attacks.sort();
    assert_eq!(attacks, vec![Square(6, 0), Square(7, 1)]);
    assert!(board.pseudo_destinations(a1, false).is_empty());
}

#[test]
fn castling_only_in_move_mode() {
    let pos = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let e1 = Square(7, 4);
    let moves = pos.board.pseudo_destinations(e1, false);
    assert!(moves.contains(&Square(7, 6)));
    assert!(moves.contains(&Square(7, 2)));

    let attacks = pos.board.pseudo_destinations(e1, true);
    assert!(!attacks.contains(&Square(7, 6)));
    assert!(!attacks.contains(&Square(7, 2)));
}

#[test]
fn castling_blocked_through_attacked_square() {
    // Black rook on f2 covers f1
    let pos = position("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1");
    let targets = pos.board.legal_destinations(Square(7, 4));
    assert!(!targets.contains(&Square(7, 6)));
    assert!(targets.contains(&Square(7, 2)));
}

#[test]
fn castling_blocked_while_in_check() {
    let pos = position("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1");
    let targets = pos.board.legal_destinations(Square(7, 4));
    assert!(!targets.contains(&Square(7, 6)));
    assert!(!targets.contains(&Square(7, 2)));
}

#[test]
fn castling_needs_unmoved_pieces() {
    let pos = position("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1");
    let targets = pos.board.legal_destinations(Square(7, 4));
    assert!(!targets.contains(&Square(7, 6)));
    assert!(targets.contains(&Square(7, 2)));
}

#[test]
fn castling_needs_empty_path() {
    let pos = position("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
    let targets = pos.board.legal_destinations(Square(7, 4));
    assert!(!targets.contains(&Square(7, 6)));
    assert!(!targets.contains(&Square(7, 2)));
}

#[test]
fn en_passant_available_only_immediately() {
    let mut pos = position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let ep = pos
        .legal_moves()
        .into_iter()
        .find(|m| m.from == Square(3, 4) && m.to == Square(2, 3))
        .expect("en passant capture");
    assert!(ep.is_en_passant);
    assert_eq!(ep.captured.map(|p| p.kind), Some(PieceKind::Pawn));

    pos.play("e1d1").expect("legal");
    pos.play("e8d8").expect("legal");
    assert!(pos.parse_move("e5d6").is_err());
}

#[test]
fn en_passant_after_double_push() {
    let mut pos = crate::board::Position::new();
    for m in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        pos.play(m).expect("legal");
    }
    let capture = pos.play("e5d6").expect("en passant");
    assert!(capture.is_en_passant);
    assert!(pos.board.is_empty(Square(3, 3)));
}

#[test]
fn promotion_is_always_queen() {
    let mut pos = position("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let m = pos.play("e7e8").expect("promotion");
    assert_eq!(m.promotion, Some(PieceKind::Queen));
    assert_eq!(
        pos.board.piece_at(Square(0, 4)).map(|p| p.kind),
        Some(PieceKind::Queen)
    );
}

#[test]
fn pawn_blocked_cannot_push() {
    let pos = position("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1");
    assert!(pos.board.pseudo_destinations(Square(6, 4), false).is_empty());
}

#[test]
fn attack_probe_matches_footprints_at_start() {
    let board = Board::new();
    for sq in Square::all() {
        for color in Color::BOTH {
            assert_eq!(
                board.is_square_attacked(sq, color),
                board.is_attacked_by_footprint(sq, color),
                "{sq} by {color}"
            );
        }
    }
}

#[test]
fn squares_order_by_row_then_col() {
    let mut squares = vec![Square(5, 5), Square(4, 4), Square(5, 3), Square(0, 7)];
    squares.sort();
    assert_eq!(squares, vec![Square(0, 7), Square(4, 4), Square(5, 3), Square(5, 5)]);
}
