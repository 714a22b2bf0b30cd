use super::*;
use crate::board::Board;
use crate::types::{Move, Square};

#[test]
fn test_zobrist_keys_unique() {
    let mut seen = std::collections::HashSet::new();

    for owner in 0..2 {
        for kind in 0..14 {
            for sq in 0..NUM_SQUARES {
                assert!(
                    seen.insert(ZOBRIST.pieces[owner][kind][sq]),
                    "Duplicate piece key found"
                );
            }
        }
        for kind in 0..7 {
            for count in 0..HAND_SLOTS {
                assert!(
                    seen.insert(ZOBRIST.hands[owner][kind][count]),
                    "Duplicate hand key found"
                );
            }
        }
    }
    assert!(
        seen.insert(ZOBRIST.side_to_move),
        "Side to move key collision"
    );
}

#[test]
fn test_key_depends_on_side_to_move() {
    let mut a = Board::startpos();
    let b = Board::startpos();
    assert_eq!(a.position_key(), b.position_key());

    a.set_side_to_move(Player::Gote);
    assert_ne!(a.position_key(), b.position_key());
}

#[test]
fn test_key_depends_on_hand_counts() {
    let mut a = Board::empty();
    let mut b = Board::empty();
    a.set_hand_count(Player::Sente, PieceKind::Pawn, 1);
    b.set_hand_count(Player::Sente, PieceKind::Pawn, 2);
    assert_ne!(a.position_key(), b.position_key());

    b.set_hand_count(Player::Sente, PieceKind::Pawn, 1);
    assert_eq!(a.position_key(), b.position_key());

    b.set_hand_count(Player::Sente, PieceKind::Pawn, 0);
    b.set_hand_count(Player::Gote, PieceKind::Pawn, 1);
    assert_ne!(a.position_key(), b.position_key());
}

#[test]
fn test_transposed_move_orders_share_a_key() {
    let play = |moves: &[&str]| {
        let mut b = Board::startpos();
        for text in moves {
            b.apply(text.parse::<Move>().unwrap()).unwrap();
        }
        b
    };

    let a = play(&["7g7f", "3c3d", "2g2f", "4c4d"]);
    let b = play(&["2g2f", "4c4d", "7g7f", "3c3d"]);
    assert_ne!(a.history(), b.history());
    assert_eq!(a.position_key(), b.position_key());

    let c = play(&["7g7f", "3c3d", "2g2f"]);
    assert_ne!(a.position_key(), c.position_key());
}

#[test]
fn test_piece_key_off_board_is_zero() {
    let pc = Piece::new(PieceKind::Pawn, Player::Sente);
    assert_eq!(ZOBRIST.piece_key(pc, Square::INVALID), 0);
    assert_ne!(ZOBRIST.piece_key(pc, Square::new(0, 0)), 0);
}
