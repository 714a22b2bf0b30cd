use super::*;

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();
    assert_eq!(b.piece_count(Player::Sente), 20);
    assert_eq!(b.piece_count(Player::Gote), 20);
    assert!(b.hand(Player::Sente).is_empty());
    assert!(b.hand(Player::Gote).is_empty());
    assert_eq!(b.side_to_move(), Player::Sente);
    assert_eq!(b.find_king(Player::Sente), Square::new(8, 4));
    assert_eq!(b.find_king(Player::Gote), Square::new(0, 4));
    assert_eq!(
        b.piece_at("8h".parse().unwrap()),
        Some(Piece::new(PieceKind::Bishop, Player::Sente))
    );
    assert_eq!(
        b.piece_at("2b".parse().unwrap()),
        Some(Piece::new(PieceKind::Bishop, Player::Gote))
    );
    assert!(!b.in_check(Player::Sente));
}

#[test]
fn test_invalid_square_access() {
    let mut b = Board::startpos();
    assert_eq!(b.piece_at(Square::INVALID), None);
    assert_eq!(b.piece_at(Square::new(9, 0)), None);
    let before = b.clone();
    b.set_piece(Square::new(0, 9), Some(Piece::new(PieceKind::Gold, Player::Sente)));
    assert_eq!(b, before);
}

#[test]
fn test_missing_king_is_invalid_square() {
    let b = Board::empty();
    assert_eq!(b.find_king(Player::Sente), Square::INVALID);
    assert!(!b.in_check(Player::Sente));
}

#[test]
fn test_apply_flips_side_and_undo_restores() {
    let mut b = Board::startpos();
    let start = b.clone();
    let key = b.position_key();

    b.apply(mv("7g7f")).unwrap();
    assert_eq!(b.side_to_move(), Player::Gote);
    assert_eq!(b.last_move(), Some(mv("7g7f")));
    assert_ne!(b.position_key(), key);

    assert_eq!(b.undo(), Some(mv("7g7f")));
    assert_eq!(b, start);
    assert_eq!(b.position_key(), key);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut b = Board::startpos();
    assert_eq!(b.undo(), None);
    assert_eq!(b, Board::startpos());
}

#[test]
fn test_capture_of_promoted_piece_demotes_in_hand() {
    let mut b = Board::startpos();
    for m in ["7g7f", "3c3d", "8h2b+"] {
        b.apply(mv(m)).unwrap();
    }
    assert_eq!(
        b.piece_at("2b".parse().unwrap()),
        Some(Piece::new(PieceKind::PromotedBishop, Player::Sente))
    );
    assert_eq!(b.hand_count(Player::Sente, PieceKind::Bishop), 1);

    b.apply(mv("3a2b")).unwrap();
    assert_eq!(b.hand_count(Player::Gote, PieceKind::Bishop), 1);
    assert_eq!(b.hand_count(Player::Gote, PieceKind::PromotedBishop), 0);

    b.undo();
    assert_eq!(b.hand_count(Player::Gote, PieceKind::Bishop), 0);
    assert_eq!(
        b.piece_at("2b".parse().unwrap()),
        Some(Piece::new(PieceKind::PromotedBishop, Player::Sente))
    );
}

#[test]
fn test_round_trip_with_drops() {
    let mut b = Board::startpos();
    let start = b.clone();
    let line = ["7g7f", "3c3d", "8h2b+", "3a2b", "B*4e", "B*6e", "4e3d"];
    for m in line {
        b.apply(mv(m)).unwrap();
    }
    assert_eq!(b.history().len(), line.len());
    for _ in line {
        assert!(b.undo().is_some());
    }
    assert_eq!(b, start);
}

#[test]
fn test_apply_structural_errors_leave_board_untouched() {
    let mut b = Board::startpos();
    let before = b.clone();

    assert_eq!(b.apply(mv("5e5d")), Err(GameError::PieceNotFound));
    assert_eq!(b.apply(mv("7c7d")), Err(GameError::WrongPlayer));
    assert_eq!(b.apply(mv("5i4i")), Err(GameError::InvalidMove));
    assert_eq!(b.apply(mv("P*5e")), Err(GameError::InvalidDrop));
    assert_eq!(
        b.apply(Move::normal(Square::INVALID, Square::new(4, 4))),
        Err(GameError::InvalidPosition)
    );
    assert_eq!(b, before);
}

#[test]
fn test_attacked_squares() {
    let b = Board::startpos();
    // Sente pawns guard the rank in front of them
    assert!(b.is_square_attacked(Square::new(5, 0), Player::Sente));
    assert!(!b.is_square_attacked(Square::new(4, 0), Player::Sente));
    assert!(b.is_square_attacked(Square::new(3, 0), Player::Gote));
}

#[test]
fn test_display_diagram() {
    let text = Board::startpos().to_string();
    assert!(text.starts_with("gote hand: -\n"));
    assert!(text.contains(" l  n  s  g  k  g  s  n  l a"));
    assert!(text.contains(" L  N  S  G  K  G  S  N  L i"));
    assert!(text.ends_with("Sente to move"));
}
