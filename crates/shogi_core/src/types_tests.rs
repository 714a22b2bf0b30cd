use super::*;

#[test]
fn test_promotion_maps_are_inverse() {
    for kind in PieceKind::ALL {
        if let Some(p) = kind.promoted() {
            assert!(p.is_promoted());
            assert_eq!(p.base(), kind);
        }
        if kind.is_promoted() {
            assert_eq!(kind.base().promoted(), Some(kind));
        }
    }
    assert_eq!(PieceKind::King.promoted(), None);
    assert_eq!(PieceKind::Gold.promoted(), None);
}

#[test]
fn test_droppable_kinds() {
    let droppable: Vec<_> = PieceKind::ALL.into_iter().filter(|k| k.is_droppable()).collect();
    assert_eq!(droppable, PieceKind::HAND.to_vec());
    assert!(!PieceKind::King.is_droppable());
    assert!(!PieceKind::PromotedPawn.is_droppable());
}

#[test]
fn test_square_bounds() {
    assert!(Square::new(0, 0).is_valid());
    assert!(Square::new(8, 8).is_valid());
    assert!(!Square::new(9, 0).is_valid());
    assert!(!Square::INVALID.is_valid());
    assert_eq!(Square::new(8, 8).offset(1, 0), Square::INVALID);
    assert_eq!(Square::INVALID.offset(1, 1), Square::INVALID);
    assert_eq!(Square::all().count(), NUM_SQUARES);
    assert_eq!(Square::from_index(80), Square::new(8, 8));
}

#[test]
fn test_square_identifiers() {
    // Sente's king starts on 5i, Gote's on 5a
    assert_eq!(Square::new(8, 4).to_string(), "5i");
    assert_eq!(Square::new(0, 4).to_string(), "5a");
    assert_eq!(Square::new(6, 2).to_string(), "7g");
    assert_eq!("7g".parse::<Square>(), Ok(Square::new(6, 2)));
    assert_eq!("0a".parse::<Square>(), Err(GameError::InvalidPosition));
    assert_eq!("5j".parse::<Square>(), Err(GameError::InvalidPosition));
}

#[test]
fn test_move_identifiers() {
    let push = Move::normal(Square::new(6, 2), Square::new(5, 2));
    assert_eq!(push.to_string(), "7g7f");

    let promo = Move::promoting(Square::new(7, 1), Square::new(1, 7));
    assert_eq!(promo.to_string(), "8h2b+");

    let drop = Move::drop(PieceKind::Pawn, Square::new(4, 4));
    assert_eq!(drop.to_string(), "P*5e");

    for text in ["7g7f", "8h2b+", "P*5e", "G*1a"] {
        let mv: Move = text.parse().unwrap();
        assert_eq!(mv.to_string(), text);
    }
    assert!("7g7".parse::<Move>().is_err());
    assert!("X*5e".parse::<Move>().is_err());
}

#[test]
fn test_move_well_formed() {
    let sq = Square::new(4, 4);
    assert!(!Move::normal(sq, sq).is_well_formed());
    assert!(!Move::drop(PieceKind::King, sq).is_well_formed());
    assert!(!Move::drop(PieceKind::PromotedPawn, sq).is_well_formed());
    assert!(!Move::normal(Square::INVALID, sq).is_well_formed());
    assert!(Move::drop(PieceKind::Gold, sq).is_well_formed());
}

#[test]
fn test_hand_demotes_and_saturates() {
    let mut hand = Hand::default();
    hand.add(PieceKind::PromotedRook);
    hand.add(PieceKind::Pawn);
    hand.add(PieceKind::PromotedPawn);
    hand.add(PieceKind::King);
    assert_eq!(hand.count(PieceKind::Rook), 1);
    assert_eq!(hand.count(PieceKind::Pawn), 2);
    assert_eq!(hand.total(), 3);

    assert!(hand.remove(PieceKind::Rook));
    assert!(!hand.remove(PieceKind::Rook));
    assert_eq!(hand.count(PieceKind::Rook), 0);
    assert_eq!(hand.iter().collect::<Vec<_>>(), vec![(PieceKind::Pawn, 2)]);
}
