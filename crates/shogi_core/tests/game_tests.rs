//! End-to-end games through the public rules engine API.

use shogi_core::{
    Board, GameError, GameOutcome, Move, Piece, PieceKind, Player, RulesEngine, Square,
    legal_moves,
};

fn put(b: &mut Board, row: i8, col: i8, kind: PieceKind, owner: Player) {
    b.set_piece(Square::new(row, col), Some(Piece::new(kind, owner)));
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

#[test]
fn test_head_gold_drop_mate_ends_the_game() {
    let mut b = Board::empty();
    put(&mut b, 0, 4, PieceKind::King, Player::Gote);
    put(&mut b, 2, 4, PieceKind::Pawn, Player::Sente);
    put(&mut b, 8, 4, PieceKind::King, Player::Sente);
    b.add_to_hand(Player::Sente, PieceKind::Gold);

    let mut engine = RulesEngine::from_board(b);
    let events = engine.subscribe();

    engine.make_move(mv("G*5b")).unwrap();
    assert!(engine.is_in_check(Player::Gote));
    assert!(engine.is_checkmate(Player::Gote));
    assert!(engine.generate_all_moves(Player::Gote).is_empty());
    assert_eq!(engine.outcome(), GameOutcome::Win(Player::Sente));

    let event = events.try_recv().unwrap();
    assert_eq!(event.mv, mv("G*5b"));
    assert_eq!(event.outcome, GameOutcome::Win(Player::Sente));

    assert_eq!(engine.make_move(mv("5a4a")), Err(GameError::GameOver));
    assert!(events.try_recv().is_err());
}

#[test]
fn test_events_reach_every_subscriber() {
    let mut engine = RulesEngine::new();
    let render = engine.subscribe();
    let log = engine.subscribe();

    engine.make_move(mv("7g7f")).unwrap();
    for rx in [&render, &log] {
        let event = rx.try_recv().unwrap();
        assert_eq!(event.mv, mv("7g7f"));
        assert_eq!(event.mover, Player::Sente);
        assert_eq!(event.board.side_to_move(), Player::Gote);
        assert_eq!(event.outcome, GameOutcome::InProgress);
    }

    // Rejected moves are silent
    assert!(engine.make_move(mv("7f7e")).is_err());
    assert!(render.try_recv().is_err());

    drop(render);
    engine.make_move(mv("3c3d")).unwrap();
    assert_eq!(log.try_recv().unwrap().mover, Player::Gote);
}

#[test]
fn test_reset_keeps_subscribers_and_sends_nothing() {
    let mut engine = RulesEngine::new();
    let rx = engine.subscribe();
    engine.make_move(mv("2g2f")).unwrap();
    let _ = rx.try_recv();

    engine.reset();
    assert!(rx.try_recv().is_err());
    engine.make_move(mv("2g2f")).unwrap();
    assert!(rx.try_recv().is_ok());
}

#[test]
fn test_apply_undo_round_trip_over_long_line() {
    let mut board = Board::startpos();
    let start = board.clone();
    let mut applied = 0;

    for ply in 0..60usize {
        let moves = legal_moves(&board, board.side_to_move());
        if moves.is_empty() {
            break;
        }
        let pick = moves[(ply * 7 + 3) % moves.len()];
        board.apply(pick).unwrap();
        applied += 1;
    }
    assert!(applied > 0);

    for _ in 0..applied {
        assert!(board.undo().is_some());
    }
    assert_eq!(board, start);
    assert_eq!(board.position_key(), start.position_key());
}

#[test]
fn test_every_generated_move_is_accepted() {
    let mut engine = RulesEngine::new();
    for ply in 0..40usize {
        let moves = engine.legal_moves();
        if moves.is_empty() || engine.outcome().is_terminal() {
            break;
        }
        let pick = moves[(ply * 11 + 5) % moves.len()];
        engine
            .make_move(pick)
            .unwrap_or_else(|e| panic!("generated move {pick} rejected: {e}"));
    }
}
