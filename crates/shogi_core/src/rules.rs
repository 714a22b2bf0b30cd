//! Full shogi legality on top of the per-kind movement rules: promotion
//! policy, drops (with the two-pawn and pawn-drop-mate restrictions), king
//! safety and the game outcome.
//!
//! The free functions take the player explicitly so the same code answers
//! "what could Gote do here" while Sente is to move. Functions that take a
//! `&mut Board` play candidate moves on it and always restore it.

use tracing::debug;

use crate::board::Board;
use crate::error::GameError;
use crate::events::{EventBus, MoveEvent};
use crate::movegen;
use crate::types::*;

/// Checks a normal move for `player` against the movement rule and the
/// promotion policy. King safety is not considered.
pub fn validate_normal(board: &Board, mv: Move, player: Player) -> Result<(), GameError> {
    let Move::Normal { from, to, promote } = mv else {
        return Err(GameError::InvalidMove);
    };
    if !from.is_valid() || !to.is_valid() {
        return Err(GameError::InvalidPosition);
    }
    let piece = board.piece_at(from).ok_or(GameError::PieceNotFound)?;
    if piece.owner != player {
        return Err(GameError::WrongPlayer);
    }
    if !movegen::can_reach(board, piece, from, to) {
        return Err(GameError::InvalidMove);
    }
    if promote && !movegen::can_promote(piece.kind, from, to, player) {
        return Err(GameError::InvalidMove);
    }
    if !promote && movegen::must_promote(piece.kind, to, player) {
        return Err(GameError::InvalidMove);
    }
    Ok(())
}

/// Checks a drop for `player`, including the two-pawn and pawn-drop-mate
/// restrictions. King safety of the dropper is not considered.
pub fn validate_drop(board: &Board, mv: Move, player: Player) -> Result<(), GameError> {
    let Move::Drop { to, kind } = mv else {
        return Err(GameError::InvalidDrop);
    };
    if !to.is_valid() {
        return Err(GameError::InvalidPosition);
    }
    check_drop_placement(board, to, kind, player)?;
    if kind == PieceKind::Pawn && pawn_drop_mates(board, to, player) {
        return Err(GameError::DropMateRule);
    }
    Ok(())
}

/// Every drop restriction except pawn-drop-mate.
fn check_drop_placement(
    board: &Board,
    to: Square,
    kind: PieceKind,
    player: Player,
) -> Result<(), GameError> {
    if !kind.is_droppable()
        || board.piece_at(to).is_some()
        || board.hand_count(player, kind) == 0
        || movegen::is_dead_end(kind, to, player)
    {
        return Err(GameError::InvalidDrop);
    }
    if kind == PieceKind::Pawn && has_unpromoted_pawn_on_file(board, to.col, player) {
        return Err(GameError::TwoPawnRule);
    }
    Ok(())
}

pub fn has_unpromoted_pawn_on_file(board: &Board, col: i8, player: Player) -> bool {
    (0..BOARD_SIZE).any(|row| {
        board.piece_at(Square::new(row, col)) == Some(Piece::new(PieceKind::Pawn, player))
    })
}

/// True if dropping a pawn on `to` checkmates `player`'s opponent.
///
/// A dropped pawn only gives check from the square directly in front of the
/// enemy king, so every other square is rejected without simulating.
pub fn pawn_drop_mates(board: &Board, to: Square, player: Player) -> bool {
    let enemy = player.other();
    let ksq = board.find_king(enemy);
    if !ksq.is_valid() || to.offset(player.forward(), 0) != ksq {
        return false;
    }

    let mut scratch = board.clone();
    scratch.set_side_to_move(player);
    if scratch.apply(Move::drop(PieceKind::Pawn, to)).is_err() {
        return false;
    }
    scratch.in_check(enemy) && !has_legal_move(&mut scratch, enemy)
}

/// Plays `mv` for `player` and reports whether `player`'s king is attacked
/// afterwards. The board is restored before returning. A move the board
/// refuses to apply counts as leaving the king in check.
pub fn leaves_in_check(board: &mut Board, mv: Move, player: Player) -> bool {
    let saved = board.side_to_move();
    board.set_side_to_move(player);
    let exposed = match board.apply(mv) {
        Ok(()) => {
            let exposed = board.in_check(player);
            board.undo();
            exposed
        }
        Err(_) => true,
    };
    board.set_side_to_move(saved);
    exposed
}

/// Movement-rule moves for `player`, before king safety and the
/// pawn-drop-mate check: normal moves (unpromoted form first, then the
/// promoting form when eligible) followed by drops in hand order.
fn pseudo_moves(board: &Board, player: Player, out: &mut Vec<Move>) {
    let mut dests = Vec::with_capacity(32);
    for (from, pc) in board.pieces() {
        if pc.owner != player {
            continue;
        }
        movegen::destinations_into(board, pc.kind, from, player, &mut dests);
        for &to in &dests {
            if !movegen::must_promote(pc.kind, to, player) {
                out.push(Move::normal(from, to));
            }
            if movegen::can_promote(pc.kind, from, to, player) {
                out.push(Move::promoting(from, to));
            }
        }
    }

    for kind in PieceKind::HAND {
        if board.hand_count(player, kind) == 0 {
            continue;
        }
        for to in Square::all() {
            if check_drop_placement(board, to, kind, player).is_ok() {
                out.push(Move::drop(kind, to));
            }
        }
    }
}

#[inline]
fn is_legal_candidate(board: &mut Board, mv: Move, player: Player) -> bool {
    if leaves_in_check(board, mv, player) {
        return false;
    }
    match mv {
        Move::Drop {
            to,
            kind: PieceKind::Pawn,
        } => !pawn_drop_mates(board, to, player),
        _ => true,
    }
}

/// All legal moves of `player`, whoever is to move. Clones the board once.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(128);
    legal_moves_into(&mut tmp, player, &mut out);
    out
}

/// All legal moves of `player` into the provided buffer.
pub fn legal_moves_into(board: &mut Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(board, player, out);
    out.retain(|&mv| is_legal_candidate(board, mv, player));
}

/// Stops at the first legal move found.
pub fn has_legal_move(board: &mut Board, player: Player) -> bool {
    let mut candidates = Vec::with_capacity(128);
    pseudo_moves(board, player, &mut candidates);
    candidates
        .into_iter()
        .any(|mv| is_legal_candidate(board, mv, player))
}

pub fn is_checkmate(board: &mut Board, player: Player) -> bool {
    board.in_check(player) && !has_legal_move(board, player)
}

pub fn is_stalemate(board: &mut Board, player: Player) -> bool {
    !board.in_check(player) && !has_legal_move(board, player)
}

/// Outcome as seen by the side to move: checkmated loses, no legal move
/// without check is a draw.
pub fn evaluate_outcome(board: &mut Board) -> GameOutcome {
    let stm = board.side_to_move();
    if has_legal_move(board, stm) {
        GameOutcome::InProgress
    } else if board.in_check(stm) {
        GameOutcome::Win(stm.other())
    } else {
        GameOutcome::Draw
    }
}

/// The authoritative game: one board, its outcome, and the listeners to
/// notify after every accepted move.
#[derive(Debug, Clone)]
pub struct RulesEngine {
    board: Board,
    outcome: GameOutcome,
    events: EventBus,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine {
    /// Standard starting position, Sente to move.
    pub fn new() -> Self {
        Self {
            board: Board::startpos(),
            outcome: GameOutcome::InProgress,
            events: EventBus::new(),
        }
    }

    /// Adopts an arbitrary board. The outcome is evaluated right away, so a
    /// board whose side to move is already mated starts out terminal.
    pub fn from_board(board: Board) -> Self {
        let mut scratch = board.clone();
        let outcome = evaluate_outcome(&mut scratch);
        Self {
            board,
            outcome,
            events: EventBus::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn side_to_move(&self) -> Player {
        self.board.side_to_move()
    }

    /// Back to the starting layout with the outcome `InProgress`.
    /// Subscribers stay registered.
    pub fn reset(&mut self) {
        self.board = Board::startpos();
        self.outcome = GameOutcome::InProgress;
    }

    pub fn subscribe(&mut self) -> crossbeam_channel::Receiver<MoveEvent> {
        self.events.subscribe()
    }

    pub fn validate_normal_move(&self, mv: Move) -> Result<(), GameError> {
        validate_normal(&self.board, mv, self.board.side_to_move())
    }

    pub fn validate_drop_move(&self, mv: Move) -> Result<(), GameError> {
        validate_drop(&self.board, mv, self.board.side_to_move())
    }

    /// Simulates `mv` for `player` on a copy of the board.
    pub fn would_leave_mover_in_check(&self, mv: Move, player: Player) -> bool {
        let mut scratch = self.board.clone();
        leaves_in_check(&mut scratch, mv, player)
    }

    /// The only way to change the game. Either the move is applied in full
    /// and subscribers are notified, or nothing changes.
    pub fn make_move(&mut self, mv: Move) -> Result<(), GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }
        let mover = self.board.side_to_move();
        match mv {
            Move::Normal { .. } => self.validate_normal_move(mv)?,
            Move::Drop { .. } => self.validate_drop_move(mv)?,
        }
        if self.would_leave_mover_in_check(mv, mover) {
            return Err(GameError::InCheck);
        }
        self.board.apply(mv)?;

        self.outcome = evaluate_outcome(&mut self.board);
        debug!(mv = %mv, mover = ?mover, outcome = ?self.outcome, "move applied");

        self.events.publish(MoveEvent {
            mv,
            mover,
            board: self.board.clone(),
            outcome: self.outcome,
        });
        Ok(())
    }

    pub fn is_in_check(&self, player: Player) -> bool {
        self.board.in_check(player)
    }

    pub fn is_checkmate(&self, player: Player) -> bool {
        is_checkmate(&mut self.board.clone(), player)
    }

    /// No legal move for the side to move while not in check.
    pub fn is_stalemate(&self) -> bool {
        is_stalemate(&mut self.board.clone(), self.board.side_to_move())
    }

    pub fn generate_all_moves(&self, player: Player) -> Vec<Move> {
        legal_moves(&self.board, player)
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.generate_all_moves(self.board.side_to_move())
    }

    /// Squares the piece on `from` may legally move to. Empty unless that
    /// piece belongs to the side to move.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut out: Vec<Square> = self
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from() == Some(from))
            .map(|mv| mv.to())
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Kinds the side to move may legally drop on `to`, in hand order.
    pub fn droppable_kinds(&self, to: Square) -> Vec<PieceKind> {
        self.legal_moves()
            .into_iter()
            .filter_map(|mv| match mv {
                Move::Drop { to: t, kind } if t == to => Some(kind),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
