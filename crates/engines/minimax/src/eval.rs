//! Static evaluation in material points.

use shogi_core::{Board, PieceKind, Player};

/// Material values, indexed by `PieceKind::idx()`.
/// Order: King, Rook, Bishop, Gold, Silver, Knight, Lance, Pawn, then the
/// promoted Rook, Bishop, Silver, Knight, Lance, Pawn.
const PIECE_VALUES: [i32; 14] = [
    10_000, 1_000, 800, 500, 400, 350, 300, 100, 1_400, 1_200, 600, 600, 600, 600,
];

#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Evaluates the board from `ai`'s perspective.
///
/// - Positive = good for `ai`
/// - Negative = good for the opponent
pub fn evaluate(board: &Board, ai: Player) -> i32 {
    material(board, ai) + positional(board, ai) + mobility(board, ai) + king_safety(board, ai)
}

/// Pieces on the board plus pieces in hand, credited to `ai` and debited
/// for the opponent.
pub fn material(board: &Board, ai: Player) -> i32 {
    let sign = |p: Player| if p == ai { 1 } else { -1 };

    let mut score = 0i32;
    for (_, pc) in board.pieces() {
        score += sign(pc.owner) * piece_value(pc.kind);
    }
    for p in Player::ALL {
        for (kind, count) in board.hand(p).iter() {
            score += sign(p) * piece_value(kind) * count as i32;
        }
    }
    score
}

pub fn positional(_board: &Board, _ai: Player) -> i32 {
    0
}

pub fn mobility(_board: &Board, _ai: Player) -> i32 {
    0
}

pub fn king_safety(_board: &Board, _ai: Player) -> i32 {
    0
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
