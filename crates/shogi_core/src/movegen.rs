//! Per-kind movement rules.
//!
//! Direction tables are written from Sente's side of the board, where
//! "forward" is row − 1, and mirrored vertically for Gote. Nothing here
//! looks at king safety; that filter lives in the rules engine.

use crate::{board::Board, types::*};

/// How far a piece travels along each of its directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reach {
    /// Exactly one square (or one fixed leap for the knight).
    Step,
    /// Any number of empty squares, plus the first enemy piece.
    Slide,
}

#[derive(Clone, Copy, Debug)]
pub struct Motion {
    pub dirs: &'static [(i8, i8)],
    pub reach: Reach,
}

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ALL_ADJACENT: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
// Everything but the two backward diagonals
const GOLD_DIRS: [(i8, i8); 6] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0)];
const SILVER_DIRS: [(i8, i8); 5] = [(-1, -1), (-1, 0), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_DIRS: [(i8, i8); 2] = [(-2, -1), (-2, 1)];
const FORWARD: [(i8, i8); 1] = [(-1, 0)];

static KING_MOTION: [Motion; 1] = [Motion {
    dirs: &ALL_ADJACENT,
    reach: Reach::Step,
}];
static ROOK_MOTION: [Motion; 1] = [Motion {
    dirs: &ORTHOGONAL,
    reach: Reach::Slide,
}];
static BISHOP_MOTION: [Motion; 1] = [Motion {
    dirs: &DIAGONAL,
    reach: Reach::Slide,
}];
static GOLD_MOTION: [Motion; 1] = [Motion {
    dirs: &GOLD_DIRS,
    reach: Reach::Step,
}];
static SILVER_MOTION: [Motion; 1] = [Motion {
    dirs: &SILVER_DIRS,
    reach: Reach::Step,
}];
static KNIGHT_MOTION: [Motion; 1] = [Motion {
    dirs: &KNIGHT_DIRS,
    reach: Reach::Step,
}];
static LANCE_MOTION: [Motion; 1] = [Motion {
    dirs: &FORWARD,
    reach: Reach::Slide,
}];
static PAWN_MOTION: [Motion; 1] = [Motion {
    dirs: &FORWARD,
    reach: Reach::Step,
}];
// Dragon: rook slides plus single diagonal steps
static DRAGON_MOTION: [Motion; 2] = [
    Motion {
        dirs: &ORTHOGONAL,
        reach: Reach::Slide,
    },
    Motion {
        dirs: &DIAGONAL,
        reach: Reach::Step,
    },
];
// Horse: bishop slides plus single orthogonal steps
static HORSE_MOTION: [Motion; 2] = [
    Motion {
        dirs: &DIAGONAL,
        reach: Reach::Slide,
    },
    Motion {
        dirs: &ORTHOGONAL,
        reach: Reach::Step,
    },
];

/// Movement rule of a kind, as seen from Sente's side.
pub fn motions(kind: PieceKind) -> &'static [Motion] {
    match kind {
        PieceKind::King => &KING_MOTION,
        PieceKind::Rook => &ROOK_MOTION,
        PieceKind::Bishop => &BISHOP_MOTION,
        PieceKind::Gold
        | PieceKind::PromotedSilver
        | PieceKind::PromotedKnight
        | PieceKind::PromotedLance
        | PieceKind::PromotedPawn => &GOLD_MOTION,
        PieceKind::Silver => &SILVER_MOTION,
        PieceKind::Knight => &KNIGHT_MOTION,
        PieceKind::Lance => &LANCE_MOTION,
        PieceKind::Pawn => &PAWN_MOTION,
        PieceKind::PromotedRook => &DRAGON_MOTION,
        PieceKind::PromotedBishop => &HORSE_MOTION,
    }
}

#[inline]
fn oriented(dr: i8, owner: Player) -> i8 {
    match owner {
        Player::Sente => dr,
        Player::Gote => -dr,
    }
}

/// Candidate destinations of a `kind` piece owned by `owner` standing on
/// `from`, ignoring whether the move would expose the owner's king.
pub fn destinations(board: &Board, kind: PieceKind, from: Square, owner: Player) -> Vec<Square> {
    let mut out = Vec::with_capacity(16);
    destinations_into(board, kind, from, owner, &mut out);
    out
}

/// Same as `destinations`, reusing the caller's buffer.
pub fn destinations_into(
    board: &Board,
    kind: PieceKind,
    from: Square,
    owner: Player,
    out: &mut Vec<Square>,
) {
    out.clear();
    if !from.is_valid() {
        return;
    }
    for motion in motions(kind) {
        for &(dr, dc) in motion.dirs {
            let dr = oriented(dr, owner);
            let mut to = from.offset(dr, dc);
            while to.is_valid() {
                match board.piece_at(to) {
                    None => out.push(to),
                    Some(pc) => {
                        if pc.owner != owner {
                            out.push(to);
                        }
                        break;
                    }
                }
                if motion.reach == Reach::Step {
                    break;
                }
                to = to.offset(dr, dc);
            }
        }
    }
}

/// True if `piece` on `from` bears on `target`, whatever stands there.
///
/// For a target holding an enemy piece (or nothing) this is exactly
/// membership in `destinations`, without allocating.
pub fn attacks(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    if !from.is_valid() || !target.is_valid() || from == target {
        return false;
    }
    for motion in motions(piece.kind) {
        for &(dr, dc) in motion.dirs {
            let dr = oriented(dr, piece.owner);
            let mut to = from.offset(dr, dc);
            while to.is_valid() {
                if to == target {
                    return true;
                }
                if motion.reach == Reach::Step || board.piece_at(to).is_some() {
                    break;
                }
                to = to.offset(dr, dc);
            }
        }
    }
    false
}

/// True if `to` is in the candidate set of the piece on `from`.
pub fn can_reach(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let own = board.piece_at(to).is_some_and(|pc| pc.owner == piece.owner);
    !own && attacks(board, piece, from, to)
}

/// How many ranks lie between `sq` and `owner`'s far edge (0 on the
/// farthest rank itself).
#[inline]
pub fn ranks_to_far_edge(sq: Square, owner: Player) -> i8 {
    match owner {
        Player::Sente => sq.row,
        Player::Gote => BOARD_SIZE - 1 - sq.row,
    }
}

/// The three ranks nearest `owner`'s opponent.
pub fn in_promotion_zone(sq: Square, owner: Player) -> bool {
    sq.is_valid() && ranks_to_far_edge(sq, owner) <= 2
}

/// True if an unpromoted `kind` standing on `sq` could never move again:
/// Pawn or Lance on the farthest rank, Knight on the farthest two.
pub fn is_dead_end(kind: PieceKind, sq: Square, owner: Player) -> bool {
    let depth = ranks_to_far_edge(sq, owner);
    match kind {
        PieceKind::Pawn | PieceKind::Lance => depth < 1,
        PieceKind::Knight => depth < 2,
        _ => false,
    }
}

/// A non-promoting move of `kind` to `to` is illegal.
pub fn must_promote(kind: PieceKind, to: Square, owner: Player) -> bool {
    is_dead_end(kind, to, owner)
}

/// A move of `kind` between `from` and `to` may carry the promotion flag.
pub fn can_promote(kind: PieceKind, from: Square, to: Square, owner: Player) -> bool {
    kind.can_promote() && (in_promotion_zone(from, owner) || in_promotion_zone(to, owner))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
