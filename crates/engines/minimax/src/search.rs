//! Minimax search with alpha-beta pruning

use shogi_core::{Board, Move, Player, TimeControl, has_legal_move, legal_moves_into};
use tracing::trace;

use crate::eval::evaluate;

/// Score of a mate delivered at the root. Mates found `ply` moves deeper
/// score `MATE_SCORE - ply`, so shorter mates win ties.
pub const MATE_SCORE: i32 = 1_000_000;
const INFINITY: i32 = i32::MAX / 2;

/// Result from pick_best_move indicating whether search completed or was stopped.
pub struct SearchOutcome {
    /// Best move found (if any legal moves exist)
    pub best_move: Option<(Move, i32)>,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Searches `board` for its side to move and returns the move that is best
/// for `ai`.
///
/// The side to move maximizes when it is `ai` and minimizes otherwise.
/// `depth` below 1 still looks one ply ahead. The clock is read between
/// moves only, so every applied move is undone before stopping.
pub fn pick_best_move(
    board: &Board,
    ai: Player,
    depth: u8,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome {
    let mut work = board.clone();
    let stm = work.side_to_move();
    let mut moves = Vec::with_capacity(128);
    legal_moves_into(&mut work, stm, &mut moves);

    match moves.len() {
        0 => {
            return SearchOutcome {
                best_move: None,
                stopped: false,
            };
        }
        1 => {
            return SearchOutcome {
                best_move: Some((moves[0], evaluate(&work, ai))),
                stopped: false,
            };
        }
        _ => {}
    }

    let maximizing = stm == ai;
    let mut best = moves[0];
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut stopped = false;

    for mv in moves {
        if tc.check_time() {
            stopped = true;
            break;
        }
        if work.apply(mv).is_err() {
            continue;
        }
        *nodes += 1;

        let (score, was_stopped) = minimax(
            &mut work,
            depth.saturating_sub(1),
            alpha,
            beta,
            ai,
            1,
            nodes,
            tc,
        );
        work.undo();

        if was_stopped {
            stopped = true;
            break;
        }
        trace!(mv = %mv, score, "root move");

        if maximizing {
            if score > best_score {
                best_score = score;
                best = mv;
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best = mv;
            }
            beta = beta.min(score);
        }
    }

    // Stopped before the first root move finished
    if best_score.abs() == INFINITY {
        best_score = evaluate(&work, ai);
    }

    SearchOutcome {
        best_move: Some((best, best_score)),
        stopped,
    }
}

fn mated_score(stm: Player, ai: Player, ply: i32) -> i32 {
    if stm == ai {
        -(MATE_SCORE - ply)
    } else {
        MATE_SCORE - ply
    }
}

/// Score of a leaf: mate and stalemate first, material otherwise.
fn leaf_score(board: &mut Board, ai: Player, ply: i32) -> i32 {
    let stm = board.side_to_move();
    if has_legal_move(board, stm) {
        evaluate(board, ai)
    } else if board.in_check(stm) {
        mated_score(stm, ai, ply)
    } else {
        0
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// Returns (score, stopped) where stopped indicates if search was aborted due to time.
#[allow(clippy::too_many_arguments)]
fn minimax(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ai: Player,
    ply: i32,
    nodes: &mut u64,
    tc: &TimeControl,
) -> (i32, bool) {
    if depth == 0 {
        return (leaf_score(board, ai, ply), false);
    }
    if tc.check_time() {
        return (0, true);
    }

    let stm = board.side_to_move();
    let mut moves = Vec::with_capacity(128);
    legal_moves_into(board, stm, &mut moves);

    if moves.is_empty() {
        if board.in_check(stm) {
            return (mated_score(stm, ai, ply), false);
        }
        return (0, false); // Stalemate
    }

    let maximizing = stm == ai;
    let mut best = if maximizing { -INFINITY } else { INFINITY };

    for mv in moves {
        if board.apply(mv).is_err() {
            continue;
        }
        *nodes += 1;

        let (score, stopped) = minimax(board, depth - 1, alpha, beta, ai, ply + 1, nodes, tc);
        board.undo();

        if stopped {
            return (best, true);
        }

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    (best, false)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
