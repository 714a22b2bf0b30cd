use crate::{board::Board, rules::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, playing
/// every move on `board` and taking it back.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        let mover = board.side_to_move();
        legal_moves_into(board, mover, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            if board.apply(mv).is_ok() {
                nodes += inner(board, depth - 1, rest);
                board.undo();
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(128); depth as usize];
    inner(board, depth, &mut layers[..])
}

/// Node count below each root move, in generation order.
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mover = board.side_to_move();
    let mut roots = Vec::with_capacity(128);
    legal_moves_into(board, mover, &mut roots);

    let mut out = Vec::with_capacity(roots.len());
    for mv in roots {
        if board.apply(mv).is_ok() {
            out.push((mv, perft(board, depth - 1)));
            board.undo();
        }
    }
    out
}
