use std::fmt;

use crate::error::GameError;
use crate::movegen;
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// Everything needed to reverse one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub mv: Move,
    /// The piece as it stood before moving (the dropped piece for drops).
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [Option<Piece>; NUM_SQUARES],
    hands: [Hand; 2],
    side_to_move: Player,
    history: Vec<UndoRecord>,
}

const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Lance,
    PieceKind::Knight,
    PieceKind::Silver,
    PieceKind::Gold,
    PieceKind::King,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
];

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    /// No pieces anywhere, empty hands, Sente to move.
    pub fn empty() -> Self {
        Board {
            grid: [None; NUM_SQUARES],
            hands: [Hand::default(); 2],
            side_to_move: Player::Sente,
            history: Vec::new(),
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            b.set_piece(Square::new(8, col), Some(Piece::new(kind, Player::Sente)));
            b.set_piece(Square::new(0, col), Some(Piece::new(kind, Player::Gote)));
            b.set_piece(
                Square::new(6, col),
                Some(Piece::new(PieceKind::Pawn, Player::Sente)),
            );
            b.set_piece(
                Square::new(2, col),
                Some(Piece::new(PieceKind::Pawn, Player::Gote)),
            );
        }
        // Bishop on Sente's left, rook on Sente's right; Gote mirrored
        b.set_piece(
            Square::new(7, 1),
            Some(Piece::new(PieceKind::Bishop, Player::Sente)),
        );
        b.set_piece(
            Square::new(7, 7),
            Some(Piece::new(PieceKind::Rook, Player::Sente)),
        );
        b.set_piece(
            Square::new(1, 1),
            Some(Piece::new(PieceKind::Rook, Player::Gote)),
        );
        b.set_piece(
            Square::new(1, 7),
            Some(Piece::new(PieceKind::Bishop, Player::Gote)),
        );
        b
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|i| self.grid[i])
    }

    /// Writes a cell. Off-board squares are ignored.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        if let Some(i) = sq.index() {
            self.grid[i] = pc;
        }
    }

    pub fn hand(&self, p: Player) -> &Hand {
        &self.hands[p.idx()]
    }

    pub fn hand_count(&self, p: Player, kind: PieceKind) -> u8 {
        self.hands[p.idx()].count(kind)
    }

    pub fn add_to_hand(&mut self, p: Player, kind: PieceKind) {
        self.hands[p.idx()].add(kind);
    }

    pub fn remove_from_hand(&mut self, p: Player, kind: PieceKind) -> bool {
        self.hands[p.idx()].remove(kind)
    }

    pub fn set_hand_count(&mut self, p: Player, kind: PieceKind, count: u8) {
        self.hands[p.idx()].set(kind, count);
    }

    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, p: Player) {
        self.side_to_move = p;
    }

    pub fn history(&self) -> &[UndoRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|r| r.mv)
    }

    /// Occupied squares with their pieces, row by row from the top.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (Square::from_index(i), pc)))
    }

    pub fn piece_count(&self, p: Player) -> usize {
        self.pieces().filter(|(_, pc)| pc.owner == p).count()
    }

    /// Square of `p`'s king, or `Square::INVALID` when it has none.
    pub fn find_king(&self, p: Player) -> Square {
        self.pieces()
            .find(|(_, pc)| pc.owner == p && pc.kind == PieceKind::King)
            .map_or(Square::INVALID, |(sq, _)| sq)
    }

    pub fn is_square_attacked(&self, target: Square, by: Player) -> bool {
        self.pieces()
            .any(|(from, pc)| pc.owner == by && movegen::attacks(self, pc, from, target))
    }

    /// A player without a king is never in check.
    pub fn in_check(&self, p: Player) -> bool {
        let ksq = self.find_king(p);
        if !ksq.is_valid() {
            return false;
        }
        self.is_square_attacked(ksq, p.other())
    }

    /// Plays `mv` for the side to move and records how to take it back.
    ///
    /// Only structural checks are made here (squares on the board, a piece
    /// of the mover to move, no self-capture, kind in hand for drops).
    /// Movement rules and king safety belong to the rules engine. On error
    /// the board is untouched.
    pub fn apply(&mut self, mv: Move) -> Result<(), GameError> {
        let mover = self.side_to_move;

        let record = match mv {
            Move::Normal { from, to, promote } => {
                if !from.is_valid() || !to.is_valid() {
                    return Err(GameError::InvalidPosition);
                }
                let moved = self.piece_at(from).ok_or(GameError::PieceNotFound)?;
                if moved.owner != mover {
                    return Err(GameError::WrongPlayer);
                }
                let captured = self.piece_at(to);
                if from == to || captured.is_some_and(|c| c.owner == mover) {
                    return Err(GameError::InvalidMove);
                }
                let kind = if promote {
                    moved.kind.promoted().ok_or(GameError::InvalidMove)?
                } else {
                    moved.kind
                };

                if let Some(c) = captured {
                    self.add_to_hand(mover, c.kind);
                }
                self.set_piece(from, None);
                self.set_piece(to, Some(Piece::new(kind, mover)));

                UndoRecord {
                    mv,
                    moved,
                    captured,
                    promoted: promote,
                }
            }
            Move::Drop { to, kind } => {
                if !to.is_valid() {
                    return Err(GameError::InvalidPosition);
                }
                if self.piece_at(to).is_some() || !self.remove_from_hand(mover, kind) {
                    return Err(GameError::InvalidDrop);
                }
                let moved = Piece::new(kind, mover);
                self.set_piece(to, Some(moved));

                UndoRecord {
                    mv,
                    moved,
                    captured: None,
                    promoted: false,
                }
            }
        };

        self.history.push(record);
        self.side_to_move = mover.other();
        Ok(())
    }

    /// Takes back the most recent applied move. Returns `None` (and does
    /// nothing) when there is no history.
    pub fn undo(&mut self) -> Option<Move> {
        let record = self.history.pop()?;

        // The player who made the move is the one not marked current now
        self.side_to_move = self.side_to_move.other();
        let mover = record.moved.owner;

        match record.mv {
            Move::Normal { from, to, .. } => {
                self.set_piece(to, record.captured);
                self.set_piece(from, Some(record.moved));
                if let Some(c) = record.captured {
                    self.remove_from_hand(mover, c.kind.base());
                }
            }
            Move::Drop { to, kind } => {
                self.set_piece(to, None);
                self.add_to_hand(mover, kind);
            }
        }
        Some(record.mv)
    }

    /// Stable 64-bit identifier of grid, hands and side to move.
    ///
    /// Two boards reached by different move orders share a key.
    pub fn position_key(&self) -> u64 {
        let mut h = 0u64;
        for (sq, pc) in self.pieces() {
            h ^= ZOBRIST.piece_key(pc, sq);
        }
        for p in Player::ALL {
            for (kind, count) in self.hand(p).iter() {
                h ^= ZOBRIST.hand_key(p, kind, count);
            }
        }
        if self.side_to_move == Player::Gote {
            h ^= ZOBRIST.side_to_move;
        }
        h
    }
}

fn piece_label(pc: Piece) -> String {
    let letter = if pc.owner == Player::Sente {
        pc.kind.letter()
    } else {
        pc.kind.letter().to_ascii_lowercase()
    };
    if pc.kind.is_promoted() {
        format!("+{letter}")
    } else {
        format!(" {letter}")
    }
}

fn hand_label(hand: &Hand) -> String {
    if hand.is_empty() {
        return "-".to_string();
    }
    hand.iter()
        .map(|(kind, count)| {
            if count > 1 {
                format!("{}{}", kind.letter(), count)
            } else {
                kind.letter().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "gote hand: {}", hand_label(self.hand(Player::Gote)))?;
        writeln!(f, " 9  8  7  6  5  4  3  2  1")?;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match self.piece_at(Square::new(row, col)) {
                    Some(pc) => write!(f, "{} ", piece_label(pc))?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f, "{}", (b'a' + row as u8) as char)?;
        }
        writeln!(f, "sente hand: {}", hand_label(self.hand(Player::Sente)))?;
        write!(f, "{:?} to move", self.side_to_move)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
