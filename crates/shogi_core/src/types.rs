use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

pub const BOARD_SIZE: i8 = 9;
pub const NUM_SQUARES: usize = 81;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, starts on the bottom three rows.
    Sente,
    Gote,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Sente, Player::Gote];

    pub fn other(self) -> Player {
        match self {
            Player::Sente => Player::Gote,
            Player::Gote => Player::Sente,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::Sente => 0,
            Player::Gote => 1,
        }
    }
    /// Row delta of one step towards the opponent.
    pub fn forward(self) -> i8 {
        match self {
            Player::Sente => -1,
            Player::Gote => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Rook,
    Bishop,
    Gold,
    Silver,
    Knight,
    Lance,
    Pawn,
    PromotedRook,
    PromotedBishop,
    PromotedSilver,
    PromotedKnight,
    PromotedLance,
    PromotedPawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 14] = [
        PieceKind::King,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Pawn,
        PieceKind::PromotedRook,
        PieceKind::PromotedBishop,
        PieceKind::PromotedSilver,
        PieceKind::PromotedKnight,
        PieceKind::PromotedLance,
        PieceKind::PromotedPawn,
    ];

    /// The seven kinds that can sit in a hand, in hand-index order.
    pub const HAND: [PieceKind; 7] = [
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Pawn,
    ];

    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn is_promoted(self) -> bool {
        matches!(
            self,
            PieceKind::PromotedRook
                | PieceKind::PromotedBishop
                | PieceKind::PromotedSilver
                | PieceKind::PromotedKnight
                | PieceKind::PromotedLance
                | PieceKind::PromotedPawn
        )
    }

    /// The promoted form, or `None` for King, Gold and already-promoted kinds.
    pub fn promoted(self) -> Option<PieceKind> {
        match self {
            PieceKind::Rook => Some(PieceKind::PromotedRook),
            PieceKind::Bishop => Some(PieceKind::PromotedBishop),
            PieceKind::Silver => Some(PieceKind::PromotedSilver),
            PieceKind::Knight => Some(PieceKind::PromotedKnight),
            PieceKind::Lance => Some(PieceKind::PromotedLance),
            PieceKind::Pawn => Some(PieceKind::PromotedPawn),
            _ => None,
        }
    }

    /// The unpromoted form. Identity for base kinds.
    pub fn base(self) -> PieceKind {
        match self {
            PieceKind::PromotedRook => PieceKind::Rook,
            PieceKind::PromotedBishop => PieceKind::Bishop,
            PieceKind::PromotedSilver => PieceKind::Silver,
            PieceKind::PromotedKnight => PieceKind::Knight,
            PieceKind::PromotedLance => PieceKind::Lance,
            PieceKind::PromotedPawn => PieceKind::Pawn,
            other => other,
        }
    }

    pub fn can_promote(self) -> bool {
        self.promoted().is_some()
    }

    pub fn hand_index(self) -> Option<usize> {
        PieceKind::HAND.iter().position(|&k| k == self)
    }

    pub fn is_droppable(self) -> bool {
        self.hand_index().is_some()
    }

    /// Upper-case letter of the base kind, as used in move identifiers.
    pub fn letter(self) -> char {
        match self.base() {
            PieceKind::King => 'K',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Gold => 'G',
            PieceKind::Silver => 'S',
            PieceKind::Knight => 'N',
            PieceKind::Lance => 'L',
            _ => 'P',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceKind::King),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'G' => Some(PieceKind::Gold),
            'S' => Some(PieceKind::Silver),
            'N' => Some(PieceKind::Knight),
            'L' => Some(PieceKind::Lance),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: Player) -> Self {
        Self { kind, owner }
    }
}

/// A (row, column) board coordinate. Row 0 is Gote's back rank, column 0 is
/// the left edge as Sente sees the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// "No square". Never stored on the board.
    pub const INVALID: Square = Square { row: -1, col: -1 };

    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn index(self) -> Option<usize> {
        self.is_valid()
            .then(|| (self.row as usize) * BOARD_SIZE as usize + self.col as usize)
    }

    pub fn from_index(i: usize) -> Square {
        if i >= NUM_SQUARES {
            return Square::INVALID;
        }
        Square::new((i / 9) as i8, (i % 9) as i8)
    }

    /// Every square, row by row from the top.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).map(Square::from_index)
    }

    /// The square `(dr, dc)` away, or `INVALID` when it leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Square {
        if !self.is_valid() {
            return Square::INVALID;
        }
        let s = Square::new(self.row + dr, self.col + dc);
        if s.is_valid() { s } else { Square::INVALID }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "--");
        }
        let file = (BOARD_SIZE - self.col) as u8;
        let rank = (b'a' + self.row as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'1'..=b'9').contains(&b[0]) || !(b'a'..=b'i').contains(&b[1]) {
            return Err(GameError::InvalidPosition);
        }
        let col = BOARD_SIZE - (b[0] - b'0') as i8;
        let row = (b[1] - b'a') as i8;
        Ok(Square::new(row, col))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Normal {
        from: Square,
        to: Square,
        promote: bool,
    },
    Drop {
        to: Square,
        kind: PieceKind,
    },
}

impl Move {
    pub fn normal(from: Square, to: Square) -> Self {
        Move::Normal {
            from,
            to,
            promote: false,
        }
    }

    pub fn promoting(from: Square, to: Square) -> Self {
        Move::Normal {
            from,
            to,
            promote: true,
        }
    }

    pub fn drop(kind: PieceKind, to: Square) -> Self {
        Move::Drop { to, kind }
    }

    pub fn to(&self) -> Square {
        match *self {
            Move::Normal { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// Origin square; `None` for drops.
    pub fn from(&self) -> Option<Square> {
        match *self {
            Move::Normal { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    pub fn is_drop(&self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::Normal { promote: true, .. })
    }

    /// Shape check only: squares on the board, origin and destination
    /// distinct, drop kind droppable.
    pub fn is_well_formed(&self) -> bool {
        match *self {
            Move::Normal { from, to, .. } => from.is_valid() && to.is_valid() && from != to,
            Move::Drop { to, kind } => to.is_valid() && kind.is_droppable(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Normal { from, to, promote } => {
                write!(f, "{from}{to}")?;
                if promote {
                    write!(f, "+")?;
                }
                Ok(())
            }
            Move::Drop { to, kind } => write!(f, "{}*{to}", kind.letter()),
        }
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((kind, to)) = s.split_once('*') {
            let mut chars = kind.chars();
            let kind = match (chars.next(), chars.next()) {
                (Some(c), None) => PieceKind::from_letter(c).ok_or(GameError::InvalidDrop)?,
                _ => return Err(GameError::InvalidDrop),
            };
            return Ok(Move::drop(kind, to.parse()?));
        }

        let (body, promote) = match s.strip_suffix('+') {
            Some(body) => (body, true),
            None => (s, false),
        };
        if body.len() != 4 || !body.is_ascii() {
            return Err(GameError::InvalidPosition);
        }
        let from = body[0..2].parse()?;
        let to = body[2..4].parse()?;
        Ok(Move::Normal { from, to, promote })
    }
}

/// Per-player reserve of captured pieces, indexed by `PieceKind::hand_index`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    counts: [u8; 7],
}

impl Hand {
    pub fn count(&self, kind: PieceKind) -> u8 {
        kind.hand_index().map_or(0, |i| self.counts[i])
    }

    /// Adds one piece, demoted to its base kind. Kings are ignored.
    pub fn add(&mut self, kind: PieceKind) {
        if let Some(i) = kind.base().hand_index() {
            self.counts[i] = self.counts[i].saturating_add(1);
        }
    }

    /// Removes one piece, flooring at zero. Returns whether one was there.
    pub fn remove(&mut self, kind: PieceKind) -> bool {
        match kind.hand_index() {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn set(&mut self, kind: PieceKind, count: u8) {
        if let Some(i) = kind.hand_index() {
            self.counts[i] = count;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    /// Kinds held at least once, with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        PieceKind::HAND
            .iter()
            .zip(self.counts.iter())
            .filter(|(_, c)| **c > 0)
            .map(|(&k, &c)| (k, c))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
