//! Zobrist keys for shogi positions.
//!
//! A position key is the XOR of random values for:
//! - Each (owner, kind, square) triple on the board (2 × 14 × 81 values)
//! - Each (owner, hand kind, count) triple for non-empty hand slots
//!   (2 × 7 × 19 values; 18 pawns is the most any hand can hold)
//! - Gote to move (1 value)
//!
//! Keys are generated at compile time from a fixed seed, so a key is a
//! stable identifier for a position across runs and builds.

use crate::types::{NUM_SQUARES, Piece, PieceKind, Player, Square};

/// Largest count any single hand slot can reach, plus one.
const HAND_SLOTS: usize = 19;

pub struct ZobristKeys {
    /// Indexed by [owner][piece_kind][square]
    pub pieces: [[[u64; NUM_SQUARES]; 14]; 2],
    /// Indexed by [owner][hand_index][count]
    pub hands: [[[u64; HAND_SLOTS]; 7]; 2],
    /// XOR-ed in when Gote is to move
    pub side_to_move: u64,
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate keys with xorshift64 from a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x5A0B_1C2D_3E4F_6071u64;

        let mut pieces = [[[0u64; NUM_SQUARES]; 14]; 2];
        let mut owner = 0;
        while owner < 2 {
            let mut kind = 0;
            while kind < 14 {
                let mut sq = 0;
                while sq < NUM_SQUARES {
                    state = xorshift64(state);
                    pieces[owner][kind][sq] = state;
                    sq += 1;
                }
                kind += 1;
            }
            owner += 1;
        }

        let mut hands = [[[0u64; HAND_SLOTS]; 7]; 2];
        let mut owner = 0;
        while owner < 2 {
            let mut kind = 0;
            while kind < 7 {
                let mut count = 0;
                while count < HAND_SLOTS {
                    state = xorshift64(state);
                    hands[owner][kind][count] = state;
                    count += 1;
                }
                kind += 1;
            }
            owner += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        ZobristKeys {
            pieces,
            hands,
            side_to_move,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        match sq.index() {
            Some(i) => self.pieces[piece.owner.idx()][piece.kind.idx()][i],
            None => 0,
        }
    }

    /// Key for `owner` holding exactly `count` of `kind`. Zero for kinds
    /// that cannot be held.
    #[inline(always)]
    pub fn hand_key(&self, owner: Player, kind: PieceKind, count: u8) -> u64 {
        match kind.hand_index() {
            Some(i) => self.hands[owner.idx()][i][(count as usize).min(HAND_SLOTS - 1)],
            None => 0,
        }
    }
}

/// Global keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
