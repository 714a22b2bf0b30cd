//! Random Move Shogi Engine
//!
//! Picks uniformly among all legal moves, drops included. Any real engine
//! should beat it, which makes it a baseline opponent and a cheap way to
//! walk the rules engine through odd positions.

use rand::seq::SliceRandom;
use rand::thread_rng;
use shogi_core::{Board, Engine, SearchLimits, SearchResult, legal_moves_into};


#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> SearchResult {
        let mut work = board.clone();
        let mut moves = Vec::with_capacity(128);
        legal_moves_into(&mut work, board.side_to_move(), &mut moves);

        self.nodes = 1;

        SearchResult {
            best_move: moves.choose(&mut thread_rng()).copied(),
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
