//! Minimax Shogi Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over the rules engine's legal
//! moves, scored by material on the board and in hand.

mod eval;
mod search;

use shogi_core::{Board, Engine, Player, SearchLimits, SearchResult};
use tracing::info;

/// Shogi engine maximizing the evaluation of one configured player.
///
/// It also answers for the other side when asked, in which case it picks the
/// move that is worst for its own player.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    player: Player,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(player: Player) -> Self {
        Self { player, nodes: 0 }
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(Player::Sente)
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let outcome = search::pick_best_move(
            board,
            self.player,
            limits.depth,
            &mut self.nodes,
            &limits.time_control,
        );

        let result = SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        };
        info!(
            best = %result.best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
            score = result.score,
            nodes = result.nodes,
            depth = result.depth,
            stopped = result.stopped,
            elapsed = ?limits.time_control.elapsed(),
            "search finished"
        );
        result
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, material, piece_value};
pub use search::{MATE_SCORE, SearchOutcome, pick_best_move};
