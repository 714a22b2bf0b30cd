pub mod board;
pub mod error;
pub mod events;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod time_control;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::GameError;
pub use events::{EventBus, MoveEvent};
pub use perft::{perft, perft_divide};
pub use rules::*;
pub use time_control::*;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait, implemented by every move picker in the workspace
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation in material points from the engine's perspective
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

impl SearchResult {
    /// Nothing to play: the side to move has no legal move.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all shogi engines implement.
///
/// Engines never touch the authoritative game; they receive a board and
/// return a move for the side to move, which the caller submits through
/// `RulesEngine::make_move`.
pub trait Engine: Send {
    /// Search `board` for the side to move within `limits`.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ML-shogi"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
