//! Game and match results

use serde::{Deserialize, Serialize};
use shogi_core::{Move, Player};

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same result seen from the other side of the board.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// Result for `viewer` when `winner` won (None = draw).
    pub fn for_player(winner: Option<Player>, viewer: Player) -> Self {
        match winner {
            None => GameResult::Draw,
            Some(p) if p == viewer => GameResult::Win,
            Some(_) => GameResult::Loss,
        }
    }
}

/// How a game came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Checkmate,
    Stalemate,
    /// The engine to move had nothing to play.
    NoMove,
    /// The engine to move offered a move the rules engine refused.
    IllegalMove,
    MaxPlies,
}

/// One finished game, as seen by the move log subscriber.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Moves in the order the rules engine accepted them
    pub moves: Vec<Move>,
    /// Result from Sente's perspective
    pub result: GameResult,
    pub end: GameEnd,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
