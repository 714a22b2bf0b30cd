//! Self-play runner for ML-shogi
//!
//! Plays engines against each other through the rules engine, the same path
//! a human move takes, and tallies the results.
//!
//! # Usage
//!
//! ```bash
//! # Minimax against the random baseline, sides alternating
//! cargo run -p selfplay -- --engine1 minimax --engine2 random --games 10
//!
//! # Settings from a file, with the depth overridden
//! cargo run -p selfplay -- --config selfplay.toml --depth 2
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
