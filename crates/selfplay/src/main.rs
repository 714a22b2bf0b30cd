//! Self-play CLI
//!
//! Plays a match between two engines and prints the tally.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use selfplay::{EngineSpec, MatchConfig, MatchRunner};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(about = "Play shogi engines against each other")]
struct Args {
    /// TOML file with match settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of games to play
    #[arg(short, long)]
    games: Option<u32>,

    /// Search depth in plies
    #[arg(short, long)]
    depth: Option<u8>,

    /// First engine (minimax, random)
    #[arg(long)]
    engine1: Option<EngineSpec>,

    /// Second engine (minimax, random)
    #[arg(long)]
    engine2: Option<EngineSpec>,

    /// Time limit per move in milliseconds
    #[arg(long)]
    move_time_ms: Option<u64>,

    /// Plies before a game is called a draw
    #[arg(long)]
    max_plies: Option<u32>,
}

impl Args {
    fn apply(&self, config: &mut MatchConfig) {
        if let Some(games) = self.games {
            config.num_games = games;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(engine) = self.engine1 {
            config.engine1 = engine;
        }
        if let Some(engine) = self.engine2 {
            config.engine2 = engine;
        }
        if self.move_time_ms.is_some() {
            config.move_time_ms = self.move_time_ms;
        }
        if let Some(plies) = self.max_plies {
            config.max_plies = plies;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config from {}", path.display()))?,
        None => MatchConfig::default(),
    };
    args.apply(&mut config);
    anyhow::ensure!(config.depth >= 1, "--depth must be >= 1");

    println!("=== Match: {} vs {} ===", config.engine1, config.engine2);
    println!(
        "Games: {}, Depth: {}, Max plies: {}",
        config.num_games, config.depth, config.max_plies
    );
    println!();

    let mut engine1 = config.engine1.build();
    let mut engine2 = config.engine2.build();
    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        config.engine1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    Ok(())
}
