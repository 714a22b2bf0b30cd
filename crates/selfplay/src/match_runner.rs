//! Match runner for playing games between engines

use shogi_core::{Engine, GameOutcome, Player, RulesEngine};
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::results::{GameEnd, GameRecord, GameResult, MatchResult};

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_sente = !self.config.alternate_sides || game_num % 2 == 0;

            let record = if engine1_sente {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let game_result = if engine1_sente {
                record.result
            } else {
                record.result.flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1 = if engine1_sente { "sente" } else { "gote" },
                result = ?game_result,
                end = ?record.end,
                plies = record.moves.len(),
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        result
    }

    /// Play a single game, returns the record with the result from Sente's
    /// perspective.
    ///
    /// Every move goes through `RulesEngine::make_move`; the move list is
    /// collected from the game's event stream.
    pub fn play_game(&self, sente: &mut dyn Engine, gote: &mut dyn Engine) -> GameRecord {
        let mut game = RulesEngine::new();
        let events = game.subscribe();
        let mut moves = Vec::new();
        sente.new_game();
        gote.new_game();

        let finish = |moves: Vec<_>, winner: Option<Player>, end: GameEnd| GameRecord {
            moves,
            result: GameResult::for_player(winner, Player::Sente),
            end,
        };

        for _ in 0..self.config.max_plies {
            let mover = game.side_to_move();
            // Fresh limits per move, so the clock restarts
            let limits = self.config.search_limits();
            let search = match mover {
                Player::Sente => sente.search(game.board(), limits),
                Player::Gote => gote.search(game.board(), limits),
            };

            let Some(mv) = search.best_move else {
                warn!(?mover, "engine returned no move");
                return finish(moves, Some(mover.other()), GameEnd::NoMove);
            };
            if let Err(e) = game.make_move(mv) {
                warn!(?mover, mv = %mv, error = %e, "engine move rejected");
                return finish(moves, Some(mover.other()), GameEnd::IllegalMove);
            }

            for event in events.try_iter() {
                debug!(ply = moves.len() + 1, mover = ?event.mover, mv = %event.mv, "move");
                moves.push(event.mv);
            }

            match game.outcome() {
                GameOutcome::InProgress => {}
                GameOutcome::Win(winner) => {
                    return finish(moves, Some(winner), GameEnd::Checkmate);
                }
                GameOutcome::Draw => return finish(moves, None, GameEnd::Stalemate),
            }
        }

        finish(moves, None, GameEnd::MaxPlies)
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
