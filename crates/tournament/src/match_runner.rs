//! Match runner for playing games between engines

use rand::seq::SliceRandom;
use rand::thread_rng;
use reversi_core::{Disc, Engine, Position, SearchLimits, is_game_over, legal_moves};
use std::time::Duration;

use crate::elo::{GameResult, MatchResult};

/// A full board takes 60 placements; passes are free, so this cap only
/// exists to stop a misbehaving engine from looping forever.
const MAX_PLIES: u32 = 200;

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Random plies played out before the engines take over, to vary openings
    pub opening_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            time_per_move: None,
            opening_plies: 0,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_dark = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_dark {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 holds light
                match self.play_game(engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let color = if engine1_dark { "x" } else { "o" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns result from dark's perspective
    fn play_game(&self, dark: &mut dyn Engine, light: &mut dyn Engine) -> GameResult {
        let mut pos = Position::start();
        let mut to_move = Disc::Dark;
        dark.new_game();
        light.new_game();

        // Optional randomized opening so repeated games diverge
        let mut rng = thread_rng();
        for _ in 0..self.config.opening_plies {
            if is_game_over(&pos) {
                break;
            }
            if let Some(mv) = legal_moves(&pos, to_move).choose(&mut rng) {
                pos = pos.apply(mv);
            }
            to_move = to_move.other();
        }

        for _ply in 0..MAX_PLIES {
            if is_game_over(&pos) {
                break;
            }

            // Fresh search limits for each move (resets the clock)
            let limits = self.config.search_limits();
            let result = match to_move {
                Disc::Dark => dark.search(&pos, Disc::Dark, limits),
                Disc::Light => light.search(&pos, Disc::Light, limits),
            };

            match result.best_move {
                Some(mv) => {
                    // An illegal move here would mean the engine broke the
                    // rules contract; apply() treats that as fatal.
                    pos = pos.apply(&mv);
                }
                None => {
                    // Blocked side passes
                }
            }
            to_move = to_move.other();

            log::trace!(
                "ply done, {} to move, discs {}-{}",
                match to_move {
                    Disc::Dark => "dark",
                    Disc::Light => "light",
                },
                pos.disc_count(Disc::Dark),
                pos.disc_count(Disc::Light)
            );
        }

        let dark_discs = pos.disc_count(Disc::Dark);
        let light_discs = pos.disc_count(Disc::Light);
        if dark_discs > light_discs {
            GameResult::Win
        } else if light_discs > dark_discs {
            GameResult::Loss
        } else {
            GameResult::Draw
        }
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
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use greedy_engine::GreedyEngine;
    use minimax_engine::MinimaxEngine;

    #[test]
    fn test_greedy_self_play() {
        let mut engine1 = GreedyEngine::new();
        let mut engine2 = GreedyEngine::new();

        let config = MatchConfig {
            num_games: 2,
            depth: 1,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut engine1, &mut engine2);

        assert_eq!(result.total_games(), 2);
    }

    #[test]
    fn test_search_vs_greedy_completes() {
        let mut search = MinimaxEngine::new();
        let mut greedy = GreedyEngine::new();

        let result = quick_match(&mut search, &mut greedy, 1, 2);

        assert_eq!(result.total_games(), 1);
    }
}
