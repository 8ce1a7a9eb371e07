//! Tournament CLI
//!
//! Run matches between engines and track Elo ratings.

use greedy_engine::GreedyEngine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use reversi_core::Engine;
use std::env;
use std::path::Path;
use std::time::Duration;
use tournament::{
    EloTracker, MatchConfig, MatchRunner, TournamentConfig, TournamentResults, quick_match,
};

const ELO_FILE: &str = "reversi_elo.json";

fn print_usage() {
    println!("reversi-lab Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D] [--time-ms T]");
    println!("  tournament gauntlet <challenger> [--games N] [--depth D]");
    println!("  tournament leaderboard");
    println!();
    println!("Options:");
    println!("  --config FILE.toml  - load games/depth/time from a config file");
    println!();
    println!("Engines:");
    println!("  minimax       - Alpha-beta search with the positional eval");
    println!("  greedy        - Most flips right now, no look-ahead");
    println!("  random        - Uniform random legal move");
    println!();
    println!("Examples:");
    println!("  tournament match minimax greedy --games 20 --depth 4");
    println!("  tournament gauntlet minimax --games 10");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "minimax" | "search" => Box::new(MinimaxEngine::new()),
        "greedy" => Box::new(GreedyEngine::new()),
        "random" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, using minimax", spec);
            Box::new(MinimaxEngine::new())
        }
    }
}

/// Options shared by the match and gauntlet commands
struct CliOptions {
    num_games: u32,
    depth: u8,
    time_ms: u64,
    opening_plies: u32,
}

impl Default for CliOptions {
    fn default() -> Self {
        let cfg = TournamentConfig::default();
        Self {
            num_games: cfg.games_per_match,
            depth: cfg.search_depth,
            time_ms: cfg.move_time_millis,
            opening_plies: cfg.opening_plies,
        }
    }
}

impl CliOptions {
    fn from_config(cfg: &TournamentConfig) -> Self {
        Self {
            num_games: cfg.games_per_match,
            depth: cfg.search_depth,
            time_ms: cfg.move_time_millis,
            opening_plies: cfg.opening_plies,
        }
    }

    /// Parse flags, later flags overriding anything a --config file set
    fn parse(args: &[String], start: usize) -> Self {
        let mut opts = CliOptions::default();

        // First pass: an optional config file provides the baseline
        let mut i = start;
        while i < args.len() {
            if args[i] == "--config" && i + 1 < args.len() {
                match TournamentConfig::load_toml(Path::new(&args[i + 1])) {
                    Ok(cfg) => opts = CliOptions::from_config(&cfg),
                    Err(e) => eprintln!("Warning: {}", e),
                }
            }
            i += 1;
        }

        let mut i = start;
        while i < args.len() {
            match args[i].as_str() {
                "--games" | "-g" => {
                    if i + 1 < args.len() {
                        opts.num_games = args[i + 1].parse().unwrap_or(opts.num_games);
                        i += 1;
                    }
                }
                "--depth" | "-d" => {
                    if i + 1 < args.len() {
                        opts.depth = args[i + 1].parse().unwrap_or(opts.depth);
                        i += 1;
                    }
                }
                "--time-ms" | "-t" => {
                    if i + 1 < args.len() {
                        opts.time_ms = args[i + 1].parse().unwrap_or(opts.time_ms);
                        i += 1;
                    }
                }
                "--openings" => {
                    if i + 1 < args.len() {
                        opts.opening_plies = args[i + 1].parse().unwrap_or(opts.opening_plies);
                        i += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        opts
    }

    fn match_config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.num_games,
            depth: self.depth,
            time_per_move: if self.time_ms > 0 {
                Some(Duration::from_millis(self.time_ms))
            } else {
                None
            },
            opening_plies: self.opening_plies,
            verbose: true,
            ..Default::default()
        }
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let opts = CliOptions::parse(args, 2);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", opts.num_games, opts.depth);
    println!();

    let mut engine1 = create_engine(engine1_spec);
    let mut engine2 = create_engine(engine2_spec);

    let runner = MatchRunner::new(opts.match_config());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(engine1_spec, engine2_spec, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger engine");
        print_usage();
        return;
    }

    let challenger_spec = &args[0];
    let opts = CliOptions::parse(args, 1);

    let opponents = vec!["greedy", "random"];

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!("Games per match: {}, Depth: {}", opts.num_games, opts.depth);
    println!();

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig {
            games_per_match: opts.num_games,
            search_depth: opts.depth,
            move_time_millis: opts.time_ms,
            opening_plies: opts.opening_plies,
        },
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_engine(challenger_spec);
        let mut opp_engine = create_engine(opponent);

        let result = quick_match(
            challenger.as_mut(),
            opp_engine.as_mut(),
            opts.num_games,
            opts.depth,
        );

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
