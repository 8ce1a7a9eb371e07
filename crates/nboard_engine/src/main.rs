//! Line-oriented engine protocol over stdin/stdout.
//!
//! Commands:
//!   name                       - identify the engine
//!   newgame                    - reset to the starting position
//!   position startpos [moves ...]
//!   play <coord>               - make a move for the side to move
//!   genmove                    - search and play for the side to move
//!   setdepth <n> / settime <ms>
//!   showboard
//!   quit

use std::io::{self, BufRead, Write};
use std::time::Duration;

use greedy_engine::GreedyEngine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use reversi_core::{
    Disc, Engine, Position, SearchLimits, has_any_move, is_game_over, move_to_coord,
    parse_coord_move, set_position_from_text,
};

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec {
        "greedy" => Box::new(GreedyEngine::new()),
        "random" => Box::new(RandomEngine::new()),
        _ => Box::new(MinimaxEngine::new()),
    }
}

fn main() {
    env_logger::init();

    // Engine choice via argv, defaults to the search engine.
    let spec = std::env::args().nth(1).unwrap_or_default();
    let mut engine = create_engine(&spec);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut pos = Position::start();
    let mut to_move = Disc::Dark;
    let mut depth: u8 = 5;
    let mut time_ms: u64 = 5000;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "name" => {
                writeln!(stdout, "name {}", engine.name()).ok();
                stdout.flush().ok();
            }
            "newgame" => {
                pos = Position::start();
                to_move = Disc::Dark;
                engine.new_game();
            }
            "setdepth" => {
                if let Some(d) = parts.get(1).and_then(|v| v.parse::<u8>().ok()) {
                    depth = d.clamp(1, 12);
                }
            }
            "settime" => {
                if let Some(t) = parts.get(1).and_then(|v| v.parse::<u64>().ok()) {
                    time_ms = t;
                }
            }
            "position" => {
                if let Err(e) = set_position_from_text(&mut pos, &mut to_move, &parts[1..]) {
                    writeln!(stdout, "error {}", e).ok();
                    stdout.flush().ok();
                }
            }
            "play" => {
                let coord = parts.get(1).copied().unwrap_or("");
                match parse_coord_move(&pos, to_move, coord) {
                    Ok(mv) => {
                        pos = pos.apply(&mv);
                        to_move = next_mover(&pos, to_move);
                    }
                    Err(e) => {
                        writeln!(stdout, "error {}", e).ok();
                        stdout.flush().ok();
                    }
                }
            }
            "genmove" => {
                let limits = if time_ms > 0 {
                    SearchLimits::depth_and_time(depth, Duration::from_millis(time_ms))
                } else {
                    SearchLimits::depth(depth)
                };
                let result = engine.search(&pos, to_move, limits);
                log::info!(
                    "genmove: depth {} nodes {} value {:.1}",
                    result.depth,
                    result.nodes,
                    result.score
                );
                match result.best_move {
                    Some(mv) => {
                        pos = pos.apply(&mv);
                        to_move = next_mover(&pos, to_move);
                        writeln!(stdout, "move {}", move_to_coord(&mv)).ok();
                    }
                    None => {
                        to_move = next_mover(&pos, to_move);
                        writeln!(stdout, "pass").ok();
                    }
                }
                stdout.flush().ok();
            }
            "showboard" => {
                writeln!(stdout, "{}", pos).ok();
                let state = if is_game_over(&pos) {
                    "game over".to_string()
                } else {
                    format!(
                        "{} to move",
                        match to_move {
                            Disc::Dark => "dark (x)",
                            Disc::Light => "light (o)",
                        }
                    )
                };
                writeln!(stdout, "{}", state).ok();
                stdout.flush().ok();
            }
            "quit" => break,
            _ => {
                // ignore unknown commands
            }
        }
    }
}

/// Hand the turn to the opponent, skipping them if they must pass.
fn next_mover(pos: &Position, current: Disc) -> Disc {
    let opponent = current.other();
    if !has_any_move(pos, opponent) && has_any_move(pos, current) {
        current
    } else {
        opponent
    }
}
