//! Random Move Reversi Engine
//!
//! A simple engine that selects moves uniformly at random from all legal
//! placements. Useful for:
//! - Testing infrastructure end to end
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use rand::seq::SliceRandom;
use rand::thread_rng;
use reversi_core::{Disc, Engine, Position, SearchLimits, SearchResult, legal_moves};

#[cfg(test)]
mod lib_tests;

/// A Reversi engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal placements. It's the simplest possible engine
/// and serves as a baseline for testing.
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
    fn search(&mut self, pos: &Position, side: Disc, _limits: SearchLimits) -> SearchResult {
        self.nodes = 1;

        let moves = legal_moves(pos, side);
        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn author(&self) -> &str {
        "reversi-lab"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
