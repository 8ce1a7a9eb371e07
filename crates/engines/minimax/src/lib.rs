//! Alpha-Beta Reversi Engine
//!
//! Depth- and time-limited minimax search with alpha-beta pruning and
//! largest-flip-first move ordering. This is the reference opponent that
//! the baseline engines are measured against.

mod cutoff;
mod ordering;
mod rules;
mod search;

use reversi_core::{Disc, Engine, Position, SearchLimits, SearchResult};

pub use rules::{DynamicEvaluator, Evaluator, OthelloRules, Rules};
pub use search::{SearchOutcome, pick_best_move};

/// Reversi engine using minimax with alpha-beta pruning.
///
/// The search always scores positions for the side handed to `search`; the
/// maximizing/minimizing role alternates with the mover at each ply. One
/// call is bounded by the configured depth and by the wall-clock budget in
/// the limits, whichever bites first.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, side: Disc, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let outcome = pick_best_move(
            &OthelloRules,
            &DynamicEvaluator,
            pos,
            side,
            limits.depth,
            &mut self.nodes,
            &limits.time_control,
        );

        let result = SearchResult {
            best_move: outcome.best_move.as_ref().map(|(mv, _)| *mv),
            score: outcome.best_move.as_ref().map(|(_, v)| *v).unwrap_or(0.0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        };
        log::debug!(
            "search done: depth {} nodes {} value {:.1} stopped {}",
            result.depth,
            result.nodes,
            result.score,
            result.stopped
        );
        result
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn author(&self) -> &str {
        "reversi-lab"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
