pub mod bitboard;
pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use bitboard::*;
pub use board::*;
pub use error::CoreError;
pub use eval::evaluate;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all Reversi engines (minimax, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Heuristic value of the chosen line, from the searched side's
    /// perspective. Only meaningful relative to sibling root moves.
    pub score: f64,
    /// Search depth configured for this call
    pub depth: u8,
    /// Number of nodes examined (for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Trait that all Reversi engines must implement.
///
/// This allows swapping between the alpha-beta engine and the baseline
/// strategies behind one interface. `side` is the player the engine is
/// choosing a move for; it stays fixed for the whole call even though the
/// mover alternates inside a look-ahead search.
pub trait Engine: Send {
    /// Pick a move for `side` in `pos` under the given limits.
    ///
    /// Returns a `SearchResult`; `best_move` is `None` exactly when `side`
    /// has no legal placement, which is a defined outcome and not an error.
    fn search(&mut self, pos: &Position, side: Disc, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for identification
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "reversi-lab"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: set a named option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
