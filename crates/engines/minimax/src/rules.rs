//! Seams between the searcher and its collaborators.
//!
//! The search treats the rules engine and the evaluator as black boxes, so
//! both are traits here. The Reversi implementations delegate straight to
//! `reversi_core`; tests substitute fixed game trees.

use reversi_core::{Disc, Move, Position, evaluate, legal_moves};

/// What the searcher needs from a rules/state engine.
pub trait Rules {
    type State: Clone;
    type Move;

    /// All legal moves for `side` in `state`; may be empty.
    fn legal_moves(&self, state: &Self::State, side: Disc) -> Vec<Self::Move>;

    /// The successor state after `mv`. Pure: must not mutate `state`.
    fn apply(&self, state: &Self::State, mv: &Self::Move) -> Self::State;

    /// True when `side` has no further play in `state`.
    fn is_terminal(&self, state: &Self::State, side: Disc) -> bool;

    /// Ordering heuristic: larger-effect moves are searched first. Any
    /// weighting is correct; quality only affects how much gets pruned.
    fn move_weight(&self, _mv: &Self::Move) -> u32 {
        0
    }
}

/// A static scoring function. Higher is better for `side`; must be total
/// over every reachable state.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S, side: Disc) -> f64;
}

/// The concrete Reversi rules from `reversi_core`.
pub struct OthelloRules;

impl Rules for OthelloRules {
    type State = Position;
    type Move = Move;

    fn legal_moves(&self, state: &Position, side: Disc) -> Vec<Move> {
        legal_moves(state, side)
    }

    fn apply(&self, state: &Position, mv: &Move) -> Position {
        state.apply(mv)
    }

    fn is_terminal(&self, state: &Position, side: Disc) -> bool {
        reversi_core::is_terminal(state, side)
    }

    fn move_weight(&self, mv: &Move) -> u32 {
        mv.flip_count()
    }
}

/// The phase-aware heuristic from `reversi_core::eval`.
pub struct DynamicEvaluator;

impl Evaluator<Position> for DynamicEvaluator {
    fn evaluate(&self, state: &Position, side: Disc) -> f64 {
        evaluate(state, side)
    }
}
