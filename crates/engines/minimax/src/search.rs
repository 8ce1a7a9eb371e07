//! Minimax search with alpha-beta pruning.

use reversi_core::{Disc, TimeControl};

use crate::cutoff::should_cutoff;
use crate::ordering::order_moves;
use crate::rules::{Evaluator, Rules};

/// Result from pick_best_move indicating whether search completed or was stopped.
pub struct SearchOutcome<M> {
    /// Best move found with its value (None if no legal moves exist)
    pub best_move: Option<(M, f64)>,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Searches the state and returns the best move for `side` with its value.
///
/// Root moves are ordered largest effect first and each successor is
/// searched with full-width bounds at `depth - 1`, the opponent replying.
/// The strictly-greater comparison keeps the earliest-found move on equal
/// values, so results are reproducible for a given state and depth.
///
/// # Arguments
/// * `rules` - The rules/state engine successor states come from
/// * `eval` - The static scoring function used at the leaves
/// * `state` - The state to search
/// * `side` - The side being optimized for; fixed across the whole call
/// * `depth` - Maximum search depth in plies
/// * `nodes` - Counter for nodes examined (for statistics)
/// * `tc` - Time control for aborting search when time expires
///
/// # Returns
/// `SearchOutcome` with the best move (if any) and whether search was stopped
pub fn pick_best_move<R, E>(
    rules: &R,
    eval: &E,
    state: &R::State,
    side: Disc,
    depth: u8,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome<R::Move>
where
    R: Rules,
    E: Evaluator<R::State>,
{
    let mut moves = rules.legal_moves(state, side);
    if moves.is_empty() {
        // No legal placement is a defined outcome, not a failure.
        return SearchOutcome {
            best_move: None,
            stopped: tc.is_stopped(),
        };
    }
    order_moves(rules, &mut moves);

    let mut best: Option<(R::Move, f64)> = None;
    let mut best_value = f64::NEG_INFINITY;

    for mv in moves {
        let child = rules.apply(state, &mv);
        let value = alpha_beta(
            rules,
            eval,
            &child,
            side,
            depth.saturating_sub(1),
            f64::NEG_INFINITY,
            f64::INFINITY,
            false,
            nodes,
            tc,
        );
        if value > best_value {
            best_value = value;
            best = Some((mv, value));
        }
    }

    SearchOutcome {
        best_move: best,
        stopped: tc.is_stopped(),
    }
}

/// Recursive alpha-beta search.
///
/// Evaluation is always from `side`'s perspective; `maximizing` says whose
/// turn it is at this ply. Bounds travel by value down the call tree, so a
/// pruning update in one branch never leaks into a sibling.
#[allow(clippy::too_many_arguments)]
fn alpha_beta<R, E>(
    rules: &R,
    eval: &E,
    state: &R::State,
    side: Disc,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    nodes: &mut u64,
    tc: &TimeControl,
) -> f64
where
    R: Rules,
    E: Evaluator<R::State>,
{
    *nodes += 1;

    if should_cutoff(rules, state, side, depth, tc) {
        return eval.evaluate(state, side);
    }

    let mover = if maximizing { side } else { side.other() };
    let mut moves = rules.legal_moves(state, mover);
    // A blocked mover is a leaf. Returning the static value here also
    // guards the fold below from running on nothing and yielding its
    // infinite seed.
    if moves.is_empty() {
        return eval.evaluate(state, side);
    }
    order_moves(rules, &mut moves);

    if maximizing {
        let mut value = f64::NEG_INFINITY;
        for mv in &moves {
            let child = rules.apply(state, mv);
            value = value.max(alpha_beta(
                rules,
                eval,
                &child,
                side,
                depth - 1,
                alpha,
                beta,
                false,
                nodes,
                tc,
            ));
            alpha = alpha.max(value);
            if alpha >= beta {
                break; // beta cutoff
            }
        }
        value
    } else {
        let mut value = f64::INFINITY;
        for mv in &moves {
            let child = rules.apply(state, mv);
            value = value.min(alpha_beta(
                rules,
                eval,
                &child,
                side,
                depth - 1,
                alpha,
                beta,
                true,
                nodes,
                tc,
            ));
            beta = beta.min(value);
            if beta <= alpha {
                break; // alpha cutoff
            }
        }
        value
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
