use reversi_core::{Disc, TimeControl};

use crate::rules::Rules;

/// Decide whether this node stops descending and takes a static value.
///
/// Cuts off on depth exhaustion, on a state that is terminal for the
/// perspective side, or on an exhausted time budget — checked in that
/// order, at every node. The time probe is a single clock read that
/// latches `tc`, so once the budget is gone the whole remaining tree
/// unwinds through this check without expanding anything.
///
/// A root configured with depth 0 lands here immediately and is evaluated
/// rather than rejected.
pub fn should_cutoff<R: Rules>(
    rules: &R,
    state: &R::State,
    side: Disc,
    depth: u8,
    tc: &TimeControl,
) -> bool {
    depth == 0 || rules.is_terminal(state, side) || tc.check_time()
}
