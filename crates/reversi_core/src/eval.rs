//! Static position evaluation.
//!
//! A phase-aware heuristic: positional square weights and mobility dominate
//! while the board is open, raw disc counts take over as it fills up, and a
//! finished game is scored by the exact disc differential. Higher is better
//! for the side being evaluated.

use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::movegen::{is_game_over, legal_moves_into};
use crate::types::Disc;

/// Square weights, indexed by square (bit 0 = a1). Corners are prime real
/// estate; the X- and C-squares next to an empty corner are liabilities.
#[rustfmt::skip]
const SQUARE_WEIGHTS: [i32; 64] = [
    100, -20,  10,   5,   5,  10, -20, 100,
    -20, -40,  -2,  -2,  -2,  -2, -40, -20,
     10,  -2,   5,   1,   1,   5,  -2,  10,
      5,  -2,   1,   0,   0,   1,  -2,   5,
      5,  -2,   1,   0,   0,   1,  -2,   5,
     10,  -2,   5,   1,   1,   5,  -2,  10,
    -20, -40,  -2,  -2,  -2,  -2, -40, -20,
    100, -20,  10,   5,   5,  10, -20, 100,
];

const MOBILITY_WEIGHT: f64 = 8.0;
const CORNER_WEIGHT: f64 = 25.0;
/// Disc-count weight at the very end of the game; scaled down quadratically
/// toward the opening.
const DISC_WEIGHT_ENDGAME: f64 = 10.0;
/// A finished game dominates any heuristic component.
const GAME_OVER_SCALE: f64 = 1000.0;

/// Evaluate `pos` from `side`'s perspective.
///
/// Total and pure: defined for every reachable position, never panics.
pub fn evaluate(pos: &Position, side: Disc) -> f64 {
    let own = pos.discs(side);
    let opp = pos.discs(side.other());

    if is_game_over(pos) {
        let diff = own.popcount() as f64 - opp.popcount() as f64;
        return GAME_OVER_SCALE * diff;
    }

    let positional = (table_sum(own) - table_sum(opp)) as f64;

    let mut buf = Vec::with_capacity(32);
    legal_moves_into(pos, side, &mut buf);
    let own_mobility = buf.len() as f64;
    legal_moves_into(pos, side.other(), &mut buf);
    let opp_mobility = buf.len() as f64;
    let mobility = MOBILITY_WEIGHT * (own_mobility - opp_mobility);

    let corners = CORNER_WEIGHT
        * ((own & Bitboard::CORNERS).popcount() as f64
            - (opp & Bitboard::CORNERS).popcount() as f64);

    // Disc counts barely matter early and decide everything late.
    let fill = pos.occupied().popcount() as f64 / 64.0;
    let discs =
        DISC_WEIGHT_ENDGAME * fill * fill * (own.popcount() as f64 - opp.popcount() as f64);

    positional + mobility + corners + discs
}

fn table_sum(discs: Bitboard) -> i32 {
    let mut sum = 0;
    for sq in discs {
        sum += SQUARE_WEIGHTS[sq as usize];
    }
    sum
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
