use crate::bitboard::{Bitboard, DIRECTIONS};
use crate::board::Position;
use crate::types::{Disc, Move};

/// Generate all legal moves for `side`, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position, side: Disc) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(pos, side, &mut out);
    out
}

/// Generate all legal moves for `side` into the provided buffer, reusing it
/// across calls.
pub fn legal_moves_into(pos: &Position, side: Disc, out: &mut Vec<Move>) {
    out.clear();
    for sq in pos.empty_squares() {
        let flips = flips_for(pos, sq, side);
        if !flips.is_empty() {
            out.push(Move::new(sq, side, flips));
        }
    }
}

/// The set of opponent discs flipped by `side` placing on `sq`.
///
/// Empty means the placement is illegal (a legal move must flip at least
/// one disc). The square itself must be empty; callers iterate empty
/// squares, so this is not re-checked here.
pub fn flips_for(pos: &Position, sq: u8, side: Disc) -> Bitboard {
    let own = pos.discs(side);
    let opp = pos.discs(side.other());
    let mut flips = Bitboard::EMPTY;

    for dir in DIRECTIONS {
        let mut run = Bitboard::EMPTY;
        let mut cursor = dir(Bitboard::from_square(sq));
        while !(cursor & opp).is_empty() {
            run |= cursor;
            cursor = dir(cursor);
        }
        // The run only counts if it is capped by one of our own discs.
        if !(cursor & own).is_empty() {
            flips |= run;
        }
    }
    flips
}

/// True if `side` has at least one legal placement.
pub fn has_any_move(pos: &Position, side: Disc) -> bool {
    for sq in pos.empty_squares() {
        if !flips_for(pos, sq, side).is_empty() {
            return true;
        }
    }
    false
}

/// True when `side` has no legal reply in this position.
///
/// This is the leaf predicate the search uses: it covers a full board, a
/// finished game, and positions where `side` is merely blocked and would
/// have to pass. A blocked mover is a leaf from the search's point of view
/// even if the opponent could still continue.
pub fn is_terminal(pos: &Position, side: Disc) -> bool {
    !has_any_move(pos, side)
}

/// True when neither player can move — the game is over.
pub fn is_game_over(pos: &Position) -> bool {
    !has_any_move(pos, Disc::Dark) && !has_any_move(pos, Disc::Light)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
