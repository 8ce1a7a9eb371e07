//! Coordinate notation and position setup for protocol and CLI use.

use crate::board::Position;
use crate::error::CoreError;
use crate::movegen::{has_any_move, legal_moves};
use crate::types::*;

pub fn move_to_coord(mv: &Move) -> String {
    sq_to_coord(mv.sq)
}

/// Parse a coordinate like "d3" into the matching legal move for `side`.
///
/// Resolving against the generated move list means the returned move carries
/// the correct flip set for this exact position.
pub fn parse_coord_move(pos: &Position, side: Disc, txt: &str) -> Result<Move, CoreError> {
    let sq = coord_to_sq(txt).ok_or_else(|| CoreError::BadCoordinate(txt.to_string()))?;
    legal_moves(pos, side)
        .into_iter()
        .find(|m| m.sq == sq)
        .ok_or_else(|| CoreError::IllegalMove {
            coord: txt.to_string(),
            side,
        })
}

/// Set up a position from protocol arguments.
///
/// Supports: "startpos" and "startpos moves d3 c5 ...". Replaying the move
/// list alternates the mover and passes automatically when a side is
/// blocked, so `to_move` is left on the side to play next.
pub fn set_position_from_text(
    pos: &mut Position,
    to_move: &mut Disc,
    args: &[&str],
) -> Result<(), CoreError> {
    *pos = Position::start();
    *to_move = Disc::Dark;
    if args.is_empty() {
        return Ok(());
    }

    let mut i = 0;
    if args[i] == "startpos" {
        i += 1;
    }

    if i < args.len() && args[i] == "moves" {
        i += 1;
        while i < args.len() {
            let mv = parse_coord_move(pos, *to_move, args[i])?;
            *pos = pos.apply(&mv);
            *to_move = to_move.other();
            // A blocked side passes; two blocked sides end the game.
            if !has_any_move(pos, *to_move) && has_any_move(pos, to_move.other()) {
                *to_move = to_move.other();
            }
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
