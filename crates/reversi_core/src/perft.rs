use crate::board::Position;
use crate::movegen::{has_any_move, legal_moves_into};
use crate::types::{Disc, Move};

/// Pure perft node count.
///
/// Counts all move sequences of length `depth` starting with `side` to
/// move. A forced pass hands the turn over without consuming depth; a
/// position where neither player can move is a leaf.
pub fn perft(pos: &Position, side: Disc, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &Position, side: Disc, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        buf.clear();
        legal_moves_into(pos, side, buf);

        if buf.is_empty() {
            if !has_any_move(pos, side.other()) {
                return 1; // game over
            }
            return inner(pos, side.other(), depth, rest); // pass
        }

        let mut nodes = 0u64;
        for mv in buf.iter() {
            let child = pos.apply(mv);
            nodes += inner(&child, side.other(), depth - 1, rest);
        }
        nodes
    }

    // A pass consumes a buffer layer but not depth, and at most one pass
    // can precede each move, so 2*depth layers always suffice.
    let mut layers = vec![Vec::with_capacity(32); (depth as usize) * 2];
    inner(pos, side, depth, &mut layers[..])
}
