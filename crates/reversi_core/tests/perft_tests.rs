use std::time::Instant;

use rayon::prelude::*;

use reversi_core::{Disc, Position, legal_moves, perft};

/// Known node counts from the standard starting position.
/// No pass or game-over line exists this shallow, so the counts are
/// independent of pass conventions.
const START_PERFT: [(u8, u64); 7] = [
    (1, 4),
    (2, 12),
    (3, 56),
    (4, 244),
    (5, 1396),
    (6, 8200),
    (7, 55092),
];

#[test]
fn perft_from_start() {
    START_PERFT.par_iter().for_each(|(depth, expected)| {
        let pos = Position::start();
        let start = Instant::now();
        let got = perft(&pos, Disc::Dark, *depth);
        assert!(
            got == *expected,
            "Perft mismatch at depth {}: expected {}, got {}",
            depth,
            expected,
            got
        );
        println!(
            "depth {} done: {} nodes, elapsed {:.3?}",
            depth,
            got,
            start.elapsed()
        );
    });
}

#[test]
fn perft_depth_one_matches_movegen() {
    let pos = Position::start();
    assert_eq!(
        perft(&pos, Disc::Dark, 1),
        legal_moves(&pos, Disc::Dark).len() as u64
    );
}

#[test]
fn perft_on_finished_game_is_one_leaf() {
    let pos = Position::from_grid(
        "xxxxxxxx
         xxxxxxxx
         xxxxxxxx
         xxxxxxxx
         oooooooo
         oooooooo
         oooooooo
         oooooooo",
    )
    .unwrap();
    assert_eq!(perft(&pos, Disc::Dark, 3), 1);
}
