use super::*;
use reversi_core::sq_to_coord;

#[test]
fn greedy_picks_the_biggest_flip() {
    // d1 flips two discs, the alternatives flip one
    let pos = Position::from_grid(
        "........
         ........
         ........
         ........
         ........
         ........
         xo......
         xoo.....",
    )
    .unwrap();
    let mut engine = GreedyEngine::new();

    let result = engine.search(&pos, Disc::Dark, SearchLimits::depth(1));

    let mv = result.best_move.expect("dark has moves");
    assert_eq!(sq_to_coord(mv.sq), "d1");
    assert_eq!(result.score, 2.0);
}

#[test]
fn greedy_tie_break_is_deterministic() {
    // All four opening moves flip exactly one disc
    let pos = Position::start();
    let mut engine = GreedyEngine::new();

    let first = engine.search(&pos, Disc::Dark, SearchLimits::depth(1));
    let second = engine.search(&pos, Disc::Dark, SearchLimits::depth(1));

    assert_eq!(first.best_move, second.best_move);
    assert_eq!(
        first.best_move.unwrap(),
        legal_moves(&pos, Disc::Dark)[0],
        "ties keep the earliest-generated move"
    );
}

#[test]
fn greedy_handles_blocked_side() {
    let pos = Position::from_grid(
        "........
         ........
         ........
         ........
         ........
         ........
         ........
         xox.....",
    )
    .unwrap();
    let mut engine = GreedyEngine::new();

    let result = engine.search(&pos, Disc::Dark, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
    assert_eq!(result.nodes, 0);
}
