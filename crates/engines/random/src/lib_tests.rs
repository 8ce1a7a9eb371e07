use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let pos = Position::start();
    let limits = SearchLimits::depth(1);

    let result = engine.search(&pos, Disc::Dark, limits);

    let mv = result.best_move.expect("start position has moves");
    assert!(legal_moves(&pos, Disc::Dark).contains(&mv));
}

#[test]
fn random_engine_handles_blocked_side() {
    let mut engine = RandomEngine::new();
    // Dark cannot play anywhere: b1 is already flanked
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

    let result = engine.search(&pos, Disc::Dark, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_finished_game() {
    let mut engine = RandomEngine::new();
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

    let result = engine.search(&pos, Disc::Light, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}
