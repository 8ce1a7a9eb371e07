use reversi_core::{Disc, Position, is_game_over, legal_moves};

/// Play a complete game taking the first generated move every turn.
/// Exercises apply/movegen/pass handling end to end.
#[test]
fn first_move_self_play_terminates() {
    let mut pos = Position::start();
    let mut to_move = Disc::Dark;
    let mut plies = 0;

    loop {
        if is_game_over(&pos) {
            break;
        }
        let moves = legal_moves(&pos, to_move);
        match moves.first() {
            Some(mv) => {
                pos = pos.apply(mv);
                plies += 1;
            }
            None => {} // pass
        }
        to_move = to_move.other();

        assert!(plies <= 60, "a game cannot have more than 60 placements");
    }

    // Disc conservation: placements only ever add discs, flips preserve them
    let total = pos.disc_count(Disc::Dark) + pos.disc_count(Disc::Light);
    assert_eq!(total, 4 + plies);
    assert!(total <= 64);
    assert!(is_game_over(&pos));
}
