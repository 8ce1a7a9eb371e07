use super::*;
use crate::types::sq_to_coord;

#[test]
fn test_start_position_moves() {
    let pos = Position::start();
    let moves = legal_moves(&pos, Disc::Dark);
    // Dark opens with exactly four choices
    assert_eq!(moves.len(), 4);

    let mut coords: Vec<String> = moves.iter().map(|m| sq_to_coord(m.sq)).collect();
    coords.sort();
    assert_eq!(coords, ["c4", "d3", "e6", "f5"]);

    // Every opening move flips exactly one disc
    assert!(moves.iter().all(|m| m.flip_count() == 1));
}

#[test]
fn test_reply_moves_after_d3() {
    let pos = Position::start();
    let mv = legal_moves(&pos, Disc::Dark)
        .into_iter()
        .find(|m| m.sq == 19)
        .unwrap();
    let pos = pos.apply(&mv);

    let mut coords: Vec<String> = legal_moves(&pos, Disc::Light)
        .iter()
        .map(|m| sq_to_coord(m.sq))
        .collect();
    coords.sort();
    assert_eq!(coords, ["c3", "c5", "e3"]);
}

#[test]
fn test_multi_direction_flips() {
    // Light placing on d4 closes two flanks at once: d4-d5-d6 up the file
    // and d4-e4-f4 along the rank.
    let pos = Position::from_grid(
        "........
         ........
         ...o....
         ...x....
         ....xo..
         ........
         ........
         ........",
    )
    .unwrap();
    let flips = flips_for(&pos, 27, Disc::Light); // d4
    assert!(flips.contains(35)); // d5
    assert!(flips.contains(28)); // e4
    assert_eq!(flips.popcount(), 2);
}

#[test]
fn test_blocked_side_is_terminal() {
    // b1 is already flanked, so Dark has no placement that flips anything;
    // Light can still play d1 (d1-c1-b1 closes on its own disc).
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
    assert!(is_terminal(&pos, Disc::Dark));
    assert!(!is_terminal(&pos, Disc::Light));
    assert!(!is_game_over(&pos));

    let moves = legal_moves(&pos, Disc::Light);
    assert_eq!(moves.len(), 1);
    assert_eq!(sq_to_coord(moves[0].sq), "d1");
}

#[test]
fn test_full_board_is_game_over() {
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
    assert!(is_game_over(&pos));
    assert!(is_terminal(&pos, Disc::Dark));
    assert!(is_terminal(&pos, Disc::Light));
}

#[test]
fn test_legal_moves_into_reuses_buffer() {
    let pos = Position::start();
    let mut buf = Vec::new();
    legal_moves_into(&pos, Disc::Dark, &mut buf);
    assert_eq!(buf.len(), 4);
    legal_moves_into(&pos, Disc::Light, &mut buf);
    assert_eq!(buf.len(), 4);
}
