use super::*;

#[test]
fn test_coord_round_trip() {
    assert_eq!(sq_to_coord(0), "a1");
    assert_eq!(sq_to_coord(63), "h8");
    assert_eq!(coord_to_sq("d3"), Some(19));
    assert_eq!(coord_to_sq("D3"), Some(19));
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(coord_to_sq("d9"), None);
    assert_eq!(coord_to_sq("d"), None);
}

#[test]
fn test_parse_coord_move() {
    let pos = Position::start();
    let mv = parse_coord_move(&pos, Disc::Dark, "d3").unwrap();
    assert_eq!(mv.sq, 19);
    assert_eq!(mv.flip_count(), 1);

    assert!(matches!(
        parse_coord_move(&pos, Disc::Dark, "a1"),
        Err(CoreError::IllegalMove { .. })
    ));
    assert!(matches!(
        parse_coord_move(&pos, Disc::Dark, "z9"),
        Err(CoreError::BadCoordinate(_))
    ));
}

#[test]
fn test_set_position_startpos() {
    let mut pos = Position::empty();
    let mut to_move = Disc::Light;
    set_position_from_text(&mut pos, &mut to_move, &["startpos"]).unwrap();
    assert_eq!(pos, Position::start());
    assert_eq!(to_move, Disc::Dark);
}

#[test]
fn test_set_position_with_moves() {
    let mut pos = Position::empty();
    let mut to_move = Disc::Dark;
    set_position_from_text(&mut pos, &mut to_move, &["startpos", "moves", "d3", "c5"]).unwrap();

    assert_eq!(pos.disc_count(Disc::Dark), 3);
    assert_eq!(pos.disc_count(Disc::Light), 3);
    assert_eq!(to_move, Disc::Dark);
}

#[test]
fn test_set_position_rejects_illegal_replay() {
    let mut pos = Position::empty();
    let mut to_move = Disc::Dark;
    let err = set_position_from_text(&mut pos, &mut to_move, &["startpos", "moves", "a1"]);
    assert!(err.is_err());
}
