//! Piece tests - rotation through the playfield, away from the spawn rows

use minogrid::core::Playfield;
use minogrid::types::{Direction, Orientation, PieceKind, Rotation, Square};

/// Spawn `kind` and bring it down eight rows into open space
fn lowered(kind: PieceKind) -> Playfield {
    let mut field = Playfield::default();
    assert!(field.spawn(kind));
    for _ in 0..8 {
        assert!(field.move_current(Direction::Down).unwrap());
    }
    field
}

fn squares(field: &Playfield) -> Vec<Square> {
    field.current().unwrap().squares().to_vec()
}

#[test]
fn test_t_turns_about_its_centre() {
    let mut field = lowered(PieceKind::T);
    assert_eq!(squares(&field), vec![(3, 11), (4, 10), (4, 11), (5, 11)]);

    field.rotate_current(Rotation::Right).unwrap();
    assert_eq!(field.current().unwrap().orientation(), Orientation::East);
    assert_eq!(squares(&field), vec![(4, 10), (4, 11), (4, 12), (5, 11)]);

    field.rotate_current(Rotation::Right).unwrap();
    assert_eq!(field.current().unwrap().orientation(), Orientation::South);
    assert_eq!(squares(&field), vec![(3, 11), (4, 11), (4, 12), (5, 11)]);
}

#[test]
fn test_i_cycles_through_all_orientations() {
    let mut field = lowered(PieceKind::I);
    let start = squares(&field);
    let expected = [
        vec![(5, 10), (5, 11), (5, 12), (5, 13)],
        vec![(3, 12), (4, 12), (5, 12), (6, 12)],
        vec![(4, 10), (4, 11), (4, 12), (4, 13)],
        start.clone(),
    ];
    for squares_after in expected {
        assert_eq!(field.rotate_current(Rotation::Right), Ok(true));
        assert_eq!(squares(&field), squares_after);
    }
}

#[test]
fn test_four_turns_either_way_restore_every_kind() {
    for kind in PieceKind::ALL {
        for rotation in [Rotation::Left, Rotation::Right] {
            let mut field = lowered(kind);
            let start = squares(&field);
            for _ in 0..4 {
                assert_eq!(field.rotate_current(rotation), Ok(true), "{kind:?}");
            }
            assert_eq!(squares(&field), start, "{kind:?} {rotation:?}");
            assert_eq!(field.current().unwrap().orientation(), Orientation::North);
        }
    }
}

#[test]
fn test_o_rotates_in_place_against_walls() {
    let mut field = lowered(PieceKind::O);
    while field.move_current(Direction::Left).unwrap() {}
    let start = squares(&field);
    assert_eq!(field.rotate_current(Rotation::Left), Ok(true));
    assert_eq!(field.rotate_current(Rotation::Right), Ok(true));
    assert_eq!(squares(&field), start);
}

#[test]
fn test_rotation_blocked_by_wall() {
    let mut field = lowered(PieceKind::I);
    field.rotate_current(Rotation::Right).unwrap();
    while field.move_current(Direction::Left).unwrap() {}
    let before = squares(&field);
    assert_eq!(before[0].0, 0);
    let revision = field.revision();

    assert_eq!(field.rotate_current(Rotation::Right), Ok(false));
    assert_eq!(field.rotate_current(Rotation::Left), Ok(false));
    assert_eq!(squares(&field), before);
    assert_eq!(field.current().unwrap().orientation(), Orientation::East);
    assert_eq!(field.revision(), revision);
}

#[test]
fn test_ghost_matches_drop() {
    for kind in PieceKind::ALL {
        let mut field = Playfield::default();
        field.spawn(kind);
        let ghost = field.current().unwrap().ghost(field.grid()).unwrap();
        field.drop_current().unwrap();
        assert_eq!(squares(&field), ghost.to_vec(), "{kind:?}");
    }
}
