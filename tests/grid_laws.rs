use aoc2024::grid::coord::Coord;
use aoc2024::grid::direction::Direction;
use aoc2024::grid::{Grid, GridError};

fn grid(text: &str) -> Grid {
    Grid::from_text(text).unwrap()
}

#[test]
fn dimensions_come_from_the_input() {
    let g = grid("abc\ndef");
    assert_eq!(g.width(), 3);
    assert_eq!(g.height(), 2);
    assert_eq!(g.get(Coord::new(0, 0)), 'a');
    assert_eq!(g.get(Coord::new(1, 2)), 'f');
}

#[test]
fn ragged_rows_are_rejected() {
    let err = Grid::from_text("abc\nab").unwrap_err();
    assert!(matches!(
        err,
        GridError::RaggedRow {
            row: 1,
            len: 2,
            expected: 3
        }
    ));
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(Grid::from_text(""), Err(GridError::Empty)));
}

#[test]
fn interior_cells_have_all_eight_neighbors() {
    let g = grid("abc\ndef\nghi");
    let mid = Coord::new(1, 1);
    for dir in Direction::ALL {
        assert!(g.step(mid, dir).is_some(), "{dir:?}");
    }
}

#[test]
fn corner_steps_return_none_off_the_edge() {
    let g = grid("abc\ndef\nghi");

    let top_left = Coord::new(0, 0);
    assert_eq!(g.step(top_left, Direction::Up), None);
    assert_eq!(g.step(top_left, Direction::Left), None);
    assert_eq!(g.step(top_left, Direction::UpLeft), None);
    assert_eq!(g.step(top_left, Direction::UpRight), None);
    assert_eq!(g.step(top_left, Direction::DownLeft), None);
    assert_eq!(g.step(top_left, Direction::Down), Some(Coord::new(1, 0)));
    assert_eq!(g.step(top_left, Direction::Right), Some(Coord::new(0, 1)));
    assert_eq!(
        g.step(top_left, Direction::DownRight),
        Some(Coord::new(1, 1))
    );

    let bottom_right = Coord::new(2, 2);
    assert_eq!(g.step(bottom_right, Direction::Down), None);
    assert_eq!(g.step(bottom_right, Direction::Right), None);
    assert_eq!(g.step(bottom_right, Direction::DownRight), None);
    assert_eq!(g.step(bottom_right, Direction::Up), Some(Coord::new(1, 2)));
}

#[test]
fn stepping_and_stepping_back_round_trips() {
    let g = grid("abc\ndef\nghi");
    let mid = Coord::new(1, 1);
    for dir in Direction::ALL {
        let there = g.step(mid, dir).unwrap();
        assert_eq!(g.step(there, dir.opposite()), Some(mid), "{dir:?}");
    }
}

#[test]
fn opposite_is_an_involution_that_negates_the_delta() {
    for dir in Direction::ALL {
        assert_eq!(dir.opposite().opposite(), dir);
        let (dr, dc) = dir.delta();
        let (odr, odc) = dir.opposite().delta();
        assert_eq!((odr, odc), (-dr, -dc));
    }
}

#[test]
fn coords_iterate_row_major() {
    let g = grid("ab\ncd");
    let got: Vec<Coord> = g.coords().collect();
    assert_eq!(
        got,
        vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(1, 1),
        ]
    );
}
