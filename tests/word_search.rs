use aoc2024::grid::coord::Coord;
use aoc2024::grid::direction::Direction;
use aoc2024::grid::Grid;
use aoc2024::search::word::{count_at, count_occurrences, find_matches, matches_direction};

const XMAS: [char; 4] = ['X', 'M', 'A', 'S'];

const SMALL: &str = "\
..X...
.SAMX.
.A..A.
XMAS.S
.X....";

const CANONICAL: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

#[test]
fn small_grid_has_four_xmas() {
    let g = Grid::from_text(SMALL).unwrap();
    assert_eq!(count_occurrences(&g, &XMAS), 4);
}

#[test]
fn canonical_grid_has_eighteen_xmas() {
    let g = Grid::from_text(CANONICAL).unwrap();
    assert_eq!(count_occurrences(&g, &XMAS), 18);
}

#[test]
fn single_character_pattern_counts_each_cell_eight_times() {
    let g = Grid::from_text(CANONICAL).unwrap();
    let cells_with_x = g.coords().filter(|&c| g.get(c) == 'X').count();
    assert_eq!(count_occurrences(&g, &['X']), 8 * cells_with_x);
}

#[test]
fn one_by_one_grid_still_matches_a_single_character_eight_ways() {
    // No neighbors exist at all, but a length-1 walk takes zero steps.
    let g = Grid::from_text("Q").unwrap();
    assert_eq!(count_occurrences(&g, &['Q']), 8);
    assert_eq!(count_occurrences(&g, &['Z']), 0);
}

#[test]
fn one_anchor_can_match_in_opposite_directions() {
    let g = Grid::from_text("SAMXMAS").unwrap();
    let x = Coord::new(0, 3);
    assert!(matches_direction(&g, x, Direction::Left, &XMAS));
    assert!(matches_direction(&g, x, Direction::Right, &XMAS));
    assert_eq!(count_at(&g, x, &XMAS), 2);
    assert_eq!(count_occurrences(&g, &XMAS), 2);
}

#[test]
fn prescreening_anchors_by_first_character_changes_nothing() {
    let g = Grid::from_text(CANONICAL).unwrap();
    let prescreened: usize = g
        .coords()
        .filter(|&c| g.get(c) == XMAS[0])
        .map(|c| count_at(&g, c, &XMAS))
        .sum();
    assert_eq!(prescreened, count_occurrences(&g, &XMAS));
}

#[test]
fn reversing_the_pattern_mirrors_every_match() {
    // A forward match anchored at `c` in direction `d` covers the same cells
    // as a reversed-pattern match anchored at the far end in `d.opposite()`.
    let g = Grid::from_text(CANONICAL).unwrap();
    let reversed: [char; 4] = ['S', 'A', 'M', 'X'];

    let mut expected: Vec<(Coord, Direction)> = find_matches(&g, &XMAS)
        .into_iter()
        .map(|(anchor, dir)| (advance(&g, anchor, dir, XMAS.len() - 1), dir.opposite()))
        .collect();
    let mut mirrored = find_matches(&g, &reversed);

    expected.sort_by_key(|&(c, d)| (c.row, c.col, d as u8));
    mirrored.sort_by_key(|&(c, d)| (c.row, c.col, d as u8));
    assert_eq!(expected, mirrored);
}

#[test]
fn scanning_twice_gives_the_same_count() {
    let g = Grid::from_text(CANONICAL).unwrap();
    assert_eq!(
        count_occurrences(&g, &XMAS),
        count_occurrences(&g, &XMAS)
    );
}

#[test]
fn match_listing_agrees_with_the_count() {
    let g = Grid::from_text(CANONICAL).unwrap();
    assert_eq!(find_matches(&g, &XMAS).len(), count_occurrences(&g, &XMAS));
}

fn advance(g: &Grid, mut at: Coord, dir: Direction, steps: usize) -> Coord {
    for _ in 0..steps {
        at = g.step(at, dir).unwrap();
    }
    at
}
