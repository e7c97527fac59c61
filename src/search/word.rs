//! Linear word search: spell a pattern by stepping one fixed direction per
//! character.

use crate::grid::coord::Coord;
use crate::grid::direction::Direction;
use crate::grid::Grid;

use super::scan;

/// Does `pattern` read off the grid starting at `start`, stepping once in
/// `dir` per remaining character?
///
/// The walk is a bounded loop over pattern indices; falling off an edge or
/// hitting a mismatched character is an ordinary "no", never an error.
/// `pattern` must be non-empty.
pub fn matches_direction(grid: &Grid, start: Coord, dir: Direction, pattern: &[char]) -> bool {
    assert!(!pattern.is_empty(), "search pattern must be non-empty");

    let mut at = start;
    for (i, &want) in pattern.iter().enumerate() {
        if i > 0 {
            at = match grid.step(at, dir) {
                Some(next) => next,
                None => return false,
            };
        }
        if grid.get(at) != want {
            return false;
        }
    }
    true
}

/// Number of directions in which `pattern` reads off the grid from `anchor`.
///
/// The eight directions are counted independently, so one anchor can
/// contribute up to eight matches. A length-1 pattern needs no steps at all
/// and matches in all eight directions wherever its character sits.
pub fn count_at(grid: &Grid, anchor: Coord, pattern: &[char]) -> usize {
    Direction::ALL
        .iter()
        .filter(|&&dir| matches_direction(grid, anchor, dir, pattern))
        .count()
}

/// Total occurrences of `pattern` over the whole grid: every anchor, every
/// direction.
pub fn count_occurrences(grid: &Grid, pattern: &[char]) -> usize {
    scan(grid, |g, coord| count_at(g, coord, pattern))
}

/// Every `(anchor, direction)` pair at which `pattern` reads off the grid, in
/// row-major anchor order.
///
/// [`count_occurrences`] equals the length of this list; the listing exists
/// so callers can reason about where the matches are.
pub fn find_matches(grid: &Grid, pattern: &[char]) -> Vec<(Coord, Direction)> {
    let mut out = Vec::new();
    for anchor in grid.coords() {
        for dir in Direction::ALL {
            if matches_direction(grid, anchor, dir, pattern) {
                out.push((anchor, dir));
            }
        }
    }
    out
}
