//! X-shaped cross search: two three-character diagonals crossing at a pivot.

use crate::grid::coord::Coord;
use crate::grid::direction::Direction;
use crate::grid::Grid;

use super::scan;

/// Is `pivot` the center of an X whose two diagonal arms each read as `a` or
/// `b`?
///
/// A pivot on the outer border lacks one of its four diagonal neighbors and
/// is disqualified before any characters are compared. The arms are checked
/// independently: one may read `a` while the other reads `b`, and both may
/// read the same sequence.
pub fn is_cross_at(grid: &Grid, pivot: Coord, a: [char; 3], b: [char; 3]) -> bool {
    let Some(up_left) = grid.step(pivot, Direction::UpLeft) else {
        return false;
    };
    let Some(up_right) = grid.step(pivot, Direction::UpRight) else {
        return false;
    };
    let Some(down_left) = grid.step(pivot, Direction::DownLeft) else {
        return false;
    };
    let Some(down_right) = grid.step(pivot, Direction::DownRight) else {
        return false;
    };

    let center = grid.get(pivot);
    let main = [grid.get(up_left), center, grid.get(down_right)];
    let anti = [grid.get(up_right), center, grid.get(down_left)];

    (main == a || main == b) && (anti == a || anti == b)
}

/// Total number of X-shaped crossings of `a`/`b` over the whole grid.
pub fn count_crosses(grid: &Grid, a: [char; 3], b: [char; 3]) -> usize {
    scan(grid, |g, coord| usize::from(is_cross_at(g, coord, a, b)))
}
