//! Pattern searches over a character grid.
//!
//! Two searches share one driver: [`word`] reads a pattern off the grid along
//! a fixed compass direction, [`cross`] looks for two three-character
//! diagonals crossing at a pivot. [`scan`] is the full-grid pass both use.

pub mod cross;
pub mod word;

use crate::grid::coord::Coord;
use crate::grid::Grid;

/// Visit every cell in row-major order and sum the per-cell contributions.
///
/// Cells are evaluated independently: overlapping matches anchored at
/// different cells all count, and scanning the same grid twice returns the
/// same total.
pub fn scan(grid: &Grid, mut per_cell: impl FnMut(&Grid, Coord) -> usize) -> usize {
    grid.coords().map(|coord| per_cell(grid, coord)).sum()
}
