//! A dense rectangular character grid with boundary-safe stepping.
//!
//! The grid is immutable after construction and stores its cells in one flat
//! row-major `Vec`, so `Coord -> char` lookup is O(1). All traversal goes
//! through [`Grid::step`], which reports "no neighbor" at the edges instead of
//! erroring; running off the board is the common case for a search, not a
//! failure.

pub mod coord;
pub mod direction;

use thiserror::Error;

use self::coord::Coord;
use self::direction::Direction;

/// Why a block of text could not become a [`Grid`].
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid input is empty")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A rectangular grid of single characters, one code point per cell.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from lines of text, one row per line.
    ///
    /// Every row must have the same number of characters; ragged or empty
    /// input is rejected.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for line in lines {
            let line = line.as_ref();
            let len = line.chars().count();
            if height == 0 {
                width = len;
            } else if len != width {
                return Err(GridError::RaggedRow {
                    row: height,
                    len,
                    expected: width,
                });
            }
            cells.extend(line.chars());
            height += 1;
        }

        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn from_text(text: &str) -> Result<Self, GridError> {
        Self::from_lines(text.lines())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The character at `coord`.
    ///
    /// Calling this with a coordinate outside the grid is a contract
    /// violation and panics; walkers stay in bounds by going through
    /// [`Grid::step`] first.
    #[inline]
    pub fn get(&self, coord: Coord) -> char {
        debug_assert!(
            coord.row < self.height && coord.col < self.width,
            "coordinate {coord:?} outside {}x{} grid",
            self.height,
            self.width
        );
        self.cells[coord.row * self.width + coord.col]
    }

    /// The neighboring coordinate one step away in `dir`, or `None` if that
    /// step would leave the grid.
    #[inline]
    pub fn step(&self, from: Coord, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = from.row.checked_add_signed(dr)?;
        let col = from.col.checked_add_signed(dc)?;
        if row < self.height && col < self.width {
            Some(Coord::new(row, col))
        } else {
            None
        }
    }

    /// Every coordinate in row-major order (top-to-bottom, left-to-right).
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coord::new(row, col)))
    }
}
