/// A cell address in a [`Grid`](super::Grid): row index, then column index.
///
/// `(0, 0)` is the top-left cell; a coordinate only means something relative
/// to the grid it indexes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
