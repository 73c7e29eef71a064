//! Rectangular game board.

use super::action::Move;
use super::types::{PlayerId, Role, Square};
use derive_more::{Display, Error};
use tracing::instrument;

/// Errors raised when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A board needs at least one row and one column.
    #[display("Board dimensions must be at least 1x1, got {rows}x{cols}")]
    ZeroDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Every row must have the same width.
    #[display("Row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// A `rows x cols` grid of squares.
///
/// Squares are stored in row-major order. Cells only change through move
/// application (`apply_input` for the human, `select_move` for the computer),
/// which never overwrites an occupied square.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board<P = Role> {
    rows: usize,
    cols: usize,
    squares: Vec<Square<P>>,
}

impl<P: PlayerId> Board<P> {
    /// Creates an empty board.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::ZeroDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            squares: vec![Square::Empty; rows * cols],
        })
    }

    /// Builds a board from a complete grid of squares.
    ///
    /// Useful for fixtures and for resuming a known position.
    #[instrument(skip(grid), fields(rows = grid.len()))]
    pub fn from_rows(grid: Vec<Vec<Square<P>>>) -> Result<Self, BoardError> {
        let rows = grid.len();
        let cols = grid.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(BoardError::ZeroDimension { rows, cols });
        }
        if let Some((row, found)) = grid
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != cols)
        {
            return Err(BoardError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Self {
            rows,
            cols,
            squares: grid.into_iter().flatten().collect(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the board has as many rows as columns.
    ///
    /// Diagonals only count as lines on square boards.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets the square at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Square<P>> {
        self.index(row, col).map(|i| self.squares[i])
    }

    /// Gets the square a move targets.
    pub fn at(&self, mv: Move) -> Option<Square<P>> {
        self.get(mv.row, mv.col)
    }

    /// Checks if a square is in bounds and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square<P>] {
        &self.squares
    }

    /// Iterates the board one row at a time.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Square<P>]> {
        self.squares.chunks(self.cols)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(i, _)| Move::new(i / self.cols, i % self.cols))
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Claims an empty cell for `player`.
    ///
    /// Callers validate bounds and occupancy first.
    pub(crate) fn place(&mut self, mv: Move, player: P) {
        let i = mv.row * self.cols + mv.col;
        debug_assert_eq!(self.squares[i], Square::Empty, "overwrote {mv}");
        self.squares[i] = Square::Occupied(player);
    }

    /// Places `player` at `mv`, runs `f` on the result, then restores the cell.
    ///
    /// The cell is empty again before this returns.
    pub(crate) fn probe<T>(&mut self, mv: Move, player: P, f: impl FnOnce(&Self) -> T) -> T {
        self.place(mv, player);
        let out = f(self);
        self.squares[mv.row * self.cols + mv.col] = Square::Empty;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::<Role>::new(3, 4).unwrap();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 4);
        assert!(!board.is_square());
        assert!(board.squares().iter().all(|sq| *sq == Square::Empty));
        assert_eq!(board.empty_cells().len(), 12);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Board::<Role>::new(0, 3),
            Err(BoardError::ZeroDimension { rows: 0, cols: 3 })
        );
        assert!(Board::<u8>::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let grid = vec![vec![Square::Empty; 3], vec![Square::Empty; 2]];
        assert_eq!(
            Board::<u8>::from_rows(grid),
            Err(BoardError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::<Role>::new(2, 2).unwrap();
        assert_eq!(board.get(0, 1), Some(Square::Empty));
        assert_eq!(board.get(2, 0), None);
        assert_eq!(board.get(0, 2), None);
        assert!(!board.is_empty(5, 5));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new(2, 2).unwrap();
        board.place(Move::new(0, 1), Role::Human);
        assert_eq!(
            board.empty_cells(),
            vec![Move::new(0, 0), Move::new(1, 0), Move::new(1, 1)]
        );
    }

    #[test]
    fn test_probe_restores_cell() {
        let mut board = Board::new(3, 3).unwrap();
        let before = board.clone();
        let seen = board.probe(Move::new(1, 1), 7u8, |b| b.get(1, 1));
        assert_eq!(seen, Some(Square::Occupied(7)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_rows_iter_widths() {
        let board = Board::<Role>::new(3, 2).unwrap();
        let widths: Vec<_> = board.rows_iter().map(<[_]>::len).collect();
        assert_eq!(widths, vec![2, 2, 2]);
    }
}
