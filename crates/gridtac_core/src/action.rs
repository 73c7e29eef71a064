//! Move coordinates.

/// A zero-based `(row, col)` target on the board.
///
/// Displays as the cell name a person would type: column letter followed by
/// the 1-based row, so `Move::new(2, 0)` renders as `A3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Column letter for this move, `A` for column 0.
    ///
    /// Columns past `Z` have no letter and fall back to `?`.
    pub fn column_letter(&self) -> char {
        u8::try_from(self.col)
            .ok()
            .filter(|c| *c < 26)
            .map(|c| char::from(b'A' + c))
            .unwrap_or('?')
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_name() {
        assert_eq!(Move::new(0, 0).to_string(), "A1");
        assert_eq!(Move::new(2, 2).to_string(), "C3");
        assert_eq!(Move::new(9, 1).to_string(), "B10");
    }

    #[test]
    fn test_column_past_alphabet() {
        assert_eq!(Move::new(0, 26).column_letter(), '?');
    }
}
