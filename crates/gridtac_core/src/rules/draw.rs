//! Full-board detection.

use crate::{Board, PlayerId, Square};
use tracing::instrument;

/// Checks if the board is full (no empty squares).
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_full<P: PlayerId>(board: &Board<P>) -> bool {
    board.squares().iter().all(|sq| *sq != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::<u8>::new(3, 3).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_two_by_two() {
        let board = Board::from_rows(vec![
            vec![Square::Occupied(1u8), Square::Occupied(2)],
            vec![Square::Occupied(4), Square::Occupied(1)],
        ])
        .unwrap();
        assert!(is_full(&board));
    }

    #[test]
    fn test_one_gap_not_full() {
        let board = Board::from_rows(vec![
            vec![Square::Occupied(1u8), Square::Empty],
            vec![Square::Occupied(4), Square::Occupied(1)],
        ])
        .unwrap();
        assert!(!is_full(&board));
    }
}
