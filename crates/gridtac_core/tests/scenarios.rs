//! Worked examples on the 3x3 board (computer = 1, human = 2, empty = 0).

use gridtac_core::{
    Board, GreedySelector, InputError, MatchController, MatchResult, Move, Presenter,
    PresenterError, Role, Square, apply_input, check_winner,
};

fn grid(rows: &[&[u8]]) -> Board<u8> {
    Board::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|&v| Square::from((v != 0).then_some(v))).collect())
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_middle_row_wins() {
    let board = grid(&[&[1, 2, 1], &[1, 1, 1], &[2, 1, 2]]);
    assert_eq!(check_winner(&board), Some(1));
}

#[test]
fn test_column_d_is_out_of_bounds() {
    let mut board = grid(&[&[1, 2, 1], &[0, 1, 1], &[1, 1, 2]]);
    let before = board.clone();
    assert_eq!(
        apply_input("1D", &mut board, 2),
        Err(InputError::ColOutOfBounds { cols: 3 })
    );
    assert_eq!(board, before);
}

#[test]
fn test_taken_cell_is_occupied() {
    let mut board = grid(&[&[1, 2, 1], &[0, 1, 1], &[1, 1, 2]]);
    let before = board.clone();
    assert_eq!(
        apply_input("1b", &mut board, 1),
        Err(InputError::Occupied(Move::new(0, 1)))
    );
    assert_eq!(board, before);
}

#[test]
fn test_computer_completes_column() {
    let mut board = grid(&[&[2, 0, 1], &[2, 0, 1], &[0, 0, 0]]);
    let mv = GreedySelector::seeded(11).select(&mut board, 1, 2).unwrap();
    assert_eq!(mv, Move::new(2, 2));
    assert_eq!(check_winner(&board), Some(1));
}

#[test]
fn test_computer_blocks_column() {
    let mut board = grid(&[&[0, 0, 1], &[0, 0, 1], &[0, 0, 0]]);
    let mv = GreedySelector::seeded(11).select(&mut board, 2, 1).unwrap();
    assert_eq!(mv, Move::new(2, 2));
    assert_eq!(board.get(2, 2), Some(Square::Occupied(2)));
    assert_eq!(check_winner(&board), None);
}

/// Types whatever lines it was given, in order.
struct Lines(Vec<&'static str>);

impl Presenter<Role> for Lines {
    fn prompt_move(&mut self, _: &Board<Role>, _: Role) -> Result<String, PresenterError> {
        if self.0.is_empty() {
            return Err(PresenterError::new("no more input"));
        }
        Ok(self.0.remove(0).to_string())
    }
}

#[test]
fn test_filled_board_without_line_is_a_tie() {
    let c = Square::Occupied(Role::Computer);
    let h = Square::Occupied(Role::Human);
    let e = Square::Empty;
    let mut board = Board::from_rows(vec![vec![c, h, c], vec![c, h, e], vec![h, c, e]]).unwrap();

    let mut controller =
        MatchController::new(Role::Computer, Role::Human, GreedySelector::seeded(5));
    let result = controller
        .run(&mut board, Role::Human, &mut Lines(vec!["c2"]))
        .unwrap();

    assert_eq!(result, MatchResult::Tie);
    assert_eq!(board.get(2, 2), Some(c));
}
