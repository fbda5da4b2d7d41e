//! Placement legality and terminal-line detection

use crate::board::{Board, Coord, Digit, Side};
use crate::error::{Error, Result};

/// All eight lines through the 3x3 grid, as flat cell indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A line wins when its three digits sum to exactly this.
pub const TARGET_SUM: u32 = 15;

/// Check that `side` may place `digit` at `at` on this board.
///
/// Checks run in a fixed order so callers report the most specific
/// objection: occupancy, then parity, then consumption. Bounds and digit
/// range are enforced by [`Coord`] and [`Digit`] construction.
///
/// # Errors
///
/// Returns [`Error::CellOccupied`], [`Error::WrongParity`], or
/// [`Error::DigitAlreadyUsed`].
pub fn check_placement(board: &Board, at: Coord, digit: Digit, side: Side) -> Result<()> {
    if !board.is_empty(at) {
        return Err(Error::CellOccupied {
            row: at.row() as u8,
            col: at.col() as u8,
        });
    }
    if !digit.playable_by(side) {
        return Err(Error::WrongParity {
            digit: digit.value(),
            side,
        });
    }
    if board.is_used(digit) {
        return Err(Error::DigitAlreadyUsed {
            digit: digit.value(),
        });
    }
    Ok(())
}

/// Boolean form of [`check_placement`].
pub fn is_legal_placement(board: &Board, at: Coord, digit: Digit, side: Side) -> bool {
    check_placement(board, at, digit, side).is_ok()
}

fn filled_line_sum(board: &Board, line: &[usize; 3]) -> Option<u32> {
    let cells = board.raw_cells();
    let mut sum = 0;
    for &index in line {
        sum += u32::from(cells[index]?.value());
    }
    Some(sum)
}

/// The first fully occupied line summing to [`TARGET_SUM`], if any, in
/// fixed scan order (rows, columns, diagonals).
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES
        .iter()
        .find(|line| filled_line_sum(board, line) == Some(TARGET_SUM))
        .copied()
}

/// Whether any line is complete and sums to [`TARGET_SUM`].
pub fn has_winning_line(board: &Board) -> bool {
    winning_line(board).is_some()
}

/// Credit a finished board to a side by digit-value majority.
///
/// Counts odd-valued against even-valued digits over the whole board; ODD
/// wins the credit only on a strict majority. 0 is even-valued, so a line
/// completed with the shared 0 can credit EVEN even when ODD placed it.
pub fn attribute_win(board: &Board) -> Side {
    let mut odd_valued = 0usize;
    let mut even_valued = 0usize;
    for cell in board.raw_cells().iter().flatten() {
        if cell.is_odd_valued() {
            odd_valued += 1;
        } else {
            even_valued += 1;
        }
    }
    if odd_valued > even_valued {
        Side::Odd
    } else {
        Side::Even
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    fn board_with_line(line: [usize; 3], values: [u8; 3]) -> Board {
        let mut board = Board::new();
        for (&index, &value) in line.iter().zip(values.iter()) {
            board
                .place(Coord::from_index(index).unwrap(), digit(value))
                .unwrap();
        }
        board
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let board = board_with_line(line, [2, 9, 4]);
            assert_eq!(winning_line(&board), Some(line), "line {line:?}");
            assert!(has_winning_line(&board));
        }
    }

    #[test]
    fn test_full_line_not_summing_fifteen_is_not_terminal() {
        let board = board_with_line([0, 1, 2], [1, 2, 3]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_partial_line_is_not_terminal() {
        // 7 + 8 = 15 but the row has an empty cell
        let board = board_with_line([0, 1, 2], [7, 8, 0]);
        let mut partial = Board::new();
        partial.place(coord(0, 0), digit(7)).unwrap();
        partial.place(coord(0, 1), digit(8)).unwrap();
        assert!(has_winning_line(&board));
        assert!(!has_winning_line(&partial));
    }

    #[test]
    fn test_sum_fifteen_off_line_is_not_terminal() {
        let mut board = Board::new();
        board.place(coord(0, 0), digit(2)).unwrap();
        board.place(coord(1, 1), digit(9)).unwrap();
        board.place(coord(2, 0), digit(4)).unwrap();
        assert!(!has_winning_line(&board));
    }

    #[test]
    fn test_zero_completed_line_is_terminal() {
        let board = board_with_line([2, 5, 8], [6, 9, 0]);
        assert!(has_winning_line(&board));
    }

    #[test]
    fn test_check_placement_order_occupied_before_parity() {
        let mut board = Board::new();
        board.place(coord(0, 0), digit(5)).unwrap();
        let result = check_placement(&board, coord(0, 0), digit(3), Side::Even);
        assert!(matches!(result, Err(Error::CellOccupied { row: 0, col: 0 })));
    }

    #[test]
    fn test_check_placement_order_parity_before_used() {
        let mut board = Board::new();
        board.place(coord(0, 0), digit(5)).unwrap();
        let result = check_placement(&board, coord(1, 1), digit(5), Side::Even);
        assert!(matches!(
            result,
            Err(Error::WrongParity {
                digit: 5,
                side: Side::Even
            })
        ));
    }

    #[test]
    fn test_check_placement_used_digit() {
        let mut board = Board::new();
        board.place(coord(0, 0), digit(5)).unwrap();
        let result = check_placement(&board, coord(1, 1), digit(5), Side::Odd);
        assert!(matches!(result, Err(Error::DigitAlreadyUsed { digit: 5 })));
    }

    #[test]
    fn test_zero_is_legal_for_both_sides_until_claimed() {
        let mut board = Board::new();
        assert!(is_legal_placement(&board, coord(0, 0), digit(0), Side::Odd));
        assert!(is_legal_placement(&board, coord(0, 0), digit(0), Side::Even));

        board.place(coord(0, 0), digit(0)).unwrap();
        let result = check_placement(&board, coord(1, 1), digit(0), Side::Even);
        assert!(matches!(result, Err(Error::DigitAlreadyUsed { digit: 0 })));
    }

    #[test]
    fn test_attribute_win_by_value_majority() {
        // 1, 5, 9 placed: three odd-valued digits
        let board = board_with_line([0, 1, 2], [1, 5, 9]);
        assert_eq!(attribute_win(&board), Side::Odd);

        // 2, 9, 4 placed: one odd-valued against two even-valued
        let board = board_with_line([3, 4, 5], [2, 9, 4]);
        assert_eq!(attribute_win(&board), Side::Even);
    }

    #[test]
    fn test_attribute_win_tie_goes_to_even() {
        let mut board = Board::new();
        board.place(coord(0, 0), digit(1)).unwrap();
        board.place(coord(0, 1), digit(2)).unwrap();
        assert_eq!(attribute_win(&board), Side::Even);
    }

    #[test]
    fn test_attribute_win_counts_zero_as_even_valued() {
        // ODD completes 6+9+0 but the values favor EVEN
        let board = board_with_line([2, 5, 8], [6, 9, 0]);
        assert_eq!(attribute_win(&board), Side::Even);
    }
}
