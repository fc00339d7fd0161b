//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning lines as cell indices.
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

/// Checks whether `mark` holds all three cells of any line.
#[instrument(level = "trace")]
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    let target = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.squares()[i] == target))
}

/// Returns the mark that completed a line, if any.
///
/// Only one side can complete a line in a legal game; on a hand-built board
/// where both have, `O` is reported.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::O, Mark::X]
        .into_iter()
        .find(|&mark| is_winner(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, cells: &[usize]) -> Board {
        cells
            .iter()
            .try_fold(Board::new(), |b, &i| b.apply(i, mark))
            .expect("cells are distinct")
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!is_winner(&board, Mark::O));
        assert!(!is_winner(&board, Mark::X));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Mark::X, &line);
            assert!(is_winner(&board, Mark::X), "line {line:?}");
            assert!(!is_winner(&board, Mark::O), "line {line:?}");
            assert_eq!(winner(&board), Some(Mark::X));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::O, &[0, 1]);
        assert!(!is_winner(&board, Mark::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(Mark::O, &[0, 1])
            .apply(2, Mark::X)
            .expect("cell 2 is empty");
        assert_eq!(winner(&board), None);
    }
}
