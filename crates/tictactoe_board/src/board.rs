//! The immutable 3x3 board.

use crate::error::{IllegalMoveError, IllegalMoveKind, InvalidCellError};
use crate::rules;
use crate::{Mark, Square};
use std::fmt;
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order (0-8). The board is a value type:
/// [`Board::apply`] returns a new board and never touches the receiver, so
/// boards can be kept, compared and hashed freely (the learning agent keys
/// its value table on them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the square at the given index, `None` when off the board.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Off-board indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Indices of the empty cells, ascending.
    pub fn allowed_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Places `mark` at `index`, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] when the cell is occupied or `index`
    /// is not in `0..9`.
    #[instrument(level = "trace", skip(self))]
    pub fn apply(&self, index: usize, mark: Mark) -> Result<Board, IllegalMoveError> {
        match self.get(index) {
            None => Err(IllegalMoveError::new(IllegalMoveKind::OutOfBounds { index })),
            Some(Square::Occupied(occupant)) => Err(IllegalMoveError::new(
                IllegalMoveKind::Occupied { index, occupant },
            )),
            Some(Square::Empty) => {
                let mut next = *self;
                next.squares[index] = Square::Occupied(mark);
                Ok(next)
            }
        }
    }

    /// True iff `mark` has completed one of the 8 lines.
    pub fn is_winner(&self, mark: Mark) -> bool {
        rules::is_winner(self, mark)
    }

    /// The mark that completed a line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True when either side has won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.is_winner(Mark::O) || self.is_winner(Mark::X) || self.is_full()
    }

    /// The same position with every mark swapped.
    pub fn negated(&self) -> Board {
        Board {
            squares: self.squares.map(Square::negated),
        }
    }

    /// Numeric encoding of every cell: `+1` for `O`, `-1` for `X`, `0` empty.
    pub fn values(&self) -> [i8; CELLS] {
        self.squares.map(Square::value)
    }
}

impl TryFrom<[i8; CELLS]> for Board {
    type Error = InvalidCellError;

    fn try_from(values: [i8; CELLS]) -> Result<Self, Self::Error> {
        let mut squares = [Square::Empty; CELLS];
        for (index, (square, &value)) in squares.iter_mut().zip(values.iter()).enumerate() {
            *square = match value {
                0 => Square::Empty,
                v => Square::Occupied(
                    Mark::from_value(v).ok_or(InvalidCellError { index, value })?,
                ),
            };
        }
        Ok(Self { squares })
    }
}

impl fmt::Display for Board {
    /// Renders the grid with `o`/`x` for marks and the index for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "+-+-+-+";
        writeln!(f, "{RULE}")?;
        for (r, cells) in self.squares.chunks(3).enumerate() {
            write!(f, "|")?;
            for (c, square) in cells.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}|", r * 3 + c)?,
                    Square::Occupied(mark) => write!(f, "{mark}|")?,
                }
            }
            writeln!(f)?;
            write!(f, "{RULE}")?;
            if r < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.allowed_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.values(), [0; 9]);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_apply_does_not_mutate_receiver() {
        let board = Board::new();
        let next = board.apply(4, Mark::X).expect("empty cell");
        assert_eq!(board, Board::new());
        assert_eq!(next.get(4), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let err = Board::new().apply(9, Mark::O).unwrap_err();
        assert_eq!(err.kind, IllegalMoveKind::OutOfBounds { index: 9 });
        assert_eq!(err.index(), 9);
    }

    #[test]
    fn test_apply_occupied_reports_occupant() {
        let board = Board::new().apply(0, Mark::X).expect("empty cell");
        let err = board.apply(0, Mark::O).unwrap_err();
        assert_eq!(
            err.kind,
            IllegalMoveKind::Occupied {
                index: 0,
                occupant: Mark::X
            }
        );
    }

    #[test]
    fn test_try_from_rejects_bad_values() {
        let err = Board::try_from([0, 0, 2, 0, 0, 0, 0, 0, 0]).unwrap_err();
        assert_eq!(err, InvalidCellError { index: 2, value: 2 });
    }

    #[test]
    fn test_values_round_trip() {
        let raw = [1, 1, 0, -1, -1, 0, 0, 0, 0];
        let board = Board::try_from(raw).expect("valid cells");
        assert_eq!(board.values(), raw);
    }

    #[test]
    fn test_negated_swaps_marks() {
        let board = Board::try_from([1, -1, 0, 0, 1, 0, 0, 0, -1]).expect("valid cells");
        assert_eq!(board.negated().values(), [-1, 1, 0, 0, -1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_display_grid() {
        let board = Board::try_from([1, 0, 0, 0, -1, 0, 0, 0, 0]).expect("valid cells");
        let expected = "\
+-+-+-+
|o|1|2|
+-+-+-+
|3|x|5|
+-+-+-+
|6|7|8|
+-+-+-+";
        assert_eq!(board.to_string(), expected);
    }
}
