//! Pure tic-tac-toe board logic.
//!
//! The [`Board`] is a small `Copy` value: every move produces a new board
//! and the previous one is left untouched. Rules (lines, wins, full board)
//! live in [`rules`] so they can be used on raw boards as well.
//!
//! ```
//! use tictactoe_board::{Board, Mark};
//!
//! let board = Board::new().apply(4, Mark::O)?;
//! assert_eq!(board.allowed_moves().len(), 8);
//! assert!(!board.is_terminal());
//! # Ok::<(), tictactoe_board::IllegalMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod rules;
mod types;

pub use board::{Board, CELLS};
pub use error::{IllegalMoveError, IllegalMoveKind, InvalidCellError};
pub use types::{Mark, Square};
