//! Board error types.

use crate::Mark;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMoveKind {
    /// The target cell already holds a mark.
    #[display("cell {} is already occupied by {}", index, occupant)]
    Occupied {
        /// Cell index (0-8).
        index: usize,
        /// Mark already sitting there.
        occupant: Mark,
    },
    /// The index does not name a cell.
    #[display("cell {} is off the board (must be 0-8)", index)]
    OutOfBounds {
        /// Offending index.
        index: usize,
    },
}

/// A move that the board cannot accept, with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Illegal move: {} at {}:{}", kind, file, line)]
pub struct IllegalMoveError {
    /// What was wrong with the move.
    pub kind: IllegalMoveKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl IllegalMoveError {
    /// Creates a new illegal move error, recording the caller location.
    #[track_caller]
    #[instrument]
    pub fn new(kind: IllegalMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The refused cell index.
    pub fn index(&self) -> usize {
        match self.kind {
            IllegalMoveKind::Occupied { index, .. } | IllegalMoveKind::OutOfBounds { index } => {
                index
            }
        }
    }
}

/// A raw cell value outside `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid cell value {} at index {}", value, index)]
pub struct InvalidCellError {
    /// Cell index (0-8).
    pub index: usize,
    /// The value found there.
    pub value: i8,
}
