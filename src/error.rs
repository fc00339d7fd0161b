//! Error types for matches and configuration.

use derive_more::{Display, Error, From};
use tictactoe_board::IllegalMoveError;
use tracing::instrument;

/// Why a match could not advance.
#[derive(Debug, Clone, Display, Error, From)]
pub enum MatchError {
    /// A participant picked a cell the board refused. The match is abandoned.
    #[display("{}", _0)]
    #[from]
    IllegalMove(IllegalMoveError),

    /// A participant failed while choosing its move.
    #[display("{}", _0)]
    #[from]
    Participant(ParticipantError),

    /// `do_turn` was called before `start`.
    #[display("Match has not been started")]
    NotStarted,

    /// `do_turn` was called on a finished match.
    #[display("Match is already over")]
    MatchOver,

    /// The participant in `seat` produced no move (e.g. its input closed).
    #[display("Participant in seat {} produced no move", seat)]
    NoMove {
        /// Seat (0 or 1) of the participant whose turn it was.
        seat: usize,
    },

    /// Self-play was asked to run with fewer than two participants.
    #[display("Self-play needs at least two participants, got {}", size)]
    RosterTooSmall {
        /// Number of participants supplied.
        size: usize,
    },
}

/// A participant could not produce a move, e.g. its input failed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Participant error: {} at {}:{}", message, file, line)]
pub struct ParticipantError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParticipantError {
    /// Creates a new participant error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
