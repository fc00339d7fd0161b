//! Turn sequencing between two participants.

use crate::{MatchError, Participant};
use rand::Rng;
use tictactoe_board::{Board, Mark};
use tracing::{debug, instrument, warn};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// No match running; call [`Controller::start`].
    Idle,
    /// Moves are being played.
    InProgress,
    /// The last move won or filled the board.
    Terminal,
}

/// How a match ended.
///
/// `winner` is the roster index (0 for the participant passed first to
/// [`Controller::new`], 1 for the second), independent of seating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// One side completed a line.
    Won {
        /// Roster index of the winner.
        winner: usize,
        /// Mark the winner played.
        mark: Mark,
    },
    /// The board filled with no line.
    Draw,
}

/// Drives matches between two borrowed participants.
///
/// Seat 0 always plays `O` and moves first; [`shuffle`](Self::shuffle)
/// decides who sits where. The controller checks phases, but it is up to
/// the caller to stop calling [`do_turn`](Self::do_turn) once
/// [`is_end`](Self::is_end) is true.
pub struct Controller<'a, R> {
    seats: [&'a mut dyn Participant; 2],
    /// Roster index of the participant in each seat.
    roster: [usize; 2],
    rng: R,
    phase: MatchPhase,
    board: Board,
    turn: usize,
    to_play: Mark,
}

impl<'a, R: Rng> Controller<'a, R> {
    /// Creates a controller; `first` is roster index 0 and starts in seat 0.
    pub fn new(first: &'a mut dyn Participant, second: &'a mut dyn Participant, rng: R) -> Self {
        Self {
            seats: [first, second],
            roster: [0, 1],
            rng,
            phase: MatchPhase::Idle,
            board: Board::new(),
            turn: 0,
            to_play: Mark::O,
        }
    }

    /// Swaps the two seats with probability one half.
    pub fn shuffle(&mut self) {
        if self.rng.random_bool(0.5) {
            self.seats.swap(0, 1);
            self.roster.swap(0, 1);
        }
    }

    /// Begins a fresh match: empty board, seat 0 plays `O`, seat 1 plays `X`.
    #[instrument(level = "debug", skip(self), fields(o = %self.seats[0].name(), x = %self.seats[1].name()))]
    pub fn start(&mut self) {
        self.board = Board::new();
        self.turn = 0;
        self.to_play = Mark::O;
        self.seats[0].assign_mark(Mark::O);
        self.seats[1].assign_mark(Mark::X);
        self.phase = MatchPhase::InProgress;
        debug!("Match started");
    }

    /// True once the current board is won or full.
    pub fn is_end(&self) -> bool {
        self.board.is_terminal()
    }

    /// Plays one half-move.
    ///
    /// Returns the outcome when this move ended the match.
    ///
    /// # Errors
    ///
    /// - [`MatchError::NotStarted`] before [`start`](Self::start)
    /// - [`MatchError::MatchOver`] once the board is terminal
    /// - [`MatchError::NoMove`] if the participant to move offers nothing
    /// - [`MatchError::Participant`] if the participant to move fails
    /// - [`MatchError::IllegalMove`] if it picks an occupied cell; the match
    ///   is abandoned and the phase returns to idle
    #[instrument(level = "debug", skip(self), fields(turn = self.turn, mark = %self.to_play))]
    pub fn do_turn(&mut self) -> Result<Option<MatchOutcome>, MatchError> {
        match self.phase {
            MatchPhase::Idle => return Err(MatchError::NotStarted),
            MatchPhase::Terminal => return Err(MatchError::MatchOver),
            MatchPhase::InProgress if self.board.is_terminal() => {
                self.phase = MatchPhase::Terminal;
                return Err(MatchError::MatchOver);
            }
            MatchPhase::InProgress => {}
        }

        let seat = self.turn % 2;
        let other = 1 - seat;
        let index = self.seats[seat]
            .choose_move(&self.board)?
            .ok_or(MatchError::NoMove { seat })?;

        let old = self.board;
        let new = match old.apply(index, self.to_play) {
            Ok(board) => board,
            Err(e) => {
                warn!(error = %e, player = %self.seats[seat].name(), "Illegal move, abandoning match");
                self.phase = MatchPhase::Idle;
                return Err(e.into());
            }
        };
        debug!(player = %self.seats[seat].name(), index, "Move played");

        for participant in self.seats.iter_mut() {
            participant.observe_transition(&old, &new);
        }

        let outcome = if new.is_winner(self.to_play) {
            self.seats[seat].on_win(&new);
            self.seats[other].on_lose(&new);
            Some(MatchOutcome::Won {
                winner: self.roster[seat],
                mark: self.to_play,
            })
        } else if new.is_terminal() {
            self.seats[seat].on_draw(&new);
            self.seats[other].on_draw(&new);
            Some(MatchOutcome::Draw)
        } else {
            None
        };

        self.board = new;
        self.turn += 1;
        self.to_play = self.to_play.opponent();

        if let Some(outcome) = outcome {
            self.phase = MatchPhase::Terminal;
            debug!(?outcome, turns = self.turn, "Match finished");
        }
        Ok(outcome)
    }

    /// Shuffles seats, starts a match and plays it to the end.
    #[instrument(level = "debug", skip(self))]
    pub fn run_match(&mut self) -> Result<MatchOutcome, MatchError> {
        self.shuffle();
        self.start();
        loop {
            if let Some(outcome) = self.do_turn()? {
                return Ok(outcome);
            }
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Half-moves played in the current match.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Mark that moves next.
    pub fn mark_to_play(&self) -> Mark {
        self.to_play
    }

    /// Current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Roster index of the participant sitting in `seat` (0 or 1).
    pub fn roster_index(&self, seat: usize) -> Option<usize> {
        self.roster.get(seat).copied()
    }

    /// Display name of the participant sitting in `seat` (0 or 1).
    pub fn seat_name(&self, seat: usize) -> Option<&str> {
        self.seats.get(seat).map(|p| p.name())
    }
}
