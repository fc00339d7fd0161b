//! Participant trait shared by the learning agent and the human player.

use crate::ParticipantError;
use tictactoe_board::{Board, Mark};

/// Anything that can sit at the board for a match.
///
/// The controller drives every method; participants never call each other.
/// Both seats see every transition through [`observe_transition`], not only
/// their own moves.
///
/// [`observe_transition`]: Participant::observe_transition
pub trait Participant {
    /// Returns the participant's display name.
    fn name(&self) -> &str;

    /// Sets the side for the upcoming match.
    fn assign_mark(&mut self, mark: Mark);

    /// The side assigned for the current match, if any.
    fn mark(&self) -> Option<Mark>;

    /// Picks a cell index (0-8) to play on `board`.
    ///
    /// Returns `Ok(None)` when the participant has no move to offer, which
    /// the controller reports as [`MatchError::NoMove`](crate::MatchError::NoMove).
    ///
    /// # Errors
    ///
    /// Returns [`ParticipantError`] when the move could not be obtained,
    /// e.g. the human's input stream failed.
    fn choose_move(&mut self, board: &Board) -> Result<Option<usize>, ParticipantError>;

    /// Called for every half-move of the match with the boards before and after.
    fn observe_transition(&mut self, old: &Board, new: &Board);

    /// The participant's mark completed a line.
    fn on_win(&mut self, _board: &Board) {}

    /// The opponent completed a line.
    fn on_lose(&mut self, _board: &Board) {}

    /// The board filled up with no line.
    fn on_draw(&mut self, _board: &Board) {}
}
