//! Human player that reads moves from a line-oriented input.

use crate::{Participant, ParticipantError};
use std::fmt::Display;
use std::io::{self, BufRead, Stdout, Write};
use tictactoe_board::{Board, Mark};
use tracing::{debug, warn};

/// Human participant using text input.
///
/// Renders the board on `output` and reads a cell index (0-8) from `input`
/// until a legal one arrives. Anything else is silently asked again. End of
/// input makes [`choose_move`](Participant::choose_move) return `Ok(None)`;
/// a failing input stream is reported as a [`ParticipantError`].
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    mark: Option<Mark>,
}

impl HumanPlayer<io::StdinLock<'static>, Stdout> {
    /// Human at the terminal.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over arbitrary streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            mark: None,
        }
    }

    /// Consumes the player, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, message: impl Display) {
        if let Err(e) = writeln!(self.output, "{message}").and_then(|()| self.output.flush()) {
            warn!(error = %e, "Failed to write to player output");
        }
    }

    fn prompt(&mut self, board: &Board) {
        let rendered = format!("{board}\n0...8\n>");
        if let Err(e) = write!(self.output, "{rendered}").and_then(|()| self.output.flush()) {
            warn!(error = %e, "Failed to write to player output");
        }
    }

    fn announce(&mut self, headline: &str, board: &Board) {
        self.say(headline);
        self.say(board);
    }
}

/// Parses a selection, accepting it only if it names an empty cell.
fn parse_selection(line: &str, board: &Board) -> Option<usize> {
    let index = line.trim().parse::<usize>().ok()?;
    board.is_empty(index).then_some(index)
}

impl<R: BufRead, W: Write> Participant for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn assign_mark(&mut self, mark: Mark) {
        self.mark = Some(mark);
        self.say(format!("You are {mark}"));
    }

    fn mark(&self) -> Option<Mark> {
        self.mark
    }

    fn choose_move(&mut self, board: &Board) -> Result<Option<usize>, ParticipantError> {
        let mut line = String::new();
        loop {
            self.prompt(board);
            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    debug!(player = %self.name, "Input closed");
                    return Ok(None);
                }
                Ok(_) => {
                    if let Some(index) = parse_selection(&line, board) {
                        return Ok(Some(index));
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {}
                Err(e) => {
                    return Err(ParticipantError::new(format!(
                        "Failed to read input for {}: {}",
                        self.name, e
                    )));
                }
            }
        }
    }

    fn observe_transition(&mut self, _old: &Board, _new: &Board) {}

    fn on_win(&mut self, board: &Board) {
        self.announce("you win", board);
    }

    fn on_lose(&mut self, board: &Board) {
        self.announce("you lose", board);
    }

    fn on_draw(&mut self, board: &Board) {
        self.announce("draw", board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn player(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new("human", Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_selection() {
        let board = Board::new().apply(4, Mark::O).expect("empty cell");
        assert_eq!(parse_selection("3\n", &board), Some(3));
        assert_eq!(parse_selection("  8 ", &board), Some(8));
        assert_eq!(parse_selection("4", &board), None);
        assert_eq!(parse_selection("9", &board), None);
        assert_eq!(parse_selection("-1", &board), None);
        assert_eq!(parse_selection("centre", &board), None);
    }

    #[test]
    fn test_reprompts_until_legal() {
        let board = Board::new().apply(0, Mark::X).expect("empty cell");
        let mut human = player("abc\n\n12\n0\n5\n");
        assert_eq!(human.choose_move(&board), Ok(Some(5)));
        let (_, output) = human.into_inner();
        let output = String::from_utf8(output).expect("utf8");
        // one prompt per line read
        assert_eq!(output.matches("0...8").count(), 5);
        assert!(output.contains("|x|1|2|"));
    }

    #[test]
    fn test_end_of_input_gives_no_move() {
        let mut human = player("nope\n");
        assert_eq!(human.choose_move(&Board::new()), Ok(None));
    }

    struct FailingInput;

    impl io::Read for FailingInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "terminal went away"))
        }
    }

    #[test]
    fn test_read_failure_is_an_error() {
        let mut human = HumanPlayer::new("human", io::BufReader::new(FailingInput), Vec::new());
        let err = human.choose_move(&Board::new()).unwrap_err();
        assert!(err.message.contains("terminal went away"), "{}", err);
    }

    #[test]
    fn test_announcements() {
        let mut human = player("");
        human.assign_mark(Mark::X);
        assert_eq!(human.mark(), Some(Mark::X));
        let board = Board::try_from([-1, -1, -1, 1, 1, 0, 0, 0, 0]).expect("valid cells");
        human.on_win(&board);
        human.on_lose(&board);
        human.on_draw(&board);
        let (_, output) = human.into_inner();
        let output = String::from_utf8(output).expect("utf8");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "You are x");
        assert_eq!(lines[1], "you win");
        assert_eq!(lines[2], "+-+-+-+");
        assert_eq!(lines[3], "|x|x|x|");
        assert!(output.contains("you lose"));
        assert!(output.contains("draw"));
    }
}
