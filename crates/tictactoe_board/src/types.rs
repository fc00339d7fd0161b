//! Marks and squares.

use strum::{Display, EnumIter};

/// Side in the game.
///
/// `O` is encoded as `+1` and always moves first, `X` is encoded as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Mark {
    /// First player, `+1`.
    #[strum(serialize = "o")]
    O,
    /// Second player, `-1`.
    #[strum(serialize = "x")]
    X,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    /// Numeric encoding: `+1` for `O`, `-1` for `X`.
    pub fn value(self) -> i8 {
        match self {
            Mark::O => 1,
            Mark::X => -1,
        }
    }

    /// Decodes `+1`/`-1`; anything else is not a mark.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            1 => Some(Mark::O),
            -1 => Some(Mark::X),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Taken by a mark.
    Occupied(Mark),
}

impl Square {
    /// Numeric encoding: `0` for empty, otherwise the mark's value.
    pub fn value(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(mark) => mark.value(),
        }
    }

    /// Swaps the occupying mark, leaving empty squares alone.
    pub fn negated(self) -> Self {
        match self {
            Square::Empty => Square::Empty,
            Square::Occupied(mark) => Square::Occupied(mark.opponent()),
        }
    }
}
