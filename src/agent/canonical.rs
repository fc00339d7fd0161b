//! Perspective normalization.

use tictactoe_board::{Board, Mark};

/// Re-expresses `board` from `mark`'s point of view.
///
/// For `O` the board is returned unchanged; for `X` every mark is swapped,
/// so the evaluating side always appears as `O` (+1). One value table can
/// then serve an agent whichever side it plays. Applying the conversion
/// twice for `X` gives back the original board.
pub fn canonicalize(board: &Board, mark: Mark) -> Board {
    match mark {
        Mark::O => *board,
        Mark::X => board.negated(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_o_sees_board_unchanged() {
        let board = Board::try_from([1, -1, 0, 0, 0, 0, 0, 0, 0]).expect("valid cells");
        assert_eq!(canonicalize(&board, Mark::O), board);
    }

    #[test]
    fn test_x_sees_own_pieces_as_o() {
        let board = Board::try_from([1, -1, 0, 0, 0, 0, 0, 0, 0]).expect("valid cells");
        let canonical = canonicalize(&board, Mark::X);
        assert_eq!(canonical.values(), [-1, 1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_x_conversion_is_an_involution() {
        let board = Board::try_from([1, -1, 1, 0, -1, 0, 0, 0, 0]).expect("valid cells");
        let twice = canonicalize(&canonicalize(&board, Mark::X), Mark::X);
        assert_eq!(twice, board);
    }
}
