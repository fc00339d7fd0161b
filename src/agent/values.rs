//! State-value storage.

use std::collections::HashMap;
use tictactoe_board::Board;

/// Maps canonical boards to learned value estimates.
///
/// Unseen boards read as `0.0`. Entries are only ever added or
/// overwritten, never removed.
#[derive(Debug, Clone, Default)]
pub struct ValueTable {
    values: HashMap<Board, f64>,
}

impl ValueTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `board`, `0.0` if it was never written.
    pub fn get(&self, board: &Board) -> f64 {
        self.values.get(board).copied().unwrap_or(0.0)
    }

    /// Overwrites the value for `board`.
    pub fn set(&mut self, board: Board, value: f64) {
        self.values.insert(board, value);
    }

    /// Constant step-size update toward `target`:
    /// `V ← (1 - alpha)·V + alpha·target`. Returns the new value.
    pub fn update(&mut self, board: Board, target: f64, alpha: f64) -> f64 {
        let entry = self.values.entry(board).or_insert(0.0);
        *entry = (1.0 - alpha) * *entry + alpha * target;
        *entry
    }

    /// Largest value among `boards`, `None` when there are none.
    pub fn max_of(&self, boards: impl IntoIterator<Item = Board>) -> Option<f64> {
        boards
            .into_iter()
            .map(|b| self.get(&b))
            .reduce(f64::max)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing has been learned yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over stored entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Board, &f64)> {
        self.values.iter()
    }
}
