//! Hooks for watching an agent think.

use tictactoe_board::Board;
use tracing::info;

/// Receives the agent's intermediate decisions.
///
/// All methods default to doing nothing. Boards passed here are canonical
/// (the agent's own mark shown as `o`).
pub trait DecisionObserver {
    /// Candidate moves with their values, best first, before exploration.
    fn on_candidates(&mut self, _agent: &str, _board: &Board, _ranked: &[(usize, f64)]) {}

    /// The move actually returned and whether it was an exploration draw.
    fn on_choice(&mut self, _agent: &str, _index: usize, _explored: bool) {}

    /// Reward and updated value after a transition.
    fn on_update(&mut self, _agent: &str, _reward: f64, _value: f64) {}
}

/// Logs every decision at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DecisionObserver for TracingObserver {
    fn on_candidates(&mut self, agent: &str, _board: &Board, ranked: &[(usize, f64)]) {
        for (index, value) in ranked {
            info!(agent, index, value, "Candidate move");
        }
    }

    fn on_choice(&mut self, agent: &str, index: usize, explored: bool) {
        info!(agent, index, explored, "Move chosen");
    }

    fn on_update(&mut self, agent: &str, reward: f64, value: f64) {
        info!(agent, reward, value, "Value updated");
    }
}
