//! The learning agent.

use super::{DecisionObserver, ValueTable, canonicalize};
use crate::{Participant, ParticipantError};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::fmt;
use tictactoe_board::{Board, Mark};
use tracing::{debug, instrument, trace, warn};

/// Reward for a transition that completes a line for the agent.
pub const WIN_REWARD: f64 = 100.0;

/// Reward for a transition that completes a line for the opponent.
pub const LOSS_REWARD: f64 = -100.0;

/// Reward for every other transition, including the one that draws.
pub const STEP_REWARD: f64 = 1.0;

/// Probability of playing a uniformly random legal move.
pub const DEFAULT_EXPLORATION: f64 = 0.05;

/// ε-greedy player with a tabular state-value function.
///
/// Every board the agent looks at is first rewritten from its own
/// perspective with [`canonicalize`], so one [`ValueTable`] serves both
/// sides. Values are updated in [`Participant::observe_transition`]:
///
/// ```text
/// V(s) ← (1 - α)·V(s) + α·(r + max V(s'·o))
/// ```
///
/// where `s'·o` ranges over the boards reachable by placing `o` on the new
/// board (zero when the new board is terminal) and `r` is
/// [`WIN_REWARD`], [`LOSS_REWARD`] or [`STEP_REWARD`].
///
/// The random source is injected so matches can be replayed from a seed.
pub struct LearningAgent<R = StdRng> {
    name: String,
    values: ValueTable,
    alpha: f64,
    exploration: f64,
    mark: Option<Mark>,
    rng: R,
    observer: Option<Box<dyn DecisionObserver>>,
}

impl LearningAgent<StdRng> {
    /// Creates an agent whose random source is seeded from `seed`.
    pub fn seeded(name: impl Into<String>, alpha: f64, seed: u64) -> Self {
        Self::new(name, alpha, StdRng::seed_from_u64(seed))
    }

    /// Creates an agent seeded from the thread-local generator.
    pub fn from_entropy(name: impl Into<String>, alpha: f64) -> Self {
        Self::new(name, alpha, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> LearningAgent<R> {
    /// Creates an agent with an empty value table.
    ///
    /// `alpha` is the constant step size and must lie in `(0, 1]`.
    pub fn new(name: impl Into<String>, alpha: f64, rng: R) -> Self {
        debug_assert!(alpha > 0.0 && alpha <= 1.0, "alpha out of range: {alpha}");
        Self {
            name: name.into(),
            values: ValueTable::new(),
            alpha,
            exploration: DEFAULT_EXPLORATION,
            mark: None,
            rng,
            observer: None,
        }
    }

    /// Replaces the exploration probability.
    pub fn with_exploration(mut self, exploration: f64) -> Self {
        self.exploration = exploration;
        self
    }

    /// Starts from an existing value table.
    pub fn with_values(mut self, values: ValueTable) -> Self {
        self.values = values;
        self
    }

    /// Attaches a decision observer.
    pub fn with_observer(mut self, observer: Box<dyn DecisionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Attaches or detaches the decision observer in place.
    pub fn set_observer(&mut self, observer: Option<Box<dyn DecisionObserver>>) {
        self.observer = observer;
    }

    /// Learning rate.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Exploration probability.
    pub fn exploration(&self) -> f64 {
        self.exploration
    }

    /// The learned values.
    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// Value the agent would assign to `board` when playing `mark`.
    pub fn value_of(&self, board: &Board, mark: Mark) -> f64 {
        self.values.get(&canonicalize(board, mark))
    }

    /// Legal moves on a canonical board with the value of the board each
    /// one leads to, best first. Ties are broken uniformly at random.
    fn rank_moves(&mut self, canonical: &Board) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = canonical
            .allowed_moves()
            .into_iter()
            .filter_map(|index| {
                canonical
                    .apply(index, Mark::O)
                    .ok()
                    .map(|next| (index, self.values.get(&next)))
            })
            .collect();
        ranked.shuffle(&mut self.rng);
        // Stable, so the shuffle decides among equal values.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Best value reachable by the agent from a canonical board.
    fn best_next_value(&self, canonical: &Board) -> f64 {
        if canonical.is_terminal() {
            return 0.0;
        }
        let successors = canonical
            .allowed_moves()
            .into_iter()
            .filter_map(|index| canonical.apply(index, Mark::O).ok());
        self.values.max_of(successors).unwrap_or(0.0)
    }
}

/// Reward for arriving at a canonical board.
fn reward(canonical: &Board) -> f64 {
    if canonical.is_winner(Mark::O) {
        WIN_REWARD
    } else if canonical.is_winner(Mark::X) {
        LOSS_REWARD
    } else {
        STEP_REWARD
    }
}

impl<R: Rng> Participant for LearningAgent<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn assign_mark(&mut self, mark: Mark) {
        debug!(agent = %self.name, %mark, "Mark assigned");
        self.mark = Some(mark);
    }

    fn mark(&self) -> Option<Mark> {
        self.mark
    }

    #[instrument(level = "debug", skip_all, fields(agent = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Option<usize>, ParticipantError> {
        let Some(mark) = self.mark else {
            warn!("Asked for a move before a mark was assigned");
            return Ok(None);
        };
        let canonical = canonicalize(board, mark);
        let ranked = self.rank_moves(&canonical);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_candidates(&self.name, &canonical, &ranked);
        }

        let Some(&(best, best_value)) = ranked.first() else {
            return Ok(None);
        };
        let explored = self.rng.random::<f64>() < self.exploration;
        let chosen = if explored {
            ranked.choose(&mut self.rng).map_or(best, |&(index, _)| index)
        } else {
            best
        };

        trace!(best, best_value, chosen, explored, "Move selected");
        if let Some(observer) = self.observer.as_mut() {
            observer.on_choice(&self.name, chosen, explored);
        }
        Ok(Some(chosen))
    }

    fn observe_transition(&mut self, old: &Board, new: &Board) {
        let Some(mark) = self.mark else {
            warn!(agent = %self.name, "Transition observed before a mark was assigned");
            return;
        };
        let old = canonicalize(old, mark);
        let new = canonicalize(new, mark);

        let reward = reward(&new);
        let target = reward + self.best_next_value(&new);
        let value = self.values.update(old, target, self.alpha);

        trace!(agent = %self.name, reward, target, value, "Value updated");
        if let Some(observer) = self.observer.as_mut() {
            observer.on_update(&self.name, reward, value);
        }
    }
}

impl<R> fmt::Debug for LearningAgent<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LearningAgent")
            .field("name", &self.name)
            .field("alpha", &self.alpha)
            .field("exploration", &self.exploration)
            .field("mark", &self.mark)
            .field("states", &self.values.len())
            .finish_non_exhaustive()
    }
}
