//! Tabular temporal-difference learning agent.
//!
//! - [`LearningAgent`]: ε-greedy player that updates state values after
//!   every transition it observes
//! - [`ValueTable`]: canonical board → value estimate
//! - [`canonicalize`]: rewrites a board so the agent's own mark is `O`
//! - [`DecisionObserver`]: optional hook for inspecting decisions

mod canonical;
mod learner;
mod observer;
mod values;

pub use canonical::canonicalize;
pub use learner::{DEFAULT_EXPLORATION, LOSS_REWARD, LearningAgent, STEP_REWARD, WIN_REWARD};
pub use observer::{DecisionObserver, TracingObserver};
pub use values::ValueTable;
