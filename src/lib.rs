//! Tic-tac-toe with a self-taught opponent.
//!
//! Two [`LearningAgent`]s play each other for a few thousand matches, learning
//! a value for every board they see by temporal-difference updates. The
//! trained agent can then face a [`HumanPlayer`] at the terminal.
//!
//! # Architecture
//!
//! - **Board**: immutable board value and win/draw rules (`tictactoe_board`)
//! - **Participant**: what the controller needs from a player
//! - **Agent**: ε-greedy tabular learner
//! - **Controller**: seats two participants and sequences turns
//! - **Session**: self-play training and evaluation loops
//!
//! # Example
//!
//! ```
//! use tictactoe_td::{LearningAgent, self_play};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut roster = vec![
//!     LearningAgent::seeded("agent-1", 0.4, 1),
//!     LearningAgent::seeded("agent-2", 0.5, 2),
//! ];
//! let mut rng = StdRng::seed_from_u64(0);
//! let tally = self_play(&mut roster, 100, &mut rng).expect("agents always move");
//! assert_eq!(tally.games(), 100);
//! assert!(!roster[0].values().is_empty());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod agent;
mod config;
mod controller;
mod error;
mod human;
mod participant;
mod session;

// Crate-level exports - Participant contract
pub use participant::Participant;

// Crate-level exports - Learning agent
pub use agent::{
    DEFAULT_EXPLORATION, DecisionObserver, LOSS_REWARD, LearningAgent, STEP_REWARD,
    TracingObserver, ValueTable, WIN_REWARD, canonicalize,
};

// Crate-level exports - Match control
pub use controller::{Controller, MatchOutcome, MatchPhase};

// Crate-level exports - Errors
pub use error::{ConfigError, MatchError, ParticipantError};

// Crate-level exports - Human front end
pub use human::HumanPlayer;

// Crate-level exports - Configuration
pub use config::{AgentSpec, TrainingConfig};

// Crate-level exports - Training and evaluation
pub use session::{Tally, evaluate, self_play};

// Crate-level exports - Board types
pub use tictactoe_board::{Board, IllegalMoveError, IllegalMoveKind, Mark, Square};
