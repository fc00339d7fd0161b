//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The board's own
//! `is_winner`/`is_terminal` methods delegate here.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, is_winner, winner};
