//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The board calls these after
//! each accepted move; they never mutate anything.

pub mod tie;
pub mod win;

pub use tie::is_tie;
pub use win::{WINNING_LINES, check_winner, winning_line};
