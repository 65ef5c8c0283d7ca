//! Tic-tac-toe: board, rules, and the contracts between board and session.

mod action;
mod board;
mod contracts;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{GameError, Move, MoveOutcome};
pub use board::{Board, CELL_COUNT};
pub use contracts::{OutcomeSink, TurnSource};
pub use phases::{Announcement, Phase};
pub use position::Position;
pub use types::{Cell, Mark, Player, Seat};
