//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Mark placed on the board by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark for the rest of the match.
    Occupied(Mark),
}

impl Cell {
    /// Checks if nobody has played this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Which of the two players a value refers to.
///
/// The board uses this as its turn indicator, so the presentation shell
/// can colour the board for whoever moves next.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Seat {
    /// The player who moves first after every restart.
    #[default]
    #[strum(to_string = "player1")]
    Player1,
    /// The player who moves second.
    #[strum(to_string = "player2")]
    Player2,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::Player1 => Seat::Player2,
            Seat::Player2 => Seat::Player1,
        }
    }
}

/// A participant in a match. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Display name, shown in the winner announcement.
    name: String,
    /// Mark this player places on the board.
    mark: Mark,
}
