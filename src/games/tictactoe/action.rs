//! Moves, move outcomes, and the rejections a match can hand back.
//!
//! Every rejection leaves the board and session exactly as they were.

use super::phases::Phase;
use super::types::{Mark, Player, Seat};
use super::Position;
use serde::{Deserialize, Serialize};

/// A mark placed by a seat at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Seat that made the move.
    pub seat: Seat,
    /// Mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(seat: Seat, mark: Mark, position: Position) -> Self {
        Self {
            seat,
            mark,
            position,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// What a successful move led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The match goes on with the given seat to move.
    Continued {
        /// Seat whose turn it is now.
        next: Seat,
    },
    /// The move completed a line.
    Won {
        /// Player who placed the final mark.
        winner: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// The move filled the board without completing a line.
    Tied,
}

impl MoveOutcome {
    /// Returns true if the move ended the match.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continued { .. })
    }
}

/// Rejected request from the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Cell {} is outside the board (0-8)", index)]
    InvalidCellIndex {
        /// The requested index.
        index: usize,
    },

    /// The target cell already holds a mark.
    #[display("{} is already taken", position)]
    CellOccupied {
        /// The occupied position.
        position: Position,
    },

    /// Moves and turn switches need a match in progress.
    #[display("No match in progress")]
    GameNotInProgress,

    /// A match cannot be restarted before it ends.
    #[display("Finish the current match before restarting")]
    RestartWhileInProgress,

    /// Start was requested outside the start menu.
    #[display("Match already started ({})", phase)]
    AlreadyStarted {
        /// Phase at the time of the request.
        phase: Phase,
    },
}
