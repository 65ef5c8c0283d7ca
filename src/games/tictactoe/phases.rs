//! Match phases and the terminal announcement shown to players.

use super::types::{Mark, Seat};
use serde::{Deserialize, Serialize};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Start menu is showing; the board does not accept moves.
    #[default]
    NotStarted,
    /// Moves are being played.
    InProgress,
    /// A player completed a line.
    Won(Seat),
    /// The board filled without a completed line.
    Tied,
}

impl Phase {
    /// Returns true once the match reached a win or a tie.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Tied)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "not started"),
            Phase::InProgress => write!(f, "in progress"),
            Phase::Won(seat) => write!(f, "won by {}", seat),
            Phase::Tied => write!(f, "tied"),
        }
    }
}

/// Text surfaced on the winner menu when a match ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Announcement {
    /// A player won.
    Winner {
        /// Winner's display name.
        name: String,
        /// Winner's mark.
        mark: Mark,
    },
    /// Nobody won.
    Tie,
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Announcement::Winner { name, .. } => write!(f, "{}", name),
            Announcement::Tie => write!(f, "Match is a tie!"),
        }
    }
}
