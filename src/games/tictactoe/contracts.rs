//! Capabilities the board needs from whoever runs the match.
//!
//! The board never sees the session type. It asks a [`TurnSource`] whose mark
//! to place and reports back through an [`OutcomeSink`], so the dependency
//! only runs one way.

use super::types::{Mark, Player, Seat};

/// Supplies the player whose mark the next move places.
pub trait TurnSource {
    /// Seat whose turn it is.
    fn current_seat(&self) -> Seat;

    /// Player whose turn it is.
    fn current_player(&self) -> &Player;

    /// Mark the next move will place.
    fn current_mark(&self) -> Mark {
        *self.current_player().mark()
    }

    /// Returns true while a match is in progress.
    fn accepting_moves(&self) -> bool;
}

/// Receives the result of every accepted move.
///
/// Exactly one of these is called per accepted move, after the mark is on the
/// board and the win and tie checks have run.
pub trait OutcomeSink {
    /// The move completed a line for `winner`.
    fn on_win(&mut self, winner: &Player);

    /// The move filled the board without completing a line.
    fn on_tie(&mut self);

    /// The match continues; the other player moves next.
    fn on_turn_complete(&mut self);
}
