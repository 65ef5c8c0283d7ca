//! Tie detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// A tie is a full board without a completed line.
///
/// The winner check always runs first, so a ninth move that completes a line
/// is a win and never a tie.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    board.open_cell_count() == 0 && check_winner(board).is_none()
}
