//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The eight winning triples, checked rows first, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the mark that completed it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Mark)> {
    WINNING_LINES.into_iter().find_map(|line @ [a, b, c]| {
        match (board.get(a), board.get(b), board.get(c)) {
            (Cell::Occupied(x), Cell::Occupied(y), Cell::Occupied(z)) if x == y && y == z => {
                Some((line, x))
            }
            _ => None,
        }
    })
}

/// Returns the mark holding a completed line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}
