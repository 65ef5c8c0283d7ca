//! Snapshot of everything the presentation shell needs to draw a match.

use crate::games::tictactoe::{Announcement, Board, Cell, Mark, Phase, Position, Seat};
use crate::session::GameSession;
use serde::Serialize;

/// One cell as the shell shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Board index (0-8).
    pub index: usize,
    /// Current content.
    pub cell: Cell,
    /// Whether this cell can still be picked. Played cells stay disabled
    /// until the board is reset.
    pub enabled: bool,
}

/// Whose turn the board is indicating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnView {
    /// Seat on turn.
    pub seat: Seat,
    /// Name of the player on turn.
    pub name: String,
    /// Mark the next move places.
    pub mark: Mark,
}

/// Full state of a match for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    /// Session phase.
    pub phase: Phase,
    /// All nine cells in index order.
    pub cells: Vec<CellView>,
    /// Whether the board accepts input at all.
    pub board_active: bool,
    /// Turn indicator.
    pub turn: TurnView,
    /// Cells still empty.
    pub open_cell_count: usize,
    /// Start menu visibility.
    pub start_menu_visible: bool,
    /// Winner menu content; `None` hides the menu.
    pub winner_menu: Option<Announcement>,
}

impl MatchView {
    /// Captures the current state of a board and its session.
    pub fn capture(board: &Board, session: &GameSession) -> Self {
        let cells = Position::ALL
            .iter()
            .map(|pos| {
                let cell = board.get(*pos);
                CellView {
                    index: pos.to_index(),
                    cell,
                    enabled: cell.is_empty(),
                }
            })
            .collect();

        let seat = board.turn_indicator();
        let player = session.player(seat);

        Self {
            phase: session.phase(),
            cells,
            board_active: board.is_active(),
            turn: TurnView {
                seat,
                name: player.name().clone(),
                mark: *player.mark(),
            },
            open_cell_count: board.open_cell_count(),
            start_menu_visible: session.start_menu_visible(),
            winner_menu: session.announcement(),
        }
    }

    /// Whether a cell at `index` can be played right now.
    pub fn is_playable(&self, index: usize) -> bool {
        self.board_active
            && self.phase == Phase::InProgress
            && self.cells.get(index).is_some_and(|c| c.enabled)
    }
}
