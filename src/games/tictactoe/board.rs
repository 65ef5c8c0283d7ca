//! The 3x3 board: cell state, move validation, and outcome detection.

use super::action::{GameError, MoveOutcome};
use super::contracts::{OutcomeSink, TurnSource};
use super::rules;
use super::types::{Cell, Mark, Seat};
use super::Position;
use tracing::{debug, info, instrument, warn};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Authoritative state of the 9-cell grid.
///
/// A cell goes from [`Cell::Empty`] to a mark at most once per match.
/// `open_cell_count` always equals the number of empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    open_cell_count: usize,
    active: bool,
    turn_indicator: Seat,
}

impl Board {
    /// Creates an empty, inactive board with the indicator on player 1.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            open_cell_count: CELL_COUNT,
            active: false,
            turn_indicator: Seat::Player1,
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells still empty.
    pub fn open_cell_count(&self) -> usize {
        self.open_cell_count
    }

    /// Whether the board accepts input.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seat whose turn the board is showing.
    pub fn turn_indicator(&self) -> Seat {
        self.turn_indicator
    }

    /// Flips whether the board accepts input.
    #[instrument(skip(self), fields(active = self.active))]
    pub fn toggle_active(&mut self) {
        self.set_active(!self.active);
    }

    /// Enables or disables input.
    #[instrument(skip(self))]
    pub fn set_active(&mut self, active: bool) {
        debug!(active, "Board input toggled");
        self.active = active;
    }

    /// Points the turn indicator at a seat.
    #[instrument(skip(self))]
    pub fn set_color_for_player(&mut self, seat: Seat) {
        debug!(%seat, "Turn indicator updated");
        self.turn_indicator = seat;
    }

    /// Places `mark` on an empty cell. Returns false and changes nothing
    /// if the cell is taken.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) -> bool {
        let cell = &mut self.cells[pos.to_index()];
        if !cell.is_empty() {
            return false;
        }
        *cell = Cell::Occupied(mark);
        self.open_cell_count -= 1;
        true
    }

    /// Plays the current player's mark at `index`.
    ///
    /// After the mark is placed the win check runs, then the tie check, and
    /// only if neither ended the match is the turn handed over. A terminal
    /// move locks the board before the outcome is reported.
    ///
    /// # Errors
    ///
    /// Rejected requests change nothing:
    /// - [`GameError::InvalidCellIndex`] for an index outside 0-8
    /// - [`GameError::GameNotInProgress`] if the board is inactive or the
    ///   match is not in progress
    /// - [`GameError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self, turns), fields(mark = ?turns.current_mark()))]
    pub fn apply_move<T>(&mut self, index: usize, turns: &mut T) -> Result<MoveOutcome, GameError>
    where
        T: TurnSource + OutcomeSink,
    {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Rejected move outside the board");
            GameError::InvalidCellIndex { index }
        })?;

        if !self.active || !turns.accepting_moves() {
            warn!(index, active = self.active, "Rejected move while no match is running");
            return Err(GameError::GameNotInProgress);
        }

        let player = turns.current_player().clone();
        if !self.place(position, *player.mark()) {
            warn!(%position, "Rejected move on an occupied cell");
            return Err(GameError::CellOccupied { position });
        }
        debug!(%position, open = self.open_cell_count, "Mark placed");

        if let Some((line, _)) = rules::winning_line(self) {
            info!(winner = %player.name(), ?line, "Line completed");
            self.set_active(false);
            turns.on_win(&player);
            return Ok(MoveOutcome::Won {
                winner: player,
                line,
            });
        }

        if self.check_tie() {
            info!("Board filled without a line");
            self.set_active(false);
            turns.on_tie();
            return Ok(MoveOutcome::Tied);
        }

        turns.on_turn_complete();
        let next = turns.current_seat();
        self.set_color_for_player(next);
        Ok(MoveOutcome::Continued { next })
    }

    /// Returns true if any of the eight lines holds three identical marks.
    pub fn check_winner(&self) -> bool {
        rules::check_winner(self).is_some()
    }

    /// Mark holding a completed line, if any.
    pub fn winner_mark(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// The first completed line in row, column, diagonal order.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self).map(|(line, _)| line)
    }

    /// Returns true if the board is full and no line is complete.
    pub fn check_tie(&self) -> bool {
        rules::is_tie(self)
    }

    /// Clears every cell and points the indicator back at player 1.
    ///
    /// Input stays disabled until the next match starts.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting board");
        self.cells = [Cell::Empty; CELL_COUNT];
        self.open_cell_count = CELL_COUNT;
        self.active = false;
        self.set_color_for_player(Seat::Player1);
    }

    /// Formats the board as a human-readable grid, empty cells numbered 1-9.
    pub fn display(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| match cell {
                        Cell::Empty => (row * 3 + col + 1).to_string(),
                        Cell::Occupied(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n-+-+-\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
