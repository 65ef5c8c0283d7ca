//! Application state and key handling for the terminal UI.

use crate::controller::MatchController;
use crate::games::tictactoe::{GameError, MoveOutcome, Phase, Position};
use crossterm::event::KeyCode;
use tracing::{debug, instrument, warn};

use super::input::{digit_to_index, move_cursor};

/// Terminal UI state wrapped around one match.
#[derive(Debug)]
pub struct App {
    controller: MatchController,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the app on the start menu.
    pub fn new(controller: MatchController) -> Self {
        Self {
            controller,
            cursor: Position::Center,
            status_message: "Press Enter to start.".to_string(),
            should_quit: false,
        }
    }

    /// The match being played.
    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line text.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes a key press to the screen for the current phase.
    #[instrument(skip(self), fields(phase = %self.controller.phase()))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            debug!("User quit");
            self.should_quit = true;
            return;
        }

        match self.controller.phase() {
            Phase::NotStarted => {
                if matches!(key, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s')) {
                    let result = self.controller.start().map(|_| self.turn_message());
                    self.report(result);
                }
            }
            Phase::InProgress => match key {
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    self.cursor = move_cursor(self.cursor, key);
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let index = self.cursor.to_index();
                    self.select(index);
                }
                other => {
                    if let Some(index) = digit_to_index(other) {
                        self.select(index);
                    }
                }
            },
            Phase::Won(_) | Phase::Tied => {
                if matches!(key, KeyCode::Enter | KeyCode::Char('r')) {
                    let result = self.controller.play_again();
                    if result.is_ok() {
                        self.cursor = Position::Center;
                    }
                    self.report(result.map(|_| "Press Enter to start.".to_string()));
                }
            }
        }
    }

    fn select(&mut self, index: usize) {
        let result = self.controller.select_cell(index);
        if let Some(position) = Position::from_index(index) {
            self.cursor = position;
        }
        let message = result.map(|outcome| match outcome {
            MoveOutcome::Continued { .. } => self.turn_message(),
            MoveOutcome::Won { winner, .. } => {
                format!("{} wins! Press Enter to play again.", winner.name())
            }
            MoveOutcome::Tied => "Match is a tie! Press Enter to play again.".to_string(),
        });
        self.report(message);
    }

    fn turn_message(&self) -> String {
        let player = self.controller.session().current_player();
        format!("{}'s turn ({}).", player.name(), player.mark())
    }

    fn report(&mut self, result: Result<String, GameError>) {
        match result {
            Ok(message) => self.status_message = message,
            Err(e) => {
                warn!(error = %e, "Input rejected");
                self.status_message = e.to_string();
            }
        }
    }
}
