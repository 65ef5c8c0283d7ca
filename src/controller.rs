//! Match controller: owns one board and one session and routes shell input.

use crate::config::GameConfig;
use crate::games::tictactoe::{Board, GameError, Move, MoveOutcome, Phase, Player, Position};
use crate::session::GameSession;
use crate::view::MatchView;
use tracing::{debug, info, instrument, warn};

/// One independently owned match.
///
/// The shell maps its three inputs onto [`MatchController::start`],
/// [`MatchController::select_cell`] and [`MatchController::play_again`];
/// everything it draws comes from [`MatchController::view`].
#[derive(Debug, Clone)]
pub struct MatchController {
    board: Board,
    session: GameSession,
    moves: Vec<Move>,
}

impl MatchController {
    /// Creates a controller for two players, waiting on the start menu.
    #[instrument(fields(player1 = %player1.name(), player2 = %player2.name()))]
    pub fn new(player1: Player, player2: Player) -> Self {
        Self {
            board: Board::new(),
            session: GameSession::new(player1, player2),
            moves: Vec::new(),
        }
    }

    /// Creates a controller from a validated configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        let (player1, player2) = config.players();
        Self::new(player1, player2)
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Moves played in the current match, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// "Start" pressed.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), GameError> {
        self.session.start(&mut self.board)
    }

    /// "Cell N selected".
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Rejected move outside the board");
            GameError::InvalidCellIndex { index }
        })?;
        let action = Move::new(
            self.session.current_seat(),
            *self.session.current_player().mark(),
            position,
        );

        let outcome = self.board.apply_move(position.to_index(), &mut self.session)?;

        debug!(%action, "Move recorded");
        self.moves.push(action);
        if outcome.is_terminal() {
            info!(phase = %self.session.phase(), moves = self.moves.len(), "Match over");
        }
        Ok(outcome)
    }

    /// Plays a sequence of cells, stopping at the first rejection or when
    /// the match ends.
    ///
    /// Cells listed after the final move are not played; [`Self::moves`]
    /// shows how many were.
    #[instrument(skip(self))]
    pub fn play_all(&mut self, indices: &[usize]) -> Result<Option<MoveOutcome>, GameError> {
        let mut last = None;
        for &index in indices {
            let outcome = self.select_cell(index)?;
            let done = outcome.is_terminal();
            last = Some(outcome);
            if done {
                break;
            }
        }
        Ok(last)
    }

    /// "Play again" pressed.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> Result<(), GameError> {
        self.session.restart(&mut self.board)?;
        self.moves.clear();
        Ok(())
    }

    /// Snapshot for the presentation shell.
    pub fn view(&self) -> MatchView {
        MatchView::capture(&self.board, &self.session)
    }
}
