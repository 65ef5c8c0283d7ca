//! Game session: players, turn order, and match phase.

use crate::games::tictactoe::{
    Announcement, Board, GameError, OutcomeSink, Phase, Player, Seat, TurnSource,
};
use tracing::{debug, info, instrument, warn};

/// Owns both players and drives a match from start menu to announcement.
///
/// The session is created once and reused: [`GameSession::restart`] brings
/// it back to its initial state instead of building a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    player1: Player,
    player2: Player,
    current: Seat,
    phase: Phase,
}

impl GameSession {
    /// Creates a session waiting on the start menu, player 1 to move first.
    #[instrument(fields(player1 = %player1.name(), player2 = %player2.name()))]
    pub fn new(player1: Player, player2: Player) -> Self {
        if player1.mark() == player2.mark() {
            warn!(mark = %player1.mark(), "Both players share a mark");
        }
        info!("Creating game session");
        Self {
            player1,
            player2,
            current: Seat::Player1,
            phase: Phase::NotStarted,
        }
    }

    /// Player 1.
    pub fn player1(&self) -> &Player {
        &self.player1
    }

    /// Player 2.
    pub fn player2(&self) -> &Player {
        &self.player2
    }

    /// Player sitting in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Player1 => &self.player1,
            Seat::Player2 => &self.player2,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat whose mark the next move uses.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player whose mark the next move uses.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Leaves the start menu and opens the board for moves.
    ///
    /// # Errors
    ///
    /// [`GameError::AlreadyStarted`] unless the phase is `NotStarted`.
    #[instrument(skip(self, board), fields(phase = %self.phase))]
    pub fn start(&mut self, board: &mut Board) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            warn!("Start requested outside the start menu");
            return Err(GameError::AlreadyStarted { phase: self.phase });
        }
        info!(first = %self.current_player().name(), "Starting match");
        self.phase = Phase::InProgress;
        board.set_color_for_player(self.current);
        board.set_active(true);
        Ok(())
    }

    /// Hands the turn to the other player.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotInProgress`] outside `InProgress`.
    #[instrument(skip(self), fields(phase = %self.phase, from = %self.current))]
    pub fn switch_turn(&mut self) -> Result<Seat, GameError> {
        if self.phase != Phase::InProgress {
            warn!("Turn switch outside a running match");
            return Err(GameError::GameNotInProgress);
        }
        self.current = self.current.other();
        debug!(to = %self.current, "Switched player");
        Ok(self.current)
    }

    /// Ends the match with the current player as winner and locks the board.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotInProgress`] outside `InProgress`.
    #[instrument(skip(self, board), fields(phase = %self.phase))]
    pub fn declare_winner(&mut self, board: &mut Board) -> Result<&Player, GameError> {
        self.record_win()?;
        board.set_active(false);
        Ok(self.current_player())
    }

    /// Ends the match as a tie and locks the board.
    ///
    /// # Errors
    ///
    /// [`GameError::GameNotInProgress`] outside `InProgress`.
    #[instrument(skip(self, board), fields(phase = %self.phase))]
    pub fn declare_tie(&mut self, board: &mut Board) -> Result<(), GameError> {
        self.record_tie()?;
        board.set_active(false);
        Ok(())
    }

    fn record_win(&mut self) -> Result<(), GameError> {
        self.finish(Phase::Won(self.current))?;
        info!(winner = %self.current_player().name(), "Winner declared");
        Ok(())
    }

    fn record_tie(&mut self) -> Result<(), GameError> {
        self.finish(Phase::Tied)?;
        info!("Tie declared");
        Ok(())
    }

    fn finish(&mut self, phase: Phase) -> Result<(), GameError> {
        if self.phase != Phase::InProgress {
            warn!(requested = %phase, "Outcome reported outside a running match");
            return Err(GameError::GameNotInProgress);
        }
        self.phase = phase;
        Ok(())
    }

    /// Clears the board and returns to the start menu with player 1 first.
    ///
    /// Restarting from the start menu is accepted and leaves everything in
    /// its initial state.
    ///
    /// # Errors
    ///
    /// [`GameError::RestartWhileInProgress`] while a match is running.
    #[instrument(skip(self, board), fields(phase = %self.phase))]
    pub fn restart(&mut self, board: &mut Board) -> Result<(), GameError> {
        if self.phase == Phase::InProgress {
            warn!("Restart requested mid-match");
            return Err(GameError::RestartWhileInProgress);
        }
        info!("Restarting game");
        board.restart();
        self.phase = Phase::NotStarted;
        self.current = Seat::Player1;
        Ok(())
    }

    /// Winner name or tie message once the match is over.
    pub fn announcement(&self) -> Option<Announcement> {
        match self.phase {
            Phase::Won(seat) => {
                let winner = self.player(seat);
                Some(Announcement::Winner {
                    name: winner.name().clone(),
                    mark: *winner.mark(),
                })
            }
            Phase::Tied => Some(Announcement::Tie),
            Phase::NotStarted | Phase::InProgress => None,
        }
    }

    /// Start menu shows until the match starts.
    pub fn start_menu_visible(&self) -> bool {
        self.phase == Phase::NotStarted
    }

    /// Winner menu shows once the match ends.
    pub fn winner_menu_visible(&self) -> bool {
        self.phase.is_terminal()
    }
}

impl TurnSource for GameSession {
    fn current_seat(&self) -> Seat {
        self.current
    }

    fn current_player(&self) -> &Player {
        GameSession::current_player(self)
    }

    fn accepting_moves(&self) -> bool {
        self.phase == Phase::InProgress
    }
}

// The board locks itself before reporting, so these only move the phase.
impl OutcomeSink for GameSession {
    #[instrument(skip(self, winner), fields(winner = %winner.name(), seat = %self.current))]
    fn on_win(&mut self, winner: &Player) {
        if let Err(e) = self.record_win() {
            warn!(error = %e, "Dropped win report");
        }
    }

    #[instrument(skip(self))]
    fn on_tie(&mut self) {
        if let Err(e) = self.record_tie() {
            warn!(error = %e, "Dropped tie report");
        }
    }

    #[instrument(skip(self))]
    fn on_turn_complete(&mut self) {
        if let Err(e) = self.switch_turn() {
            warn!(error = %e, "Dropped turn switch");
        }
    }
}
