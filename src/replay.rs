//! Headless replay of a scripted match.

use crate::config::GameConfig;
use crate::controller::MatchController;
use crate::games::tictactoe::{GameError, Position};
use crate::view::MatchView;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// A match played from a fixed list of cells.
#[derive(Debug, Clone, Getters)]
pub struct Replay {
    /// The match after the last accepted move.
    controller: MatchController,
    /// Cells listed after the match had already ended.
    skipped: Vec<Position>,
}

#[derive(Serialize)]
struct ReplayReport {
    #[serde(flatten)]
    view: MatchView,
    skipped_moves: Vec<usize>,
}

impl Replay {
    /// Starts a match for `config` and plays `moves` in order.
    ///
    /// # Errors
    ///
    /// The first rejected move, e.g. [`GameError::CellOccupied`].
    #[instrument(skip(config))]
    pub fn run(config: &GameConfig, moves: &[Position]) -> Result<Self, GameError> {
        let mut controller = MatchController::from_config(config);
        controller.start()?;

        let indices: Vec<usize> = moves.iter().map(|pos| pos.to_index()).collect();
        controller.play_all(&indices)?;

        let skipped = moves
            .get(controller.moves().len()..)
            .map(<[Position]>::to_vec)
            .unwrap_or_default();
        if !skipped.is_empty() {
            warn!(count = skipped.len(), "Moves listed after the match ended");
        }
        info!(phase = %controller.phase(), "Replay finished");

        Ok(Self {
            controller,
            skipped,
        })
    }

    /// Board, result line, and any moves that were not played.
    pub fn to_text(&self) -> String {
        let session = self.controller.session();
        let mut out = format!("{}\n\n", self.controller.board().display());
        match session.announcement() {
            Some(announcement) => out.push_str(&format!("Result: {}", announcement)),
            None => out.push_str(&format!(
                "In progress: {}'s turn ({})",
                session.current_player().name(),
                session.current_player().mark()
            )),
        }
        if !self.skipped.is_empty() {
            let cells: Vec<String> = self.skipped.iter().map(ToString::to_string).collect();
            out.push_str(&format!(
                "\nNot played, match already over: {}",
                cells.join(", ")
            ));
        }
        out
    }

    /// The final [`MatchView`] plus the indices of unplayed moves, as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let report = ReplayReport {
            view: self.controller.view(),
            skipped_moves: self.skipped.iter().map(|pos| pos.to_index()).collect(),
        };
        serde_json::to_string_pretty(&report)
    }
}

/// Parses one `--moves` entry: a cell index (0-8) or a cell label such as
/// `center` or `top-l`.
pub fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s).ok_or_else(|| format!("Unknown cell '{}'", s.trim()))
}
