//! Two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid, move validation, win and tie detection
//! - **GameSession**: players, turn order, and match phase
//! - **MatchController**: owns one board and one session, routes shell input
//! - **MatchRegistry**: many independent matches, one lock each
//! - **Replay**: a scripted match played headless, rendered as text or JSON
//! - **TUI**: the terminal presentation shell
//!
//! The board only knows the session through the [`TurnSource`] and
//! [`OutcomeSink`] traits.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Mark, MatchController, MoveOutcome, Phase, Player};
//!
//! let mut game = MatchController::new(
//!     Player::new("John".to_string(), Mark::X),
//!     Player::new("Jane".to_string(), Mark::O),
//! );
//! game.start().unwrap();
//! let outcome = game.play_all(&[0, 3, 1, 4, 2]).unwrap();
//! assert!(matches!(outcome, Some(MoveOutcome::Won { .. })));
//! assert!(matches!(game.phase(), Phase::Won(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod controller;
mod games;
mod registry;
mod replay;
mod session;
mod view;

pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig, PlayerConfig};

// Crate-level exports - Match orchestration
pub use controller::MatchController;
pub use registry::{MatchId, MatchRegistry, RegistryError};
pub use replay::{Replay, parse_position};
pub use session::GameSession;
pub use view::{CellView, MatchView, TurnView};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Announcement, Board, CELL_COUNT, Cell, GameError, Mark, Move, MoveOutcome, OutcomeSink, Phase,
    Player, Position, Seat, TurnSource, rules,
};
