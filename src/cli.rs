//! Command-line interface for tictactoe.

use crate::games::tictactoe::Position;
use crate::replay::parse_position;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal UI
    Play {
        /// Path to a TOML player config (defaults to ./tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override player 1's name
        #[arg(long)]
        player1: Option<String>,

        /// Override player 2's name
        #[arg(long)]
        player2: Option<String>,

        /// File the UI writes its logs to
        #[arg(long, default_value = "tictactoe.log")]
        log_file: PathBuf,
    },

    /// Play a scripted match without a UI and print the result
    Replay {
        /// Cells in play order, comma separated: indices (0-8) or labels like `center`
        #[arg(short, long, value_delimiter = ',', required = true, value_parser = parse_position)]
        moves: Vec<Position>,

        /// Path to a TOML player config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the final match view as JSON
        #[arg(long)]
        json: bool,
    },
}
