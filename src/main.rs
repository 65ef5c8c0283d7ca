//! Tic Tac Toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictactoe::{Cli, Command, GameConfig, MatchController, Position, Replay, tui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            player1,
            player2,
            log_file,
        } => run_play(config, player1, player2, log_file),
        Command::Replay {
            moves,
            config,
            json,
        } => run_replay(moves, config, json),
    }
}

/// Run the terminal UI
fn run_play(
    config: Option<PathBuf>,
    player1: Option<String>,
    player2: Option<String>,
    log_file: PathBuf,
) -> Result<()> {
    let config = GameConfig::load(config.as_deref())?.with_names(player1, player2)?;
    tui::run_tui(MatchController::from_config(&config), &log_file)
}

/// Play a scripted match headless and print the result
fn run_replay(moves: Vec<Position>, config: Option<PathBuf>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::load(config.as_deref())?;
    let replay = Replay::run(&config, &moves)?;

    if json {
        println!("{}", replay.to_json()?);
    } else {
        println!("{}", replay.to_text());
    }
    Ok(())
}
