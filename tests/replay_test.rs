//! Tests for headless replays and the replay command line.

use clap::Parser;
use tictactoe::{Cli, Command, GameConfig, GameError, Phase, Position, Replay, Seat};

fn cells(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|i| Position::from_index(*i).expect("Index on the board"))
        .collect()
}

#[test]
fn test_replay_prints_board_and_winner() {
    let replay = Replay::run(&GameConfig::default(), &cells(&[0, 3, 1, 4, 2])).unwrap();

    assert_eq!(
        replay.to_text(),
        "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nResult: John"
    );
    assert!(replay.skipped().is_empty());
}

#[test]
fn test_replay_reports_moves_after_the_end() {
    let replay = Replay::run(&GameConfig::default(), &cells(&[0, 3, 1, 4, 2, 8])).unwrap();

    assert_eq!(replay.controller().phase(), Phase::Won(Seat::Player1));
    assert_eq!(replay.skipped(), &vec![Position::BottomRight]);
    assert!(
        replay
            .to_text()
            .ends_with("Result: John\nNot played, match already over: Bottom-right (8)"),
        "{}",
        replay.to_text()
    );
}

#[test]
fn test_unfinished_replay_names_next_player() {
    let replay = Replay::run(&GameConfig::default(), &cells(&[4])).unwrap();
    assert!(replay.to_text().ends_with("In progress: Jane's turn (O)"));
}

#[test]
fn test_tie_replay() {
    let replay = Replay::run(
        &GameConfig::default(),
        &cells(&[0, 1, 2, 4, 3, 5, 7, 6, 8]),
    )
    .unwrap();
    assert!(replay.to_text().ends_with("Result: Match is a tie!"));
}

#[test]
fn test_replay_rejects_occupied_cell() {
    let result = Replay::run(&GameConfig::default(), &cells(&[4, 4]));
    assert_eq!(
        result.map(|_| ()),
        Err(GameError::CellOccupied {
            position: Position::Center
        })
    );
}

#[test]
fn test_replay_json_has_view_and_skipped_moves() {
    let replay = Replay::run(&GameConfig::default(), &cells(&[0, 3, 1, 4, 2, 8, 7])).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&replay.to_json().unwrap()).expect("Valid JSON");

    assert_eq!(json["phase"]["Won"], "Player1");
    assert_eq!(json["winner_menu"]["name"], "John");
    assert_eq!(json["board_active"], false);
    assert_eq!(json["skipped_moves"], serde_json::json!([8, 7]));
}

#[test]
fn test_cli_accepts_indices_and_labels() {
    let cli = Cli::try_parse_from(["tictactoe", "replay", "--moves", "0,center,top-r"]).unwrap();

    match cli.command {
        Command::Replay { moves, json, .. } => {
            assert_eq!(
                moves,
                vec![Position::TopLeft, Position::Center, Position::TopRight]
            );
            assert!(!json);
        }
        other => panic!("Expected replay, got {:?}", other),
    }
}

#[test]
fn test_cli_rejects_unknown_cells() {
    assert!(Cli::try_parse_from(["tictactoe", "replay", "--moves", "0,9"]).is_err());
    assert!(Cli::try_parse_from(["tictactoe", "replay", "--moves", "0,nowhere"]).is_err());
}
