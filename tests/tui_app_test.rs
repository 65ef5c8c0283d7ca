//! Tests for terminal UI key handling, driven without a terminal.

use crossterm::event::KeyCode;
use tictactoe::tui::App;
use tictactoe::{Cell, GameConfig, Mark, MatchController, Phase, Position};

fn app() -> App {
    App::new(MatchController::from_config(&GameConfig::default()))
}

fn press(app: &mut App, keys: &[KeyCode]) {
    for key in keys {
        app.handle_key(*key);
    }
}

#[test]
fn test_enter_starts_match() {
    let mut app = app();
    assert_eq!(app.controller().phase(), Phase::NotStarted);

    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(app.controller().phase(), Phase::InProgress);
    assert_eq!(app.status_message(), "John's turn (X).");
}

#[test]
fn test_board_keys_ignored_on_start_menu() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('5'), KeyCode::Up]);
    assert_eq!(app.controller().phase(), Phase::NotStarted);
    assert_eq!(app.controller().board().open_cell_count(), 9);
}

#[test]
fn test_digits_play_cells() {
    let mut app = app();
    press(&mut app, &[KeyCode::Enter, KeyCode::Char('1')]);

    assert_eq!(
        app.controller().board().get(Position::TopLeft),
        Cell::Occupied(Mark::X)
    );
    assert_eq!(app.cursor(), Position::TopLeft);
    assert_eq!(app.status_message(), "Jane's turn (O).");
}

#[test]
fn test_cursor_and_enter_play_cells() {
    let mut app = app();
    press(&mut app, &[KeyCode::Enter, KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

    assert_eq!(
        app.controller().board().get(Position::TopLeft),
        Cell::Occupied(Mark::X)
    );
}

#[test]
fn test_taken_cell_reported_in_status() {
    let mut app = app();
    press(&mut app, &[KeyCode::Enter, KeyCode::Char('5'), KeyCode::Char('5')]);

    assert_eq!(app.status_message(), "Center (4) is already taken");
    assert_eq!(app.controller().moves().len(), 1);
}

#[test]
fn test_restart_key_ignored_mid_match() {
    let mut app = app();
    press(&mut app, &[KeyCode::Enter, KeyCode::Char('5'), KeyCode::Char('r')]);

    assert_eq!(app.controller().phase(), Phase::InProgress);
    assert_eq!(app.controller().moves().len(), 1);
    assert_eq!(app.status_message(), "Jane's turn (O).");
}

#[test]
fn test_win_then_play_again() {
    let mut app = app();
    press(
        &mut app,
        &[
            KeyCode::Enter,
            KeyCode::Char('1'),
            KeyCode::Char('4'),
            KeyCode::Char('2'),
            KeyCode::Char('5'),
            KeyCode::Char('3'),
        ],
    );

    assert!(matches!(app.controller().phase(), Phase::Won(_)));
    assert_eq!(app.status_message(), "John wins! Press Enter to play again.");

    press(&mut app, &[KeyCode::Char('9')]);
    assert!(app.controller().board().is_empty(Position::BottomRight));

    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.controller().phase(), Phase::NotStarted);
    assert_eq!(app.controller().board().open_cell_count(), 9);

    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.controller().phase(), Phase::InProgress);
    assert_eq!(app.controller().session().current_player().name(), "John");
}

#[test]
fn test_tie_message() {
    let mut app = app();
    press(&mut app, &[KeyCode::Enter]);
    for digit in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, &[KeyCode::Char(digit)]);
    }
    assert_eq!(app.controller().phase(), Phase::Tied);
    assert_eq!(
        app.status_message(),
        "Match is a tie! Press Enter to play again."
    );
}

#[test]
fn test_quit_from_any_screen() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('q')]);
    assert!(app.should_quit());

    let mut app = self::app();
    press(&mut app, &[KeyCode::Enter, KeyCode::Esc]);
    assert!(app.should_quit());
}
