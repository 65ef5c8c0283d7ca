//! Stateless rendering of the start menu, board, and winner menu.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Announcement, Cell, Mark, Position, Seat};
use crate::view::MatchView;

/// Renders the whole screen for the app's current phase.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.controller().view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Body
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if view.start_menu_visible {
        draw_start_menu(frame, chunks[1], app);
    } else {
        draw_board(frame, chunks[1], &view, app.cursor());
        if let Some(announcement) = &view.winner_menu {
            draw_winner_menu(frame, chunks[1], announcement);
        }
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn seat_color(seat: Seat) -> Color {
    match seat {
        Seat::Player1 => Color::Blue,
        Seat::Player2 => Color::Red,
    }
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_start_menu(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.controller().session();
    let lines = vec![
        Line::from(Span::styled(
            format!("{} ({})", session.player1().name(), session.player1().mark()),
            mark_style(*session.player1().mark()),
        )),
        Line::from("vs"),
        Line::from(Span::styled(
            format!("{} ({})", session.player2().name(), session.player2().mark()),
            mark_style(*session.player2().mark()),
        )),
        Line::from(""),
        Line::from("Enter: start    q: quit"),
    ];
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Start").borders(Borders::ALL));
    frame.render_widget(menu, center_rect(area, 34, 8));
}

fn draw_board(frame: &mut Frame, area: Rect, view: &MatchView, cursor: Position) {
    let board_area = center_rect(area, 41, 13);
    let border = if view.board_active {
        Style::default().fg(seat_color(view.turn.seat))
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!("{} ({}) to move", view.turn.name, view.turn.mark))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);
        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, cell_area, view, pos, view.board_active && pos == cursor);
            }
        }
        for sep in [cols[1], cols[3]] {
            frame.render_widget(
                Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray)),
                sep,
            );
        }
    }
    for sep in [rows[1], rows[3]] {
        frame.render_widget(
            Paragraph::new("─".repeat(sep.width as usize))
                .style(Style::default().fg(Color::DarkGray)),
            sep,
        );
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &MatchView, pos: Position, highlighted: bool) {
    let index = pos.to_index();
    let (symbol, base_style) = match view.cells[index].cell {
        Cell::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_winner_menu(frame: &mut Frame, area: Rect, announcement: &Announcement) {
    let (headline, style) = match announcement {
        Announcement::Winner { name, mark } => (format!("Winner: {}", name), mark_style(*mark)),
        Announcement::Tie => (
            announcement.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };
    let popup = center_rect(area, 30, 6);
    let menu = Paragraph::new(vec![
        Line::from(Span::styled(headline, style)),
        Line::from(""),
        Line::from("Enter: play again"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title("Game over").borders(Borders::ALL));
    frame.render_widget(Clear, popup);
    frame.render_widget(menu, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
