//! TUI rendering with ratatui
//!
//! Board of digit tiles, message log and a keypad colored by key status.

use super::app::{App, MessageStyle};
use crate::core::{Digit, MAX_DIGITS, MIN_DIGITS, Status};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keypad
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_keypad(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🔢 PICO FERMI BAGEL - {} digits ({MIN_DIGITS}-{MAX_DIGITS}, +/- to change)",
        app.game.config().digits()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile style for a scored digit
fn tile_style(status: Status) -> Style {
    let bg = match status {
        Status::Correct => Color::Green,
        Status::Present => Color::Yellow,
        Status::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Keypad style for a digit's best status
fn key_style(status: Option<Status>) -> Style {
    match status {
        Some(status) => tile_style(status),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let digits = game.config().digits();
    let typing_row = (game.status() == GameStatus::Playing).then(|| game.current_attempt());

    let mut lines = vec![Line::from("")];
    for (i, slot) in game.board().slots().iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!(" {} ", i + 1),
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(record) = slot {
            for (digit, status) in record.marks() {
                spans.push(Span::styled(format!(" {digit} "), tile_style(status)));
                spans.push(Span::raw(" "));
            }
        } else if typing_row == Some(i) {
            let typed = game.current_guess();
            for pos in 0..digits {
                let text = typed.get(pos).map_or_else(|| " _ ".to_string(), |d| format!(" {d} "));
                spans.push(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..digits {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let (title, color) = match game.status() {
        GameStatus::Playing => (" Board ", Color::White),
        GameStatus::Won => (" 🎉 SOLVED! 🎉 ", Color::Green),
        GameStatus::Lost => (" Game Over ", Color::Red),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );

    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keypad(f: &mut Frame, app: &App, area: Rect) {
    let keys = app.game.key_statuses();

    let mut digit_spans = Vec::with_capacity(Digit::ALL.len() * 2);
    for digit in Digit::ALL {
        digit_spans.push(Span::styled(format!(" {digit} "), key_style(keys.get(digit))));
        digit_spans.push(Span::raw(" "));
    }

    let controls = Line::from(vec![
        Span::styled(" ENTER ", Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(" ⌫ BACKSPACE ", Style::default().fg(Color::Cyan)),
    ]);

    let keypad = Paragraph::new(vec![Line::from(digit_spans), controls])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keypad ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );

    f.render_widget(keypad, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let game = &app.game;
    let mode_text = match game.status() {
        GameStatus::Playing => "Mode: Playing",
        GameStatus::Won => "Mode: Won",
        GameStatus::Lost => "Mode: Lost",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let attempt_text = format!(
        "Attempt: {}/{}",
        (game.current_attempt() + 1).min(game.config().max_attempts()),
        game.config().max_attempts()
    );
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[2]);

    let help_text = if game.status() == GameStatus::Playing {
        "q: Quit | Enter: Submit | Backspace: Delete"
    } else {
        "q: Quit | n: New Game | +/-: Length"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
