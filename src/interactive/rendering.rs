//! TUI rendering with ratatui
//!
//! Board, keyboard, and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KEYBOARD_ROWS, LetterStatus, WORD_LENGTH};
use crate::output::formatters::empty_row;
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
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colors; `None` is an unused key or an empty board cell
fn tile_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::Gray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD GAME")
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

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    // Board rows plus borders
    let board_height = u16::try_from(app.config.max_attempts() + 2).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height),
            Constraint::Length(5), // Keyboard
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .game
        .history()
        .iter()
        .map(|evaluated| {
            Line::from(
                evaluated
                    .verdicts()
                    .iter()
                    .map(|v| Span::styled(format!(" {} ", v.letter), tile_style(Some(v.status))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    // The row being typed, then empty rows for the remaining attempts
    if app.input_mode == InputMode::Guessing && lines.len() < app.config.max_attempts() {
        let typed: Vec<Span> = (0..WORD_LENGTH)
            .map(|i| {
                let letter = app.input_buffer.chars().nth(i).unwrap_or('_');
                Span::styled(
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        lines.push(Line::from(typed));
    }
    while lines.len() < app.config.max_attempts() {
        lines.push(Line::styled(
            empty_row(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.game.keyboard_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|c| Span::styled(format!(" {c} "), tile_style(hints.get(c))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your guess (5 letters) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
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

    let attempts = Paragraph::new(format!(
        "Attempts: {}/{}",
        app.game.attempts(),
        app.config.max_attempts()
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak = Paragraph::new(format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.max_streak
    ))
    .alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
