//! TUI rendering with ratatui

use super::app::{App, MessageStyle, Notice};
use crate::core::{Cell, Classification, MAX_GUESSES, WORD_LENGTH};
use crate::session::{Phase, SessionState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match &app.session {
        None => render_loading(f, app, chunks[1]),
        Some(state) => {
            render_board(f, state, chunks[1]);
            render_status(f, state, chunks[2]);
        }
    }

    if let Some(notice) = &app.notice {
        render_notice(f, notice, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WUURDLE")
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

fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let spinner = SPINNER[app.frame % SPINNER.len()];
    let loading = Paragraph::new(format!("{spinner} Loading..."))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(loading, centered(area, area.width, 1));
}

/// Background and foreground for a tile
fn tile_style(class: Classification) -> Style {
    match class {
        Classification::Unset => Style::default().fg(Color::White),
        Classification::Exact => Style::default().fg(Color::Black).bg(Color::Green),
        Classification::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Classification::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, state: &SessionState, area: Rect) {
    let columns = WORD_LENGTH as u16;
    let rows = MAX_GUESSES as u16;
    let width = columns * TILE_WIDTH + (columns - 1) * TILE_GAP;
    let height = rows * TILE_HEIGHT;
    let board = centered(area, width, height);

    for (r, row) in state.grid().rows().iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let tile_area = Rect {
                x: board.x + c as u16 * (TILE_WIDTH + TILE_GAP),
                y: board.y + r as u16 * TILE_HEIGHT,
                width: TILE_WIDTH,
                height: TILE_HEIGHT,
            }
            .intersection(area);

            let active = state.phase() == Phase::Accepting
                && r == state.row()
                && c == state.column().min(WORD_LENGTH - 1);
            render_tile(f, cell, active, tile_area);
        }
    }
}

fn render_tile(f: &mut Frame, cell: &Cell, active: bool, area: Rect) {
    let style = tile_style(cell.class);
    let border = if active {
        Style::default().fg(Color::Cyan)
    } else if cell.class.is_set() {
        style
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let tile = Paragraph::new(cell.display_letter().to_string())
        .alignment(Alignment::Center)
        .style(style.add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    f.render_widget(tile, area);
}

fn render_status(f: &mut Frame, state: &SessionState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let progress = match state.phase() {
        Phase::Won => format!("Solved in {}/{MAX_GUESSES}", state.row() + 1),
        Phase::Lost => "Out of guesses".to_string(),
        Phase::Accepting | Phase::Validating => {
            format!("Guess {}/{MAX_GUESSES}", state.row() + 1)
        }
    };
    f.render_widget(
        Paragraph::new(progress).alignment(Alignment::Center),
        chunks[0],
    );

    let help = match state.phase() {
        Phase::Accepting => "a-z: Type | Backspace: Delete | Enter: Submit | Esc: Quit",
        Phase::Validating => "Checking word...",
        Phase::Won | Phase::Lost => "Esc: Quit",
    };
    f.render_widget(
        Paragraph::new(help)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

fn render_notice(f: &mut Frame, notice: &Notice, area: Rect) {
    let color = match notice.style {
        MessageStyle::Success => Color::Green,
        MessageStyle::Error => Color::Red,
    };

    let popup = centered(area, area.width.min(50), 6);
    let content = vec![
        Line::from(notice.text.clone()),
        Line::from(""),
        Line::from("Press Enter to continue").style(Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// A `width`×`height` rectangle centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
