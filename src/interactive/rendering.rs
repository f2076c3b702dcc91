//! TUI rendering with ratatui
//!
//! Draws the guess grid, messages and status bar from the game state.

use super::app::{App, MessageStyle};
use crate::core::Feedback;
use crate::game::{Cell, Grid, Phase};
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
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Grid
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE GRID 🟨")
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

/// Style for one tile; unscored rows only distinguish typed from empty
fn tile_style(cell: Cell, scored: bool) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    if !scored {
        return if cell.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            base.fg(Color::White)
        };
    }
    match cell.feedback() {
        Feedback::Green => base.fg(Color::Black).bg(Color::Green),
        Feedback::Yellow => base.fg(Color::Black).bg(Color::Yellow),
        Feedback::Grey => base.fg(Color::White).bg(Color::DarkGray),
        Feedback::None => Style::default(),
    }
}

/// One text line per grid row, with a blank line between rows
fn grid_lines(grid: &Grid) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(grid.rows() * 2);
    for (row, cells) in grid.iter_rows().enumerate() {
        let scored = grid.is_row_scored(row);
        let spans: Vec<Span<'static>> = cells
            .iter()
            .flat_map(|&cell| {
                let text = match cell.letter() {
                    Some(letter) if scored => format!(" {letter} "),
                    Some(letter) => format!("[{letter}]"),
                    None => "[ ]".to_string(),
                };
                [Span::styled(text, tile_style(cell, scored)), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.pop();
    lines
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let border_color = match app.game.phase() {
        Phase::Won => Color::Green,
        Phase::Exhausted => Color::Red,
        Phase::Idle | Phase::RowSubmitted(_) => Color::White,
    };

    let paragraph = Paragraph::new(grid_lines(app.game.grid()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Guess distribution
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
}

/// One bar per guess count, scaled to the most frequent one
fn distribution_lines(distribution: &[usize], width: usize) -> Vec<Line<'static>> {
    let max = distribution.iter().copied().max().unwrap_or(0).max(1);
    distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let filled = count * width / max;
            Line::from(vec![
                Span::raw(format!("{:>2}: ", i + 1)),
                Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
                Span::styled(
                    "░".repeat(width - filled),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect()
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let width = usize::from(area.width).saturating_sub(12).max(1);
    let paragraph = Paragraph::new(distribution_lines(&app.stats.guess_distribution, width))
        .block(
            Block::default()
                .title(" Guess Distribution ")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
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

    let mode = Paragraph::new(format!("Status: {}", app.status_text())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let guesses_text = format!(
        "Guesses: {}/{}",
        app.game.store().guessed_words().len(),
        app.game.config().rows
    );
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[2]);

    let help = Paragraph::new("ESC: Quit | TAB / Ctrl-R: Reset")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
