//! TUI rendering with ratatui
//!
//! Layout: root word header, accepted words on the left, letters and
//! messages on the right, input field and status bar at the bottom.

use super::app::{App, MessageStyle};
use crate::output::formatters::{count_badge, letter_tiles};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
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

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Accepted words
            Constraint::Percentage(50), // Letters + messages
        ])
        .split(chunks[1]);

    render_used_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::raw("🔤 WORD SCRAMBLE  "),
        Span::styled(
            letter_tiles(app.session.root()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
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

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .used()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    count_badge(word.chars().count()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::raw(word.clone()),
            ]))
        })
        .collect();

    let title = format!(" Your Words ({}) ", app.session.used().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input length gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_letter_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

/// How much of the root the current input would use
fn render_letter_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.letters().len();
    let typed = app.input_buffer.trim().chars().count();
    let percent = if total == 0 {
        0
    } else {
        (typed * 100 / total).min(100) as u16
    };
    let color = if app.session.letters().covers(&app.input_buffer.trim().to_lowercase()) {
        Color::Green
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{typed}/{total} letters"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .rev()
        .flat_map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            [
                Line::from(Span::styled(
                    msg.title.clone(),
                    style.add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(msg.text.clone(), style)),
            ]
        })
        .collect();

    let messages = Paragraph::new(lines)
        .block(Block::default().title(" Messages ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    f.render_widget(messages, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word | Enter: submit | Esc: clear ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let game = Paragraph::new(format!("Game: {}", app.games_played)).alignment(Alignment::Center);
    f.render_widget(game, chunks[0]);

    let letters = Paragraph::new(format!(
        "Words: {} | Letters: {}",
        app.session.used().len(),
        app.session.letter_total()
    ))
    .alignment(Alignment::Center);
    f.render_widget(letters, chunks[1]);

    let help = Paragraph::new("Ctrl-N: New Word | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
