//! TUI rendering with ratatui
//!
//! Board, keyboard and share panel for the daily game.

use super::app::{App, MessageStyle};
use crate::core::{Evaluation, LetterStates, MAX_GUESSES, WORD_LENGTH};
use crate::game::{Phase, Session, date_key};
use crate::output::encode_share;
use crate::output::formatters::KEYBOARD_ROWS;
use crate::storage::SessionStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SessionStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Board and keyboard
            Constraint::Length(7),  // Messages
            Constraint::Length(1),  // Help bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = format!("🟩 DAILY WORDLE | {}", date_key(app.date));
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

const fn evaluation_color(evaluation: Evaluation) -> Color {
    match evaluation {
        Evaluation::Correct => Color::Green,
        Evaluation::Close => Color::Yellow,
        Evaluation::Wrong => Color::DarkGray,
    }
}

fn tile(letter: Option<char>, style: Style) -> Span<'static> {
    let text = letter.map_or_else(|| " · ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
    Span::styled(text, style)
}

fn board_row(session: &Session, row: usize, shaking: bool) -> Line<'static> {
    let letters: Vec<char> = session.rows()[row].chars().collect();
    let feedback = session.evaluations()[row];

    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for position in 0..WORD_LENGTH {
        let letter = letters.get(position).copied();
        let style = match feedback {
            Some(feedback) => Style::default()
                .fg(Color::Black)
                .bg(evaluation_color(feedback.codes()[position]))
                .add_modifier(Modifier::BOLD),
            None if shaking => Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            None if letter.is_some() => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::DarkGray),
        };
        spans.push(tile(letter, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(session) = app.game.session() else {
        let waiting = Paragraph::new("Loading word list...")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(waiting, area);
        return;
    };

    let shaking = app.shaking_row();
    let mut lines = vec![Line::from("")];
    for row in 0..MAX_GUESSES {
        lines.push(board_row(session, row, shaking == Some(row)));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(board, area);
}

fn keyboard_lines(states: &LetterStates) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    let style = states.get(letter).map_or_else(
                        || Style::default().fg(Color::White),
                        |evaluation| {
                            Style::default()
                                .fg(Color::Black)
                                .bg(evaluation_color(evaluation))
                        },
                    );
                    [tile(Some(letter), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_side_panel<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(4),    // Share / status
        ])
        .split(area);

    let keyboard = Paragraph::new(keyboard_lines(&app.game.letter_states()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, chunks[0]);

    render_status_panel(f, app, chunks[1]);
}

fn render_status_panel<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = match (app.game.phase(), app.game.session()) {
        (Phase::Over(_), Some(session)) => (" Share ", encode_share(session), Color::Green),
        (Phase::Playing, Some(session)) => (
            " Progress ",
            format!(
                "Guess {} of {MAX_GUESSES}\nRule: {}",
                session.active_row() + 1,
                app.game.rule()
            ),
            Color::Yellow,
        ),
        _ => (" Status ", "Waiting for today's word".to_string(), Color::Red),
    };

    let panel = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(color)),
        );
    f.render_widget(panel, area);
}

fn render_messages<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
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

fn render_help<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = if matches!(app.game.phase(), Phase::Over(_)) {
        "q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
