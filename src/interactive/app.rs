//! TUI application state and logic

use crate::game::{Game, InputToken, Outcome, Phase, Step};
use crate::storage::SessionStore;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<S: SessionStore> {
    pub game: Game<S>,
    pub date: NaiveDate,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// How long a rejection notice stays up
    pub notice_duration: Duration,
    notice_since: Option<Instant>,
}

impl<S: SessionStore> App<S> {
    #[must_use]
    pub fn new(game: Game<S>, date: NaiveDate, notice_duration: Duration) -> Self {
        let mut app = Self {
            game,
            date,
            messages: Vec::new(),
            should_quit: false,
            notice_duration,
            notice_since: None,
        };

        match app.game.phase() {
            Phase::AwaitingWord => {
                app.add_message("Waiting for the word list...", MessageStyle::Error);
            }
            Phase::Playing => {
                if app.game.session().is_some_and(|s| s.guess_count() > 0) {
                    app.add_message("Welcome back! Picking up where you left off.", MessageStyle::Info);
                } else {
                    app.add_message("Guess today's five-letter word in six tries.", MessageStyle::Info);
                }
            }
            Phase::Over(_) => {
                app.add_message(
                    "Today's game is already finished. Come back tomorrow!",
                    MessageStyle::Info,
                );
            }
        }
        app.report_storage_error();
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Whether the rejected row is currently flashing
    #[must_use]
    pub fn shaking_row(&self) -> Option<usize> {
        self.game
            .notice()
            .filter(|notice| notice.shakes_row())
            .map(|notice| notice.row)
    }

    /// Clear the notice once it has been shown long enough
    pub fn tick(&mut self, now: Instant) {
        if let Some(since) = self.notice_since
            && now.duration_since(since) >= self.notice_duration
        {
            self.game.acknowledge_notice();
            self.notice_since = None;
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        let token = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if matches!(self.game.phase(), Phase::Over(_)) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(c) => InputToken::Letter(c),
            KeyCode::Backspace => InputToken::Delete,
            KeyCode::Enter => InputToken::Submit,
            _ => return,
        };

        let step = self.game.handle(token);
        debug!(?token, ?step, "key handled");

        match step {
            Step::Rejected(rejection) => {
                self.notice_since = Some(now);
                self.add_message(rejection.message(), MessageStyle::Error);
            }
            Step::Evaluated {
                outcome: Some(outcome),
                ..
            } => self.announce(outcome),
            _ => {}
        }
        self.report_storage_error();
    }

    fn announce(&mut self, outcome: Outcome) {
        let Some(session) = self.game.session() else {
            return;
        };

        match outcome {
            Outcome::Won => {
                let celebration = match session.guess_count() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                let text = format!(
                    "Out of guesses! The word was {}",
                    session.secret().text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Error);
            }
        }
        self.add_message("Press 'q' to quit. Come back tomorrow!", MessageStyle::Info);
    }

    fn report_storage_error(&mut self) {
        if let Some(e) = self.game.take_storage_error() {
            self.add_message(&format!("Progress may not be saved: {e}"), MessageStyle::Error);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SessionStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: SessionStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so a pending notice can expire without a key press
        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
