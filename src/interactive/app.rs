//! TUI application state and logic

use crate::core::Verdict;
use crate::dictionary::DictionaryProvider;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session,
    pub words: &'a [String],
    pub dictionary: &'a dyn DictionaryProvider,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub last_verdict: Option<Verdict>,
    pub games_played: usize,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub title: String,
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a [String], dictionary: &'a dyn DictionaryProvider, mut rng: StdRng) -> Self {
        let session = Session::start(words, &mut rng);

        let mut app = Self {
            session,
            words,
            dictionary,
            input_buffer: String::new(),
            messages: Vec::new(),
            last_verdict: None,
            games_played: 1,
            should_quit: false,
            rng,
        };
        app.add_message(
            "Welcome!",
            "Make as many words as you can from the root word.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the input buffer as a candidate word
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        let verdict = self.session.submit(&input, self.dictionary);
        let message = verdict.message(input.trim(), self.session.root());

        if verdict.is_accepted() {
            self.input_buffer.clear();
            self.add_message(verdict.title(), &message, MessageStyle::Success);
        } else {
            self.add_message(verdict.title(), &message, MessageStyle::Error);
        }
        self.last_verdict = Some(verdict);
    }

    pub fn new_game(&mut self) {
        self.session.restart(self.words, &mut self.rng);
        self.games_played += 1;
        self.input_buffer.clear();
        self.messages.clear();
        self.last_verdict = None;
        self.add_message(
            "New game",
            &format!("Your new root word is '{}'.", self.session.root()),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, title: &str, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            title: title.to_string(),
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                if self.input_buffer.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input_buffer.clear();
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            debug!(
                "quitting after {} games, {} words in the last one",
                app.games_played,
                app.session.used().len()
            );
            break;
        }
    }

    Ok(())
}
