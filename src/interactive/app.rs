//! TUI application state and logic

use crate::core::{Candidate, WORD_LEN};
use crate::filter::Session;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::VecDeque;
use std::io;
use tracing::debug;

/// Rows moved by PageUp / PageDown
const PAGE: usize = 10;

/// Messages kept in the log panel
pub const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub dictionary_label: String,
    pub focus: Field,
    pub banned: String,
    pub hints: [String; WORD_LEN],
    pub known: [String; WORD_LEN],
    pub messages: VecDeque<Message>,
    pub scroll: usize,
    pub should_quit: bool,
}

/// Input field with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Banned,
    Hint(usize),
    Known(usize),
}

impl Field {
    /// Next field in tab order: banned, hints 1-5, known 1-5
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Banned => Self::Hint(0),
            Self::Hint(i) if i + 1 < WORD_LEN => Self::Hint(i + 1),
            Self::Hint(_) => Self::Known(0),
            Self::Known(i) if i + 1 < WORD_LEN => Self::Known(i + 1),
            Self::Known(_) => Self::Banned,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Banned => Self::Known(WORD_LEN - 1),
            Self::Hint(0) => Self::Banned,
            Self::Hint(i) => Self::Hint(i - 1),
            Self::Known(0) => Self::Hint(WORD_LEN - 1),
            Self::Known(i) => Self::Known(i - 1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        dictionary: &'a [Candidate],
        dictionary_label: String,
        rank: bool,
        today: NaiveDate,
    ) -> Self {
        Self {
            session: Session::new(dictionary, rank, today),
            dictionary_label,
            focus: Field::Banned,
            banned: String::new(),
            hints: Default::default(),
            known: Default::default(),
            messages: VecDeque::from([Message {
                text: "Type clues; the list updates as you go.".to_string(),
                style: MessageStyle::Info,
            }]),
            scroll: 0,
            should_quit: false,
        }
    }

    /// Text of the focused field
    #[must_use]
    pub fn field_text(&self, field: Field) -> &str {
        match field {
            Field::Banned => &self.banned,
            Field::Hint(i) => &self.hints[i],
            Field::Known(i) => &self.known[i],
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.toggle_rank(),
            KeyCode::Char('x') if ctrl => self.reset(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.scroll_by(PAGE),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
            KeyCode::Char(_) => {}
            KeyCode::Backspace => self.erase(),
            _ => {}
        }
    }

    fn type_letter(&mut self, c: char) {
        let letter = c.to_ascii_uppercase();
        match self.focus {
            Field::Banned => {
                if !self.banned.contains(letter) {
                    self.banned.push(letter);
                }
            }
            Field::Hint(i) => {
                if !self.hints[i].contains(letter) {
                    self.hints[i].push(letter);
                }
            }
            Field::Known(i) => {
                self.known[i] = letter.to_string();
                // Skip to the next known letter
                if i + 1 < WORD_LEN {
                    self.focus = Field::Known(i + 1);
                }
                self.apply_field(Field::Known(i));
                return;
            }
        }
        self.apply_field(self.focus);
    }

    fn erase(&mut self) {
        let field = self.focus;
        match field {
            Field::Banned => {
                self.banned.pop();
            }
            Field::Hint(i) => {
                self.hints[i].pop();
            }
            Field::Known(i) => {
                self.known[i].clear();
            }
        }
        self.apply_field(field);
    }

    /// Push the text of `field` into the session's clues
    fn apply_field(&mut self, field: Field) {
        let text = self.field_text(field).to_string();
        self.session.edit(|state| match field {
            Field::Banned => state.set_banned(&text),
            Field::Hint(i) => state.set_hint(i, &text),
            Field::Known(i) => state.set_known(i, &text),
        });
        self.scroll = 0;
        debug!(
            candidates = self.session.candidates().len(),
            "clues updated"
        );

        if self.session.candidates().is_empty() {
            self.add_message("No words match these clues.", MessageStyle::Error);
        }
    }

    pub fn toggle_rank(&mut self) {
        let rank = !self.session.is_ranked();
        self.session.set_rank(rank);
        self.scroll = 0;
        if rank {
            self.add_message("Ranking on: best guesses first.", MessageStyle::Success);
        } else {
            self.add_message("Ranking off.", MessageStyle::Info);
        }
    }

    pub fn reset(&mut self) {
        self.banned.clear();
        self.hints = Default::default();
        self.known = Default::default();
        self.focus = Field::Banned;
        self.scroll = 0;
        self.session.reset();
        self.add_message("All clues cleared.", MessageStyle::Info);
    }

    fn scroll_by(&mut self, rows: usize) {
        let last = self.session.candidates().len().saturating_sub(1);
        self.scroll = (self.scroll + rows).min(last);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(Message {
            text: text.to_string(),
            style,
        });
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
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
            break;
        }
    }

    Ok(())
}
