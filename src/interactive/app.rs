//! TUI application state and logic

use crate::commands::{QueryError, UnscrambleConfig, find_pattern, unscramble};
use crate::config::QueryLimits;
use crate::corpus::{Corpus, LoadStats};
use crate::solver::{ScoredWord, group_by_length, rank};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub corpus: &'a Corpus,
    pub limits: QueryLimits,
    pub mode: Mode,
    pub input_buffer: String,
    pub results: Results<'a>,
    /// Problem with the current input, shown instead of results
    pub error: Option<String>,
    pub messages: Vec<Message>,
    pub stats: LoadStats,
    pub should_quit: bool,
}

/// Which query the input box feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Unscramble,
    Pattern,
}

impl Mode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Unscramble => Self::Pattern,
            Self::Pattern => Self::Unscramble,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unscramble => "Unscramble",
            Self::Pattern => "Pattern",
        }
    }
}

/// Results for the current input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results<'a> {
    Empty,
    /// Unscrambled words grouped by length, longest first
    Words {
        groups: Vec<(usize, Vec<ScoredWord<'a>>)>,
        total: usize,
    },
    /// Pattern matches in dictionary order
    Matches { shown: Vec<&'a str>, total: usize },
}

impl Results<'_> {
    /// Number of words found before the display cap
    #[must_use]
    pub const fn total(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Words { total, .. } | Self::Matches { total, .. } => *total,
        }
    }
}

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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(corpus: &'a Corpus, limits: QueryLimits) -> Self {
        let stats = corpus.stats();
        let mut app = Self {
            corpus,
            limits,
            mode: Mode::Unscramble,
            input_buffer: String::new(),
            results: Results::Empty,
            error: None,
            messages: Vec::new(),
            stats,
            should_quit: false,
        };

        if stats.loaded {
            app.add_message(
                &format!("Dictionary ready: {} words", stats.total_words),
                MessageStyle::Info,
            );
            app.add_message(
                "Type letters to unscramble, '?' is a blank. TAB for patterns.",
                MessageStyle::Info,
            );
        } else {
            app.add_message("Dictionary unavailable", MessageStyle::Error);
        }
        app
    }

    /// Recompute results for the current input
    pub fn refresh(&mut self) {
        self.error = None;
        if self.input_buffer.is_empty() {
            self.results = Results::Empty;
            return;
        }

        let outcome = match self.mode {
            Mode::Unscramble => self.unscramble_input(),
            Mode::Pattern => self.match_input(),
        };
        match outcome {
            Ok(results) => self.results = results,
            Err(err) => {
                self.results = Results::Empty;
                self.error = Some(err.to_string());
            }
        }
    }

    fn unscramble_input(&self) -> Result<Results<'a>, QueryError> {
        let mut config = UnscrambleConfig::new(self.input_buffer.as_str());
        config.limit = Some(self.limits.max_results);
        let result = unscramble(self.corpus, &config, &self.limits)?;
        Ok(Results::Words {
            groups: group_by_length(&result.words),
            total: result.total,
        })
    }

    fn match_input(&self) -> Result<Results<'a>, QueryError> {
        let result = find_pattern(self.corpus, &self.input_buffer, self.limits.max_results)?;
        Ok(Results::Matches {
            shown: result.shown,
            total: result.total,
        })
    }

    /// Switch between unscrambling and pattern matching, keeping the input
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.refresh();
        self.add_message(
            &format!("Switched to {} mode", self.mode.label()),
            MessageStyle::Info,
        );
    }

    /// Record the current query in the message log
    pub fn submit(&mut self) {
        if self.input_buffer.is_empty() {
            return;
        }
        if let Some(err) = self.error.clone() {
            self.add_message(&err, MessageStyle::Error);
            return;
        }

        let total = self.results.total();
        let query = self.input_buffer.to_uppercase();
        let best = match &self.results {
            Results::Words { groups, .. } => groups
                .iter()
                .flat_map(|(_, words)| words)
                .max_by(|a, b| rank(b, a))
                .copied(),
            _ => None,
        };

        if total == 0 {
            self.add_message(&format!("{query}: no words"), MessageStyle::Error);
        } else if let Some(best) = best {
            self.add_message(
                &format!(
                    "{query}: {total} words, best {} ({})",
                    best.word.to_uppercase(),
                    best.score
                ),
                MessageStyle::Success,
            );
        } else {
            self.add_message(&format!("{query}: {total} matches"), MessageStyle::Success);
        }
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.refresh();
    }

    /// Apply a key press; returns without effect for keys with no binding
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.input_buffer.is_empty() {
                    self.should_quit = true;
                } else {
                    self.clear_input();
                }
            }
            KeyCode::Tab => self.toggle_mode(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                if self.input_buffer.pop().is_some() {
                    self.refresh();
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() || c == '?' => {
                self.input_buffer.push(c.to_ascii_lowercase());
                self.refresh();
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
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
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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
