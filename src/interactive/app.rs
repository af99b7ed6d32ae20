//! TUI application state and logic

use crate::game::{Game, GameEvent, InputEvent, Outcome};
use crate::output::formatters::celebration;
use crate::settings::Settings;
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Number of messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Rows of the settings dialog
pub const SETTINGS_ITEMS: [(&str, &str); 3] = [
    ("Hard Mode", "Any revealed hints must be used in subsequent guesses"),
    ("Dark Theme", "Reduce luminance"),
    ("High Contrast", "For improved color vision"),
];

/// Application state
pub struct App<S> {
    pub game: Game<S>,
    rng: StdRng,
    pub overlay: Overlay,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Dialog drawn over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Statistics,
    Settings { selected: usize },
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

impl<S: KeyValueStore> App<S> {
    /// Wrap a started game; `show_help` opens the help dialog first
    #[must_use]
    pub fn new(game: Game<S>, rng: StdRng, show_help: bool) -> Self {
        let welcome = if game.session().row_index() > 0 {
            "Welcome back! Resuming your game."
        } else {
            "New game started. Good luck!"
        };

        let mut app = Self {
            game,
            rng,
            overlay: if show_help { Overlay::Help } else { Overlay::None },
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(welcome, MessageStyle::Info);
        app
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.game.settings()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let dialog = match key.code {
            KeyCode::F(1) => Some(Overlay::Help),
            KeyCode::F(2) => Some(Overlay::Statistics),
            KeyCode::F(3) => Some(Overlay::Settings { selected: 0 }),
            _ => None,
        };
        if let Some(dialog) = dialog {
            self.toggle_overlay(dialog);
            return;
        }

        match self.overlay {
            Overlay::Settings { selected } => self.handle_settings_key(key.code, selected),
            Overlay::Help | Overlay::Statistics => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.overlay = Overlay::None;
                } else if self.game.session().status().is_terminal() {
                    self.handle_finished_key(key.code);
                }
            }
            Overlay::None if self.game.session().status().is_terminal() => {
                self.handle_finished_key(key.code);
            }
            Overlay::None => self.handle_game_key(key.code),
        }
    }

    fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if std::mem::discriminant(&self.overlay) == std::mem::discriminant(&overlay)
        {
            Overlay::None
        } else {
            overlay
        };
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        let input = match code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Enter => InputEvent::Submit,
            KeyCode::Backspace | KeyCode::Delete => InputEvent::Delete,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => InputEvent::Letter(c),
            _ => return,
        };

        match self.game.handle(input) {
            GameEvent::Rejected(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            GameEvent::Scored(submission) => match submission.outcome {
                Outcome::Continue { .. } => {}
                Outcome::Won { attempts } => {
                    self.add_message(celebration(attempts), MessageStyle::Success);
                    self.add_message(
                        "Press 'n' for a new game or 'q' to quit.",
                        MessageStyle::Info,
                    );
                    self.overlay = Overlay::Statistics;
                }
                Outcome::Lost { solution } => {
                    self.add_message("You've run out of guesses! Game over!", MessageStyle::Error);
                    self.add_message(
                        &format!("The right word was: \"{}\"", solution.text().to_uppercase()),
                        MessageStyle::Info,
                    );
                    self.overlay = Overlay::Statistics;
                }
            },
            GameEvent::LetterAdded(_) | GameEvent::LetterRemoved | GameEvent::Ignored => {}
        }
    }

    fn handle_finished_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, code: KeyCode, selected: usize) {
        match code {
            KeyCode::Esc => self.overlay = Overlay::None,
            KeyCode::Up => {
                self.overlay = Overlay::Settings {
                    selected: selected.saturating_sub(1),
                };
            }
            KeyCode::Down => {
                self.overlay = Overlay::Settings {
                    selected: (selected + 1).min(SETTINGS_ITEMS.len() - 1),
                };
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_setting(selected),
            _ => {}
        }
    }

    fn toggle_setting(&mut self, selected: usize) {
        let mut settings = self.game.settings();
        match selected {
            0 => settings.hard_mode = !settings.hard_mode,
            1 => settings.dark_theme = !settings.dark_theme,
            _ => settings.high_contrast = !settings.high_contrast,
        }

        if let Err(e) = self.game.set_settings(settings) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn new_game(&mut self) {
        if self.game.new_game(&mut self.rng) {
            self.overlay = Overlay::None;
            self.messages.clear();
            self.add_message("New game started. Good luck!", MessageStyle::Info);
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
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
{
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
            tracing::info!("Quit at row {}", app.game.session().row_index());
            break;
        }
    }

    Ok(())
}
