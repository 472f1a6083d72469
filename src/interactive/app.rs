//! TUI application state and logic

use crate::core::{GameStatus, WORD_LENGTH, Word};
use crate::game::{Game, GameConfig, GameStats};
use crate::wordlists::random_secret;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// How many messages the panel keeps
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub words: &'a [Word],
    pub config: GameConfig,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: GameStats,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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
    /// Start the first game with a secret drawn from `words`
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty.
    pub fn new(words: &'a [Word], config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let secret = random_secret(words, &mut rng)
            .context("word list is empty")?
            .clone();

        Ok(Self {
            words,
            config,
            game: Game::new(secret, config),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Guess the five-letter word in {} tries.",
                        config.max_attempts()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: GameStats::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        })
    }

    /// Submit whatever is in the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        if let Err(e) = self.game.submit_guess(&input, self.words) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        match self.game.status() {
            GameStatus::InProgress => {
                let message = self.game.message();
                self.add_message(&message, MessageStyle::Info);
            }
            status => {
                self.stats.record(&self.game);
                self.input_mode = InputMode::GameOver;

                let style = if status == GameStatus::Won {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                let message = self.game.message();
                self.add_message(&message, style);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        // A non-empty list was checked in `new`, so a secret is always drawn
        if let Some(secret) = random_secret(self.words, &mut self.rng) {
            self.game = Game::new(secret.clone(), self.config);
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('c') = key.code
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => {
                    if self.input_buffer.len() == WORD_LENGTH {
                        self.submit_guess();
                    } else {
                        self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                _ => {}
            },
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
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
