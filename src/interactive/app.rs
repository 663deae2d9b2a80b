//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::engine::{GameConfig, GameSession, GameStatus};
use crate::error::GameError;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Set when the last submission was rejected; cleared by the next key
    pub invalid_row: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    /// Wins indexed by number of guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: GameConfig, mut rng: StdRng) -> Self {
        let session = GameSession::new(dictionary, config, &mut rng);
        let max_attempts = session.max_attempts();

        Self {
            session,
            rng,
            messages: vec![
                Message {
                    text: format!(
                        "Welcome! Guess the five-letter word in {max_attempts} tries."
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Backspace to delete, Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                guess_distribution: vec![0; max_attempts + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Playing,
            invalid_row: false,
        }
    }

    /// Dispatch a key press to the current mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Char('n')) if ctrl => self.new_game(),
            (_, KeyCode::Char(_)) if ctrl => {}
            (_, KeyCode::Esc) => self.should_quit = true,
            (InputMode::GameOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::GameOver, KeyCode::Char('n') | KeyCode::Enter) => self.new_game(),
            (InputMode::GameOver, _) => {
                // Board is frozen until a new game starts
            }
            (InputMode::Playing, KeyCode::Char(c)) => self.handle_letter(c),
            (InputMode::Playing, KeyCode::Backspace) => self.handle_backspace(),
            (InputMode::Playing, KeyCode::Enter) => self.handle_enter(),
            (InputMode::Playing, _) => {}
        }
    }

    pub fn handle_letter(&mut self, letter: char) {
        self.invalid_row = false;
        self.session.enter_letter(letter);
    }

    pub fn handle_backspace(&mut self) {
        self.invalid_row = false;
        self.session.delete_letter();
    }

    pub fn handle_enter(&mut self) {
        match self.session.submit_row() {
            Ok(result) => {
                self.invalid_row = false;
                match result.status {
                    GameStatus::InProgress => {}
                    GameStatus::Won | GameStatus::Lost => self.finish_game(),
                }
            }
            Err(GameError::IncompleteGuess { .. }) => {
                self.invalid_row = true;
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(GameError::UnknownWord(word)) => {
                self.invalid_row = true;
                self.add_message(&format!("{word} is not in the word list"), MessageStyle::Error);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        let Some(outcome) = self.session.outcome() else {
            return;
        };

        self.stats.total_games += 1;
        if outcome.won {
            self.stats.games_won += 1;
            self.stats.current_streak += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(outcome.attempts) {
                *slot += 1;
            }

            let celebration = match outcome.attempts {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                6 => "😅 PHEW! Got it in six! 😅",
                _ => "🎊 SOLVED! 🎊",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.stats.current_streak = 0;
            self.add_message(
                &format!("The word was {}", outcome.answer),
                MessageStyle::Error,
            );
        }

        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session.restart(&mut self.rng);
        self.messages.clear();
        self.invalid_row = false;
        self.input_mode = InputMode::Playing;
        self.add_message("New game started!", MessageStyle::Info);
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
        tracing::error!(%err, "tui exited with error");
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
