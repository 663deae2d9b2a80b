//! Wordle Game
//!
//! A Wordle-style word guessing game: six attempts to find a hidden
//! five-letter word, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::engine::{GameConfig, GameSession, GameStatus};
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let mut game = GameSession::new(&dictionary, GameConfig::default(), &mut rand::rng());
//!
//! let answer = game.answer().text().to_string();
//! let result = game.submit_guess(&answer).unwrap();
//! assert_eq!(result.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word list and answer selection
pub mod dictionary;

// Game state machine
pub mod engine;

// Error taxonomy
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::GameError;
