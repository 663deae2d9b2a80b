//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable in isolation.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{DuplicatePolicy, Feedback, LetterFeedback};
pub use keyboard::{ALPHA_ROWS, KeyStatus, KeyboardLayout, KeyboardState, QWERTY_ROWS};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;
