//! Error taxonomy for the game engine and dictionary

use thiserror::Error;

/// Errors produced by the dictionary and the guess engine
#[derive(Debug, Error)]
pub enum GameError {
    /// The guess does not have exactly `WORD_LENGTH` letters
    #[error("Guess must have exactly 5 letters, got {len}")]
    IncompleteGuess { len: usize },

    /// The guess is well-formed but not in the dictionary
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    /// A guess was submitted after the game reached a terminal state
    #[error("The game is already over")]
    GameAlreadyOver,

    /// The dictionary contains no valid words
    #[error("Dictionary contains no valid five-letter words")]
    EmptyDictionary,

    /// A word list file could not be read
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Invalid input the player can correct without losing a turn
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::IncompleteGuess { .. } | Self::UnknownWord(_))
    }

    /// The caller kept submitting guesses after the game ended
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::GameAlreadyOver)
    }
}
