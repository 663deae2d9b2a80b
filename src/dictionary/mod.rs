//! Dictionary and answer selection
//!
//! The dictionary is an immutable set of five-letter words that serves as both
//! the answer pool and the guess-validity oracle.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Choose one word uniformly at random
///
/// # Errors
///
/// Returns `GameError::EmptyDictionary` if `words` is empty.
pub fn select_answer<'a, T, R: Rng + ?Sized>(
    words: &'a [T],
    rng: &mut R,
) -> Result<&'a T, GameError> {
    words.choose(rng).ok_or(GameError::EmptyDictionary)
}

/// Immutable set of valid words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw strings
    ///
    /// Invalid entries are skipped and duplicates dropped; the order of first
    /// appearance is kept.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if no valid word remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "slate", "crane", "nope"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.is_valid_guess("Slate"));
    ///
    /// assert!(Dictionary::new(Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_words(words.into_iter().filter_map(|s| Word::new(s).ok()))
    }

    /// Build a dictionary from already validated words
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if `words` yields nothing.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self, GameError> {
        let mut lookup = FxHashSet::default();
        let mut ordered = Vec::new();

        for word in words {
            if lookup.insert(word.clone()) {
                ordered.push(word);
            }
        }

        if ordered.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        tracing::info!(words = ordered.len(), "dictionary loaded");
        Ok(Self {
            words: ordered,
            lookup,
        })
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if the embedded list has no valid words.
    pub fn embedded() -> Result<Self, GameError> {
        Self::from_words(loader::words_from_slice(WORDS))
    }

    /// Load a dictionary from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if the file cannot be read, or
    /// `GameError::EmptyDictionary` if it contains no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        Self::from_words(loader::load_from_file(path)?)
    }

    /// Pick the answer for a new game
    pub fn select_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }

    /// Case-insensitive membership test
    ///
    /// Anything that is not a five-letter word is simply not valid.
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.lookup.contains(&w))
    }

    /// Membership test for an already validated word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// All words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterate over all words
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
