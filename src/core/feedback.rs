//! Per-letter feedback for a guess
//!
//! Feedback is computed in two passes. Exact position matches are marked
//! first, then every remaining position is classified as present or absent.
//! How repeated letters are treated in the second pass depends on the
//! [`DuplicatePolicy`].

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
///
/// Ordered by precedence: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    /// Letter does not occur in the answer
    Absent,
    /// Letter occurs in the answer at another position
    Present,
    /// Letter is in the correct position
    Correct,
}

impl LetterFeedback {
    /// Emoji tile for this feedback
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// How repeated guess letters are matched against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Any non-exact letter is `Present` if the answer contains it anywhere.
    ///
    /// A repeated guess letter matching a single answer occurrence can be
    /// marked `Present` more than once.
    #[default]
    Simplified,
    /// Count-limited matching: exact matches consume answer letters first and
    /// `Present` marks draw from what is left.
    Standard,
}

impl DuplicatePolicy {
    /// Parse a policy from its CLI name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "simplified" | "simple" => Some(Self::Simplified),
            "standard" | "strict" => Some(Self::Standard),
            _ => None,
        }
    }

    /// CLI name of this policy
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simplified => "simplified",
            Self::Standard => "standard",
        }
    }
}

/// Ordered feedback for every position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Wrap an explicit per-position feedback array
    #[inline]
    #[must_use]
    pub const fn new(letters: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Calculate feedback using the default [`DuplicatePolicy::Simplified`] rules
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("alley").unwrap();
    /// let answer = Word::new("apple").unwrap();
    ///
    /// // Both L's are present even though APPLE has a single L
    /// let feedback = Feedback::calculate(&guess, &answer);
    /// assert_eq!(feedback.letters(), &[Correct, Present, Present, Present, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        Self::calculate_with(guess, answer, DuplicatePolicy::Simplified)
    }

    /// Calculate feedback for `guess` against `answer` under `policy`
    #[must_use]
    pub fn calculate_with(guess: &Word, answer: &Word, policy: DuplicatePolicy) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut available = answer.letter_counts();

        // First pass: exact position matches
        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *slot = LetterFeedback::Correct;
                let count = &mut available[usize::from(letter - b'A')];
                *count = count.saturating_sub(1);
            }
        }

        // Second pass: letters elsewhere in the answer
        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == LetterFeedback::Correct {
                continue;
            }
            let letter = guess.char_at(i);
            match policy {
                DuplicatePolicy::Simplified => {
                    if answer.has_letter(letter) {
                        *slot = LetterFeedback::Present;
                    }
                }
                DuplicatePolicy::Standard => {
                    let count = &mut available[usize::from(letter - b'A')];
                    if *count > 0 {
                        *slot = LetterFeedback::Present;
                        *count -= 1;
                    }
                }
            }
        }

        Self(result)
    }

    /// Feedback for each position, in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Feedback at a single position
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        WORD_LENGTH
    }

    /// Always false; feedback covers every position of a word
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over per-position feedback
    pub fn iter(&self) -> impl Iterator<Item = LetterFeedback> + '_ {
        self.0.iter().copied()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the `Correct` positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.iter().filter(|&f| f == LetterFeedback::Correct).count()
    }

    /// Count the `Present` positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.iter().filter(|&f| f == LetterFeedback::Present).count()
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(LetterFeedback::to_emoji).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
