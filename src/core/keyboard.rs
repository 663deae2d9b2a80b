//! Cumulative keyboard state
//!
//! Tracks the best-known feedback for every letter A-Z across all guesses.
//! Merging is a max under `Unknown < Absent < Present < Correct`, so folding
//! is idempotent and independent of order.

use super::{Feedback, LetterFeedback, Word};

/// QWERTY rows used for the on-screen keyboard
pub const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Two-column A-Z rows for narrow panels
pub const ALPHA_ROWS: [&str; 13] = [
    "AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST", "UV", "WX", "YZ",
];

/// Arrangement of the on-screen keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardLayout {
    #[default]
    Qwerty,
    Alphabetical,
}

impl KeyboardLayout {
    /// Narrowest panel, in columns, that still fits the QWERTY top row
    pub const QWERTY_MIN_WIDTH: u16 = 44;

    #[must_use]
    pub const fn rows(self) -> &'static [&'static str] {
        match self {
            Self::Qwerty => &QWERTY_ROWS,
            Self::Alphabetical => &ALPHA_ROWS,
        }
    }

    /// QWERTY when the panel is wide enough, two columns otherwise
    #[must_use]
    pub const fn for_width(width: u16) -> Self {
        if width >= Self::QWERTY_MIN_WIDTH {
            Self::Qwerty
        } else {
            Self::Alphabetical
        }
    }
}

/// Best-known status of a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeyStatus {
    /// Letter not guessed yet
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<LetterFeedback> for KeyStatus {
    fn from(feedback: LetterFeedback) -> Self {
        match feedback {
            LetterFeedback::Absent => Self::Absent,
            LetterFeedback::Present => Self::Present,
            LetterFeedback::Correct => Self::Correct,
        }
    }
}

/// Best-known status for each letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    keys: [KeyStatus; 26],
}

impl KeyboardState {
    /// Keyboard with every letter `Unknown`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a letter
    ///
    /// Accepts either case; anything outside A-Z is `Unknown`.
    #[must_use]
    pub fn status(&self, letter: u8) -> KeyStatus {
        let letter = letter.to_ascii_uppercase();
        if letter.is_ascii_uppercase() {
            self.keys[usize::from(letter - b'A')]
        } else {
            KeyStatus::Unknown
        }
    }

    /// Merge a single letter status, never downgrading
    pub fn merge_letter(&mut self, letter: u8, status: KeyStatus) {
        let letter = letter.to_ascii_uppercase();
        if letter.is_ascii_uppercase() {
            let slot = &mut self.keys[usize::from(letter - b'A')];
            *slot = (*slot).max(status);
        }
    }

    /// Fold the feedback of one guess into the keyboard
    pub fn fold(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, status) in guess.chars().iter().zip(feedback.iter()) {
            self.merge_letter(letter, status.into());
        }
    }

    /// Letters A-Z paired with their status
    pub fn iter(&self) -> impl Iterator<Item = (char, KeyStatus)> + '_ {
        (b'A'..=b'Z').zip(self.keys.iter().copied()).map(|(l, s)| (char::from(l), s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};

    fn fold_all(guesses: &[(&str, [LetterFeedback; 5])]) -> KeyboardState {
        let mut keyboard = KeyboardState::new();
        for (guess, letters) in guesses {
            keyboard.fold(&Word::new(*guess).unwrap(), &Feedback::new(*letters));
        }
        keyboard
    }

    #[test]
    fn starts_unknown() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.iter().all(|(_, s)| s == KeyStatus::Unknown));
        assert_eq!(keyboard.iter().count(), 26);
    }

    #[test]
    fn fold_records_each_letter() {
        let keyboard = fold_all(&[("crate", [Correct, Correct, Correct, Absent, Correct])]);
        assert_eq!(keyboard.status(b'C'), KeyStatus::Correct);
        assert_eq!(keyboard.status(b't'), KeyStatus::Absent);
        assert_eq!(keyboard.status(b'Z'), KeyStatus::Unknown);
        assert_eq!(keyboard.status(b'!'), KeyStatus::Unknown);
    }

    #[test]
    fn correct_never_downgrades() {
        let keyboard = fold_all(&[
            ("crane", [Correct, Absent, Absent, Absent, Absent]),
            ("occur", [Absent, Present, Absent, Absent, Absent]),
        ]);
        assert_eq!(keyboard.status(b'C'), KeyStatus::Correct);
    }

    #[test]
    fn present_never_downgrades_to_absent() {
        let keyboard = fold_all(&[
            ("alley", [Correct, Present, Absent, Present, Absent]),
            ("lemon", [Absent, Absent, Absent, Absent, Absent]),
        ]);
        assert_eq!(keyboard.status(b'L'), KeyStatus::Present);
        assert_eq!(keyboard.status(b'E'), KeyStatus::Present);
        assert_eq!(keyboard.status(b'M'), KeyStatus::Absent);
    }

    #[test]
    fn same_guess_letter_takes_best_position() {
        // Repeated letter with mixed feedback in one guess
        let keyboard = fold_all(&[("speed", [Absent, Absent, Absent, Correct, Absent])]);
        assert_eq!(keyboard.status(b'E'), KeyStatus::Correct);
    }

    #[test]
    fn fold_is_order_independent_and_idempotent() {
        let a = ("crane", [Present, Absent, Correct, Absent, Present]);
        let b = ("eclat", [Correct, Correct, Absent, Correct, Absent]);

        let forward = fold_all(&[a, b]);
        let backward = fold_all(&[b, a]);
        let repeated = fold_all(&[a, b, a, b]);

        assert_eq!(forward, backward);
        assert_eq!(forward, repeated);
    }

    #[test]
    fn every_layout_covers_alphabet() {
        let alphabet: Vec<char> = ('A'..='Z').collect();
        for layout in [KeyboardLayout::Qwerty, KeyboardLayout::Alphabetical] {
            let mut letters: Vec<char> = layout.rows().iter().flat_map(|r| r.chars()).collect();
            letters.sort_unstable();
            assert_eq!(letters, alphabet, "{layout:?}");
        }
    }

    #[test]
    fn narrow_panels_use_two_columns() {
        assert_eq!(KeyboardLayout::for_width(80), KeyboardLayout::Qwerty);
        assert_eq!(KeyboardLayout::for_width(44), KeyboardLayout::Qwerty);
        assert_eq!(KeyboardLayout::for_width(43), KeyboardLayout::Alphabetical);
        assert_eq!(KeyboardLayout::Alphabetical.rows().len(), 13);
    }

    #[test]
    fn qwerty_covers_alphabet() {
        let mut letters: Vec<char> = QWERTY_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('A'..='Z').collect();
        assert_eq!(letters, alphabet);
    }
}
