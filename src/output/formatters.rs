//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyStatus, KeyboardState, LetterFeedback, QWERTY_ROWS, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let tile = format!(" {letter} ");
    match feedback {
        LetterFeedback::Correct => tile.black().on_green().bold(),
        LetterFeedback::Present => tile.black().on_yellow().bold(),
        LetterFeedback::Absent => tile.white().on_bright_black(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.iter())
        .map(|(letter, status)| letter_tile(letter, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a key according to its best-known status
#[must_use]
pub fn key_cap(letter: char, status: KeyStatus) -> ColoredString {
    let cap = letter.to_string();
    match status {
        KeyStatus::Correct => cap.black().on_green().bold(),
        KeyStatus::Present => cap.black().on_yellow().bold(),
        KeyStatus::Absent => cap.bright_black(),
        KeyStatus::Unknown => cap.white(),
    }
}

/// Render the QWERTY keyboard, one line per row, indented like a real keyboard
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|b| key_cap(char::from(b), keyboard.status(b)).to_string())
                .collect();
            format!("{}{}", " ".repeat(i), keys.join(" "))
        })
        .collect()
}

/// Plain-text letter marking used when colors are unavailable
///
/// Correct letters are uppercase in brackets, present letters in parentheses,
/// absent letters lowercase.
#[must_use]
pub fn plain_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.iter())
        .map(|(letter, status)| match status {
            LetterFeedback::Correct => format!("[{letter}]"),
            LetterFeedback::Present => format!("({letter})"),
            LetterFeedback::Absent => format!(" {} ", letter.to_ascii_lowercase()),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};

    #[test]
    fn plain_row_all_absent() {
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::new([Absent; 5]);
        assert_eq!(plain_row(&guess, &feedback), " c  r  a  n  e ");
    }

    #[test]
    fn plain_row_marks_each_status() {
        let guess = Word::new("alley").unwrap();
        let feedback = Feedback::new([Correct, Present, Present, Present, Absent]);
        assert_eq!(plain_row(&guess, &feedback), "[A](L)(L)(E) y ");
    }

    fn strip_ansi(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut in_escape = false;
        for c in text.chars() {
            if in_escape {
                in_escape = c != 'm';
            } else if c == '\x1b' {
                in_escape = true;
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn keyboard_has_three_rows() {
        let lines: Vec<String> = keyboard_lines(&KeyboardState::new())
            .iter()
            .map(|line| strip_ansi(line))
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Q W E R T Y U I O P");
        assert_eq!(lines[2], "  Z X C V B N M");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
