//! Check command
//!
//! Computes the feedback for a single guess against a known answer.

use crate::core::{DuplicatePolicy, Feedback, Word};
use crate::dictionary::Dictionary;
use crate::engine::{GameConfig, GameSession};

/// Result of checking one guess
pub struct CheckResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
    pub policy: DuplicatePolicy,
    pub answer_in_dictionary: bool,
}

/// Evaluate `guess` against `answer` the same way a game would
///
/// The guess must be a dictionary word; the answer only has to be a valid
/// five-letter word.
///
/// # Errors
///
/// Returns an error if the answer is not a valid word, or if the game engine
/// rejects the guess (wrong length or not in the dictionary).
pub fn check_guess(
    guess: &str,
    answer: &str,
    policy: DuplicatePolicy,
    dictionary: &Dictionary,
) -> Result<CheckResult, String> {
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;
    let answer_in_dictionary = dictionary.contains(&answer);

    let config = GameConfig::new().with_policy(policy);
    let mut session = GameSession::with_answer(dictionary, config, answer.clone());
    let result = session.submit_guess(guess).map_err(|e| e.to_string())?;

    Ok(CheckResult {
        guess: result.guess,
        answer,
        feedback: result.feedback,
        policy,
        answer_in_dictionary,
    })
}
