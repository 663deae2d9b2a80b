//! Game session state machine

use super::GameConfig;
use crate::core::{Feedback, KeyboardState, WORD_LENGTH, Word};
use crate::dictionary::Dictionary;
use crate::error::GameError;
use rand::Rng;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting guesses
    InProgress,
    /// The answer was guessed (terminal)
    Won,
    /// Attempts ran out without a win (terminal)
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub guess: Word,
    pub feedback: Feedback,
    pub status: GameStatus,
    /// Number of attempts used after this guess
    pub attempt_index: usize,
}

/// Terminal signal for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    pub answer: Word,
    pub attempts: usize,
}

/// A single game against one answer
///
/// Borrows the dictionary; owns everything else. Construct a fresh session
/// (or call [`GameSession::restart`]) for every game.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    answer: Word,
    attempt_index: usize,
    status: GameStatus,
    keyboard: KeyboardState,
    current_row: String,
    history: Vec<(Word, Feedback)>,
}

impl<'a> GameSession<'a> {
    /// Start a game with an answer chosen uniformly from the dictionary
    pub fn new<R: Rng + ?Sized>(dictionary: &'a Dictionary, config: GameConfig, rng: &mut R) -> Self {
        let answer = dictionary.select_answer(rng).clone();
        Self::with_answer(dictionary, config, answer)
    }

    /// Start a game with a fixed answer
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::dictionary::Dictionary;
    /// use wordle_game::engine::{GameConfig, GameSession, GameStatus};
    ///
    /// let dictionary = Dictionary::new(["crane", "crate"]).unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let mut game = GameSession::with_answer(&dictionary, GameConfig::default(), answer);
    ///
    /// let result = game.submit_guess("crate").unwrap();
    /// assert_eq!(result.status, GameStatus::InProgress);
    /// assert_eq!(result.attempt_index, 1);
    /// ```
    #[must_use]
    pub fn with_answer(dictionary: &'a Dictionary, config: GameConfig, answer: Word) -> Self {
        let config = config.with_max_attempts(config.max_attempts);
        tracing::trace!(answer = %answer, "game started");
        if !dictionary.contains(&answer) {
            tracing::debug!("answer is not in the dictionary");
        }

        Self {
            dictionary,
            config,
            answer,
            attempt_index: 0,
            status: GameStatus::InProgress,
            keyboard: KeyboardState::new(),
            current_row: String::with_capacity(WORD_LENGTH),
            history: Vec::new(),
        }
    }

    /// Throw away all state and start over with a new answer
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(self.dictionary, self.config, rng);
        tracing::debug!("game restarted");
    }

    /// Evaluate a guess
    ///
    /// Input is uppercased and stripped of everything outside A-Z before
    /// validation. Rejected guesses leave the session untouched.
    ///
    /// # Errors
    ///
    /// - `GameAlreadyOver` if the game is won or lost
    /// - `IncompleteGuess` if the normalized guess is not five letters
    /// - `UnknownWord` if the guess is not in the dictionary
    pub fn submit_guess(&mut self, raw: &str) -> Result<SubmitResult, GameError> {
        if self.status.is_terminal() {
            tracing::warn!(status = ?self.status, "guess submitted after game over");
            return Err(GameError::GameAlreadyOver);
        }

        let normalized = normalize_guess(raw);
        let len = normalized.len();
        if len != WORD_LENGTH {
            return Err(GameError::IncompleteGuess { len });
        }

        let guess = Word::new(normalized).map_err(|_| GameError::IncompleteGuess { len })?;
        if !self.dictionary.contains(&guess) {
            tracing::debug!(guess = %guess, "rejected unknown word");
            return Err(GameError::UnknownWord(guess.text().to_string()));
        }

        let feedback = Feedback::calculate_with(&guess, &self.answer, self.config.policy);
        self.attempt_index += 1;
        self.keyboard.fold(&guess, &feedback);

        self.status = if guess == self.answer {
            GameStatus::Won
        } else if self.attempt_index >= self.config.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        self.history.push((guess.clone(), feedback));

        tracing::debug!(
            guess = %guess,
            feedback = %feedback,
            attempt = self.attempt_index,
            "guess accepted"
        );
        if self.status.is_terminal() {
            tracing::info!(
                status = ?self.status,
                attempts = self.attempt_index,
                "game over"
            );
        }

        Ok(SubmitResult {
            guess,
            feedback,
            status: self.status,
            attempt_index: self.attempt_index,
        })
    }

    /// Append a letter to the current row
    ///
    /// Returns false if the letter is outside A-Z, the row is full, or the
    /// game is over.
    pub fn enter_letter(&mut self, letter: char) -> bool {
        if self.status.is_terminal()
            || !letter.is_ascii_alphabetic()
            || self.current_row.len() >= WORD_LENGTH
        {
            return false;
        }
        self.current_row.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter of the current row
    pub fn delete_letter(&mut self) -> Option<char> {
        if self.status.is_terminal() {
            return None;
        }
        self.current_row.pop()
    }

    /// Submit the current row
    ///
    /// The row is cleared when the guess is accepted and kept for editing
    /// when it is rejected.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::submit_guess`].
    pub fn submit_row(&mut self) -> Result<SubmitResult, GameError> {
        let row = self.current_row.clone();
        let result = self.submit_guess(&row)?;
        self.current_row.clear();
        Ok(result)
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of accepted guesses so far
    #[inline]
    #[must_use]
    pub const fn attempt_index(&self) -> usize {
        self.attempt_index
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempt_index)
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Letters typed into the row not yet submitted
    #[inline]
    #[must_use]
    pub fn current_row(&self) -> &str {
        &self.current_row
    }

    /// Accepted guesses with their feedback, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Win/loss and the answer once the game has ended
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.status.is_terminal().then(|| GameOutcome {
            won: self.status == GameStatus::Won,
            answer: self.answer.clone(),
            attempts: self.attempt_index,
        })
    }
}

/// Uppercase and drop everything outside A-Z
fn normalize_guess(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};
    use crate::core::{DuplicatePolicy, KeyStatus};
    use crate::engine::MAX_ATTEMPTS_LIMIT;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixture() -> Dictionary {
        Dictionary::new([
            "crane", "crate", "slate", "irate", "grate", "apple", "alley", "hello", "lemon",
            "occur", "train", "house",
        ])
        .unwrap()
    }

    fn game<'a>(dictionary: &'a Dictionary, answer: &str) -> GameSession<'a> {
        GameSession::with_answer(dictionary, GameConfig::default(), Word::new(answer).unwrap())
    }

    #[test]
    fn new_session_starts_in_progress() {
        let dictionary = fixture();
        let mut rng = StdRng::seed_from_u64(3);
        let session = GameSession::new(&dictionary, GameConfig::default(), &mut rng);

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempt_index(), 0);
        assert_eq!(session.max_attempts(), 6);
        assert!(dictionary.contains(session.answer()));
        assert!(session.history().is_empty());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn crate_against_crane() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        let result = session.submit_guess("CRATE").unwrap();
        assert_eq!(
            result.feedback.letters(),
            &[Correct, Correct, Correct, Absent, Correct]
        );
        assert_eq!(result.status, GameStatus::InProgress);
        assert_eq!(result.attempt_index, 1);
    }

    #[test]
    fn alley_against_apple_uses_simplified_policy() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "apple");

        let result = session.submit_guess("alley").unwrap();
        assert_eq!(
            result.feedback.letters(),
            &[Correct, Present, Present, Present, Absent]
        );
    }

    #[test]
    fn standard_policy_is_opt_in() {
        let dictionary = fixture();
        let config = GameConfig::default().with_policy(DuplicatePolicy::Standard);
        let mut session =
            GameSession::with_answer(&dictionary, config, Word::new("apple").unwrap());

        let result = session.submit_guess("alley").unwrap();
        assert_eq!(
            result.feedback.letters(),
            &[Correct, Present, Absent, Present, Absent]
        );
    }

    #[test]
    fn wrong_length_is_incomplete_and_free() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        for raw in ["", "cran", "cranes", "c-r-a-n", "12345"] {
            let err = session.submit_guess(raw).unwrap_err();
            assert!(
                matches!(err, GameError::IncompleteGuess { .. }),
                "{raw:?} gave {err:?}"
            );
            assert_eq!(session.attempt_index(), 0);
        }
        assert!(session.history().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected_and_free() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        let err = session.submit_guess("zzzzz").unwrap_err();
        assert!(matches!(err, GameError::UnknownWord(ref w) if w == "ZZZZZ"));
        assert_eq!(session.attempt_index(), 0);
        assert_eq!(session.keyboard().status(b'Z'), KeyStatus::Unknown);
    }

    #[test]
    fn input_is_normalized() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        let result = session.submit_guess(" s-l a t e!").unwrap();
        assert_eq!(result.guess.text(), "SLATE");
        assert_eq!(session.attempt_index(), 1);
    }

    #[test]
    fn each_valid_guess_consumes_one_attempt() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        for (expected, guess) in ["slate", "irate", "grate"].iter().enumerate() {
            let result = session.submit_guess(guess).unwrap();
            assert_eq!(result.attempt_index, expected + 1);
            assert_eq!(result.feedback.len(), WORD_LENGTH);
        }
        assert_eq!(session.attempts_remaining(), 3);
    }

    #[test]
    fn winning_guess_ends_game() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        session.submit_guess("slate").unwrap();
        let result = session.submit_guess("crane").unwrap();

        assert_eq!(result.status, GameStatus::Won);
        assert!(result.feedback.is_perfect());
        assert_eq!(
            session.outcome(),
            Some(GameOutcome {
                won: true,
                answer: Word::new("crane").unwrap(),
                attempts: 2,
            })
        );
    }

    #[test]
    fn win_on_final_attempt_is_a_win() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        for guess in ["slate", "irate", "grate", "apple", "hello"] {
            session.submit_guess(guess).unwrap();
        }
        let result = session.submit_guess("crane").unwrap();
        assert_eq!(result.status, GameStatus::Won);
        assert_eq!(result.attempt_index, 6);
    }

    #[test]
    fn six_misses_lose() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        let guesses = ["slate", "irate", "grate", "apple", "hello", "lemon"];
        for (i, guess) in guesses.iter().enumerate() {
            let result = session.submit_guess(guess).unwrap();
            if i < guesses.len() - 1 {
                assert_eq!(result.status, GameStatus::InProgress);
            } else {
                assert_eq!(result.status, GameStatus::Lost);
            }
        }

        let outcome = session.outcome().unwrap();
        assert!(!outcome.won);
        assert_eq!(outcome.answer.text(), "CRANE");
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn repeated_guesses_still_count() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        for _ in 0..6 {
            session.submit_guess("slate").unwrap();
        }
        assert_eq!(session.status(), GameStatus::Lost);
    }

    #[test]
    fn no_guess_accepted_after_game_over() {
        let dictionary = fixture();

        let mut won = game(&dictionary, "crane");
        won.submit_guess("crane").unwrap();
        assert!(matches!(
            won.submit_guess("slate"),
            Err(GameError::GameAlreadyOver)
        ));
        assert!(matches!(
            won.submit_guess("crane"),
            Err(GameError::GameAlreadyOver)
        ));
        // Even invalid input reports the terminal state first
        assert!(matches!(
            won.submit_guess("x"),
            Err(GameError::GameAlreadyOver)
        ));
        assert_eq!(won.attempt_index(), 1);

        let config = GameConfig::default().with_max_attempts(1);
        let mut lost = GameSession::with_answer(&dictionary, config, Word::new("crane").unwrap());
        assert_eq!(lost.submit_guess("slate").unwrap().status, GameStatus::Lost);
        assert!(matches!(
            lost.submit_guess("crane"),
            Err(GameError::GameAlreadyOver)
        ));
        assert_eq!(lost.status(), GameStatus::Lost);
    }

    #[test]
    fn oversized_attempt_count_is_clamped() {
        let dictionary = fixture();
        let mut config = GameConfig::new();
        config.max_attempts = usize::MAX;

        let session = GameSession::with_answer(&dictionary, config, Word::new("crane").unwrap());
        assert_eq!(session.max_attempts(), MAX_ATTEMPTS_LIMIT);

        let config = GameConfig::new().with_max_attempts(usize::MAX);
        let session = GameSession::with_answer(&dictionary, config, Word::new("crane").unwrap());
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS_LIMIT);
    }

    #[test]
    fn keyboard_folds_every_guess() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        session.submit_guess("occur").unwrap();
        assert_eq!(session.keyboard().status(b'C'), KeyStatus::Present);
        assert_eq!(session.keyboard().status(b'O'), KeyStatus::Absent);

        session.submit_guess("crate").unwrap();
        assert_eq!(session.keyboard().status(b'C'), KeyStatus::Correct);

        // LEMON has no C; C stays correct and E stays at its best
        session.submit_guess("lemon").unwrap();
        assert_eq!(session.keyboard().status(b'C'), KeyStatus::Correct);
        assert_eq!(session.keyboard().status(b'E'), KeyStatus::Correct);
        assert_eq!(session.keyboard().status(b'N'), KeyStatus::Present);
    }

    #[test]
    fn row_editing_commands() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        assert!(session.enter_letter('s'));
        assert!(!session.enter_letter('1'));
        assert!(!session.enter_letter('é'));
        for letter in "LATE".chars() {
            assert!(session.enter_letter(letter));
        }
        assert!(!session.enter_letter('X'));
        assert_eq!(session.current_row(), "SLATE");

        assert_eq!(session.delete_letter(), Some('E'));
        assert_eq!(session.current_row(), "SLAT");

        let err = session.submit_row().unwrap_err();
        assert!(matches!(err, GameError::IncompleteGuess { len: 4 }));
        assert_eq!(session.current_row(), "SLAT");

        session.enter_letter('e');
        let result = session.submit_row().unwrap();
        assert_eq!(result.guess.text(), "SLATE");
        assert_eq!(session.current_row(), "");
        assert_eq!(session.delete_letter(), None);
    }

    #[test]
    fn unknown_row_is_kept_for_editing() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        for letter in "QQQQQ".chars() {
            session.enter_letter(letter);
        }
        assert!(matches!(
            session.submit_row(),
            Err(GameError::UnknownWord(_))
        ));
        assert_eq!(session.current_row(), "QQQQQ");
        assert_eq!(session.attempt_index(), 0);
    }

    #[test]
    fn row_is_frozen_after_game_over() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");
        session.submit_guess("crane").unwrap();

        assert!(!session.enter_letter('A'));
        assert_eq!(session.delete_letter(), None);
    }

    #[test]
    fn restart_resets_everything() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");
        session.submit_guess("slate").unwrap();
        session.submit_guess("crane").unwrap();
        session.enter_letter('A');

        let mut rng = StdRng::seed_from_u64(11);
        session.restart(&mut rng);

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempt_index(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.current_row(), "");
        assert_eq!(*session.keyboard(), KeyboardState::new());
        assert!(dictionary.contains(session.answer()));
    }

    #[test]
    fn history_records_accepted_guesses_only() {
        let dictionary = fixture();
        let mut session = game(&dictionary, "crane");

        session.submit_guess("slate").unwrap();
        let _ = session.submit_guess("zzzzz");
        session.submit_guess("train").unwrap();

        let words: Vec<&str> = session.history().iter().map(|(w, _)| w.text()).collect();
        assert_eq!(words, ["SLATE", "TRAIN"]);
    }

    #[test]
    fn normalize_strips_non_letters() {
        assert_eq!(normalize_guess("cr4ne"), "CRNE");
        assert_eq!(normalize_guess("  Crane\n"), "CRANE");
        assert_eq!(normalize_guess("ñandú"), "AND");
    }
}
