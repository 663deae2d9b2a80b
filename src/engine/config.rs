//! Game configuration

use crate::core::DuplicatePolicy;

/// Number of guesses allowed per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Upper bound on guesses per game
pub const MAX_ATTEMPTS_LIMIT: usize = 26;

/// Configuration for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub policy: DuplicatePolicy,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            policy: DuplicatePolicy::Simplified,
        }
    }

    /// Set the number of attempts, clamped to `1..=MAX_ATTEMPTS_LIMIT`
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = if max_attempts == 0 {
            1
        } else if max_attempts > MAX_ATTEMPTS_LIMIT {
            MAX_ATTEMPTS_LIMIT
        } else {
            max_attempts
        };
        self
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
