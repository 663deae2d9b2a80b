//! Simulation command
//!
//! Plays many games with a bot that always guesses a random word consistent
//! with every feedback seen so far, and collects statistics.

use crate::core::{Feedback, Word};
use crate::dictionary::{Dictionary, select_answer};
use crate::engine::{GameConfig, GameOutcome, GameSession};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub game: GameConfig,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64, game: GameConfig) -> Self {
        Self { games, seed, game }
    }
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Winning games keyed by the number of attempts used
    pub distribution: BTreeMap<usize, usize>,
    pub average_attempts: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Play one game with the consistent-random bot
///
/// Returns `None` only if the bot runs out of candidate words, which cannot
/// happen while the answer is in the dictionary.
#[must_use]
pub fn play_one(dictionary: &Dictionary, config: GameConfig, seed: u64) -> Option<GameOutcome> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new(dictionary, config, &mut rng);
    let mut candidates: Vec<&Word> = dictionary.iter().collect();

    while !session.is_over() {
        let &guess = select_answer(&candidates, &mut rng).ok()?;
        let result = match session.submit_guess(guess.text()) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(%err, "simulated guess rejected");
                return None;
            }
        };

        candidates.retain(|&candidate| {
            Feedback::calculate_with(&result.guess, candidate, config.policy) == result.feedback
        });
    }

    session.outcome()
}

/// Run many games in parallel
#[must_use]
pub fn run_simulation(
    dictionary: &Dictionary,
    config: &SimulationConfig,
    show_progress: bool,
) -> SimulationResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .filter_map(|i| {
            let outcome = play_one(dictionary, config.game, config.seed.wrapping_add(i as u64));
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let mut distribution = BTreeMap::new();
    for outcome in outcomes.iter().filter(|o| o.won) {
        *distribution.entry(outcome.attempts).or_insert(0) += 1;
    }

    let wins: usize = distribution.values().sum();
    let total_attempts: usize = distribution.iter().map(|(a, n)| a * n).sum();

    tracing::info!(games = outcomes.len(), wins, "simulation finished");

    SimulationResult {
        total_games: outcomes.len(),
        wins,
        losses: outcomes.len() - wins,
        distribution,
        average_attempts: if wins > 0 {
            total_attempts as f64 / wins as f64
        } else {
            0.0
        },
        duration,
        games_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DuplicatePolicy;

    fn dictionary() -> Dictionary {
        Dictionary::new([
            "crane", "crate", "slate", "irate", "grate", "apple", "alley", "hello", "lemon",
        ])
        .unwrap()
    }

    #[test]
    fn play_one_always_finishes() {
        let dictionary = dictionary();
        for seed in 0..20 {
            let outcome = play_one(&dictionary, GameConfig::default(), seed).unwrap();
            assert!(outcome.attempts >= 1);
            assert!(outcome.attempts <= 6);
            assert!(dictionary.contains(&outcome.answer));
        }
    }

    #[test]
    fn play_one_is_deterministic_per_seed() {
        let dictionary = dictionary();
        let first = play_one(&dictionary, GameConfig::default(), 1234);
        let second = play_one(&dictionary, GameConfig::default(), 1234);
        assert_eq!(first, second);
    }

    #[test]
    fn single_word_dictionary_wins_first_try() {
        let dictionary = Dictionary::new(["hello"]).unwrap();
        let outcome = play_one(&dictionary, GameConfig::default(), 0).unwrap();
        assert!(outcome.won);
        assert_eq!(outcome.attempts, 1);
    }

    #[test]
    fn distribution_sums_to_wins() {
        let dictionary = dictionary();
        let config = SimulationConfig::new(40, 9, GameConfig::default());
        let result = run_simulation(&dictionary, &config, false);

        assert_eq!(result.total_games, 40);
        assert_eq!(result.wins + result.losses, result.total_games);
        assert_eq!(result.distribution.values().sum::<usize>(), result.wins);
        for &attempts in result.distribution.keys() {
            assert!((1..=6).contains(&attempts));
        }
        assert!((0.0..=1.0).contains(&result.win_rate()));
    }

    #[test]
    fn standard_policy_simulation_runs() {
        let dictionary = dictionary();
        let game = GameConfig::default().with_policy(DuplicatePolicy::Standard);
        let result = run_simulation(&dictionary, &SimulationConfig::new(10, 5, game), false);
        assert_eq!(result.total_games, 10);
    }

    #[test]
    fn zero_games() {
        let dictionary = dictionary();
        let result = run_simulation(
            &dictionary,
            &SimulationConfig::new(0, 0, GameConfig::default()),
            false,
        );
        assert_eq!(result.total_games, 0);
        assert!(result.distribution.is_empty());
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}
