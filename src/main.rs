//! Wordle Game - CLI
//!
//! Word guessing game with TUI and plain-text modes.

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{SimulationConfig, check_guess, run_simple, run_simulation},
    core::DuplicatePolicy,
    dictionary::Dictionary,
    engine::GameConfig,
    output::{print_check_result, print_simulation_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guesses per game (1-26)
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value = "6",
        value_parser = clap::value_parser!(u8).range(1..=26)
    )]
    max_attempts: u8,

    /// Duplicate-letter rule: simplified (default) or standard
    #[arg(short, long, global = true, default_value = "simplified")]
    policy: String,

    /// Seed for answer selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text, no TUI)
    Simple,

    /// Show the feedback for a guess against a given answer
    Check {
        /// The guessed word
        guess: String,

        /// The answer to compare against
        answer: String,
    },

    /// Play many games with a bot and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordle_game={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Dictionary::embedded().context("embedded word list is unusable"),
        path => Dictionary::from_file(path)
            .with_context(|| format!("failed to load word list from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let policy = DuplicatePolicy::from_name(&cli.policy)
        .ok_or_else(|| anyhow!("unknown policy '{}' (expected simplified or standard)", cli.policy))?;
    let config = GameConfig::new()
        .with_max_attempts(usize::from(cli.max_attempts))
        .with_policy(policy);

    let dictionary = load_dictionary(&cli.wordlist)?;
    let mut rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    tracing::debug!(
        words = dictionary.len(),
        max_attempts = config.max_attempts,
        policy = policy.name(),
        "starting"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, config, rng),
        Commands::Simple => run_simple(&dictionary, config, &mut rng).map_err(|e| anyhow!(e)),
        Commands::Check { guess, answer } => {
            let result =
                check_guess(&guess, &answer, policy, &dictionary).map_err(|e| anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Simulate { count } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("Simulating {count} games (seed {seed})...");
            let result = run_simulation(
                &dictionary,
                &SimulationConfig::new(count, seed, config),
                true,
            );
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, config, rng);
    run_tui(app)
}
