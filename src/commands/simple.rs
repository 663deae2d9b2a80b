//! Simple interactive CLI mode
//!
//! Text-based game without the TUI

use crate::dictionary::Dictionary;
use crate::engine::{GameConfig, GameSession};
use crate::output::display::{print_board, print_outcome};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// to the terminal.
pub fn run_simple<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: GameConfig,
    rng: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the hidden five-letter word in {} tries.",
        config.max_attempts
    );
    println!("After each guess every letter is colored:\n");
    println!("  - {} right letter, right spot", " G ".black().on_green());
    println!("  - {} in the word, somewhere else", " Y ".black().on_yellow());
    println!("  - {} not in the word", " X ".white().on_bright_black());
    println!("\nCommands: 'quit' to exit, 'new' for a new game\n");

    let mut session = GameSession::new(dictionary, config, rng);

    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.attempt_index() + 1,
            session.max_attempts()
        );
        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.restart(rng);
                println!("\n🔄 New game started!\n");
                continue;
            }
            "" => continue,
            _ => {}
        }

        match session.submit_guess(&input) {
            Ok(_) => print_board(&session),
            Err(err) if err.is_recoverable() => {
                println!("❌ {err}\n");
                continue;
            }
            Err(err) => return Err(err.to_string()),
        }

        if let Some(outcome) = session.outcome() {
            print_outcome(&outcome, &session);

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.restart(rng);
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
