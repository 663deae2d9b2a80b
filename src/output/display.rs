//! Display functions for games and command results

use super::formatters::{create_progress_bar, guess_row, keyboard_lines, plain_row};
use crate::commands::{CheckResult, SimulationResult};
use crate::engine::{GameOutcome, GameSession};
use colored::Colorize;

/// Print the guesses so far and the keyboard state
pub fn print_board(session: &GameSession) {
    let colorize = colored::control::SHOULD_COLORIZE.should_colorize();

    println!();
    for (guess, feedback) in session.history() {
        let row = if colorize {
            guess_row(guess, feedback)
        } else {
            plain_row(guess, feedback)
        };
        println!("   {row}   {}", feedback.to_emoji());
    }
    println!();
    for line in keyboard_lines(session.keyboard()) {
        println!("   {line}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_outcome(outcome: &GameOutcome, session: &GameSession) {
    println!("{}", "═".repeat(70).bright_cyan());
    if outcome.won {
        println!(
            "{}",
            "    🎉 🎊 ✨  Y O U   G O T   I T !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        );
        let praise = match outcome.attempts {
            1 => "🏆 Hole in one!",
            2 => "⭐ Magnificent!",
            3 => "💫 Splendid!",
            4 => "✨ Great job!",
            5 => "👍 Nice work!",
            _ => "😅 Phew!",
        };
        println!("\n  {}", praise.bright_yellow().bold());
        println!(
            "  Solved in {} {}",
            outcome.attempts.to_string().bright_cyan().bold(),
            if outcome.attempts == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("{}", "    Out of guesses!    ".bright_red().bold());
        println!(
            "\n  The word was {}",
            outcome.answer.text().bright_yellow().bold()
        );
    }

    println!("\n  Guess history:");
    for (i, (word, feedback)) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().bright_white().bold(),
            feedback.to_emoji()
        );
    }
    println!("{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Print the result of checking one guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {} ({} policy)",
        result.guess.text().bright_white().bold(),
        result.answer.text().bright_yellow().bold(),
        result.policy.name()
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "\n   {}   {}\n",
        guess_row(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    println!(
        "   {} correct, {} present",
        result.feedback.count_correct().to_string().green().bold(),
        result.feedback.count_present().to_string().yellow().bold()
    );
    if !result.answer_in_dictionary {
        println!("{}", "Note: the answer is not in the word list".yellow());
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Losses:           {}", result.losses);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_attempts).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (&attempts, &count) in &result.distribution {
        let pct = if result.total_games > 0 {
            count as f64 / result.total_games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {attempts}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    if result.losses > 0 {
        println!("   X: {} {:4}", "lost".red(), result.losses);
    }
}
