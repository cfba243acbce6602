//! Display functions for command results

use super::formatters::{colored_guess, feedback_to_emoji, word_list};
use crate::core::{Guess, Word};
use crate::solver::AutoplayResult;
use colored::Colorize;

/// Print the guess path of an autoplayed game
pub fn print_autoplay_result(result: &AutoplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Autoplay: {}",
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, word) in result.guesses.iter().enumerate() {
        let guess = Guess::scored_against(word.clone(), &result.answer);
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&guess),
            feedback_to_emoji(&guess)
        );
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.turns)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Gave up after {} guesses", result.turns)
                .red()
                .bold()
        );
    }
}

/// Print the start words that solved fastest
pub fn print_best_starts(answer: &Word, results: &[AutoplayResult]) {
    let Some(first) = results.first() else {
        println!(
            "{}",
            format!("No start word solved {answer}").red().bold()
        );
        return;
    };

    println!(
        "\n{} {} in {} guesses:",
        "Best start words for".bright_cyan().bold(),
        answer.text().to_uppercase().bright_yellow().bold(),
        first.turns
    );
    for result in results {
        println!("  • {}", word_list(&result.guesses));
    }
}

/// Print the feedback one guess receives against an answer
pub fn print_scored(guess: &Guess) {
    println!("{}  {}", colored_guess(guess), guess.encode().bright_white());
}

/// Print the answer words containing a letter
pub fn print_words_containing(letter: char, words: &[&Word]) {
    println!(
        "{} words contain {}:",
        words.len().to_string().bright_cyan().bold(),
        letter.to_ascii_uppercase().to_string().bright_yellow()
    );
    println!("{}", word_list(words.iter().copied()));
}
