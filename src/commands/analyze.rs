//! Interactive analysis mode
//!
//! Reads one turn of feedback per line, narrows the candidate pool and says
//! what is left and what to guess next.

use crate::core::{Guess, Word};
use crate::error::SolverError;
use crate::output::formatters::{colored_guess, ranking_line, word_list};
use crate::progress::ProgressObserver;
use crate::solver::{GameState, GameStatus};
use colored::Colorize;
use log::warn;
use std::io::{BufRead, Write};

/// Pools at least this large are only counted, not listed
pub const DEFAULT_THRESHOLD: usize = 500;

/// How much the analysis loop prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub threshold: usize,
    /// Print only pool sizes, never words
    pub count_only: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            count_only: false,
        }
    }
}

/// What an analysis session ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeSummary {
    /// The answer, if the session reached one and was allowed to show it
    pub answer: Option<Word>,
    pub turns: usize,
    pub guesses: Vec<Guess>,
}

/// Run the interactive analysis loop until solved, `quit`, a blank line or EOF
///
/// Malformed lines are reported and skipped; nothing is folded for them.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if a search cannot run.
pub fn run_analyze<R: BufRead, W: Write>(
    game: &mut GameState<'_>,
    options: AnalyzeOptions,
    input: R,
    out: &mut W,
    progress: &dyn ProgressObserver,
) -> Result<AnalyzeSummary, SolverError> {
    writeln!(out, "{}", "Wordle analysis".bright_cyan().bold())?;
    writeln!(out, "Enter each guess as letter-digit pairs, e.g. c0r1a2n0e0.")?;
    writeln!(out, "1 means right letter, wrong place; 2 means right letter, right place.")?;
    writeln!(out, "Shorthands: 'crane!' solved, 'crane,slate' scores crane against slate,")?;
    writeln!(out, "'crane?' checks the word list.")?;
    writeln!(out, "Commands: 'new' to start over, 'quit' to exit.\n")?;
    game.reset();

    for line in input.lines() {
        let line = line?;
        let entry = line.trim();

        match entry.to_ascii_lowercase().as_str() {
            "" | "quit" | "q" | "exit" => break,
            "new" | "n" => {
                game.reset();
                writeln!(out, "New game started.")?;
                continue;
            }
            _ => {}
        }

        if let Some(stem) = entry.strip_suffix('?') {
            let known = Word::new(stem.trim()).is_ok_and(|w| game.is_known_word(&w));
            writeln!(out, "{}", if known { "yes".green() } else { "no".red() })?;
            continue;
        }

        let status = match game.process_feedback(entry) {
            Ok(status) => status,
            Err(err) => {
                warn!("rejected input {entry:?}: {err}");
                writeln!(out, "{}", err.to_string().red())?;
                continue;
            }
        };

        if let Some(last) = game.history().last() {
            writeln!(out, "{}", colored_guess(last))?;
        }

        match status {
            GameStatus::Solved(answer) => {
                if options.count_only {
                    writeln!(out, "Single solution remaining")?;
                    return Ok(summary(game, None));
                }
                writeln!(
                    out,
                    "{} {}",
                    "Solved! Answer is:".bright_green().bold(),
                    answer.text().bright_yellow().bold()
                )?;
                return Ok(summary(game, Some(answer)));
            }
            GameStatus::Exhausted { turn } => {
                writeln!(
                    out,
                    "{}",
                    format!("No words left after turn {turn}. Check the feedback or type 'new'.")
                        .red()
                )?;
            }
            GameStatus::Active { remaining } => {
                writeln!(out, "List narrowed down to {remaining} words")?;
                if remaining < options.threshold && !options.count_only {
                    writeln!(out, "{}", word_list(game.pool()))?;
                    let ranking = game.suggest(progress)?;
                    writeln!(out, "{}", ranking_line(&ranking))?;
                }
            }
            GameStatus::Fresh => {}
        }
    }

    Ok(summary(game, None))
}

fn summary(game: &GameState<'_>, answer: Option<Word>) -> AnalyzeSummary {
    AnalyzeSummary {
        answer,
        turns: game.history().len(),
        guesses: game.history().to_vec(),
    }
}
