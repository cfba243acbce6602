//! Wordle Reducer - CLI
//!
//! Interactive analysis, autoplay and one-shot lookups over a word list.
//! Set `RUST_LOG=debug` to trace each turn.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_reducer::{
    commands::{
        AnalyzeOptions, DEFAULT_THRESHOLD, autoplay_word, best_start, run_analyze, score_words,
        words_with_letter,
    },
    config::{GameConfig, StrategyKind},
    core::Word,
    output::{print_autoplay_result, print_best_starts, print_scored, print_words_containing},
    progress::BarProgress,
    solver::GameState,
    wordlists::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_reducer",
    about = "Wordle solver that minimises the expected number of remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: reduction (default) or letter-frequency
    #[arg(short, long, global = true, default_value_t = StrategyKind::Reduction)]
    strategy: StrategyKind,

    /// Worker threads for the reduction search (default: all cores)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// Answer list, one word per line
    #[arg(long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Start-word list, one word per line
    #[arg(long, global = true, default_value = "data/start_words.txt")]
    start_words: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive analysis (default)
    Analyze {
        /// List the pool only when fewer words than this remain
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,

        /// Print only how many words remain
        #[arg(short, long)]
        count_only: bool,
    },

    /// Play a whole game against a known answer
    Autoplay {
        /// First guess
        start: String,
        /// The hidden word
        answer: String,
    },

    /// Show the feedback a guess gets against an answer
    Score { guess: String, answer: String },

    /// Find the start words that solve an answer fastest
    BestStart {
        answer: String,
        /// Start words to try (default: the start-word list)
        words: Vec<String>,
    },

    /// List answer words containing a letter
    Containing { letter: char },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Analyze {
        threshold: DEFAULT_THRESHOLD,
        count_only: false,
    });

    // Scoring needs no word list
    if let Commands::Score { guess, answer } = &command {
        print_scored(&score_words(guess, answer)?);
        return Ok(());
    }

    let vocabulary = Vocabulary::load(&cli.answers, &cli.start_words).with_context(|| {
        format!(
            "loading word lists {} and {}",
            cli.answers.display(),
            cli.start_words.display()
        )
    })?;

    let mut config = GameConfig::new(cli.strategy);
    config.parallelism = cli.threads;
    let mut game = GameState::new(&vocabulary, config).context("starting the solver")?;
    let progress = BarProgress::new();

    match command {
        Commands::Analyze {
            threshold,
            count_only,
        } => {
            let options = AnalyzeOptions {
                threshold,
                count_only,
            };
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            let summary = run_analyze(&mut game, options, stdin, &mut stdout, &progress)?;
            let answer = summary
                .answer
                .as_ref()
                .map_or_else(|| "[unknown]".to_string(), ToString::to_string);
            println!("{answer} after {} turns", summary.turns);
        }
        Commands::Autoplay { start, answer } => {
            let result = autoplay_word(&mut game, &start, &answer, &progress)
                .context("autoplay failed")?;
            print_autoplay_result(&result);
        }
        Commands::BestStart { answer, words } => {
            let results = best_start(&mut game, &answer, &words, &progress)?;
            print_best_starts(&Word::new(answer)?, &results);
        }
        Commands::Containing { letter } => {
            let words = words_with_letter(&vocabulary, letter)?;
            print_words_containing(letter, &words);
        }
        Commands::Score { .. } => {}
    }

    Ok(())
}
