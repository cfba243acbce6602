//! Formatting utilities for terminal output

use crate::core::{Guess, LetterFeedback, Word};
use crate::solver::Ranking;
use colored::Colorize;

/// Format a guess's feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(guess: &Guess) -> String {
    guess
        .scored()
        .iter()
        .map(|s| match s.feedback {
            LetterFeedback::Grey => '⬜',
            LetterFeedback::Yellow => '🟨',
            LetterFeedback::Green => '🟩',
        })
        .collect()
}

/// Uppercase letters on their feedback colour
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .scored()
        .iter()
        .map(|s| {
            let tile = format!(" {} ", char::from(s.letter.to_ascii_uppercase()));
            match s.feedback {
                LetterFeedback::Grey => tile.white().on_bright_black(),
                LetterFeedback::Yellow => tile.black().on_yellow(),
                LetterFeedback::Green => tile.black().on_green(),
            }
            .to_string()
        })
        .collect()
}

/// Comma-separated word list
#[must_use]
pub fn word_list<'w>(words: impl IntoIterator<Item = &'w Word>) -> String {
    words
        .into_iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line summary of a ranking, with the best score when one was computed
#[must_use]
pub fn ranking_line(ranking: &Ranking) -> String {
    let words = ranking.words();
    if words.is_empty() {
        return "No guess to suggest".red().to_string();
    }

    let list = word_list(words).green();
    match words.first().and_then(|w| ranking.score_of(w)) {
        Some(score) => format!("Best word(s) to try next: {list} (score {score:.2})"),
        None => format!("Best word(s) to try next: {list}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn scored(guess: &str, answer: &str) -> Guess {
        Guess::scored_against(Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn emoji_all_grey() {
        assert_eq!(feedback_to_emoji(&scored("fuzzy", "crane")), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_green() {
        assert_eq!(feedback_to_emoji(&scored("crane", "crane")), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        assert_eq!(feedback_to_emoji(&scored("speed", "pleas")), "🟨🟨🟩⬜⬜");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        assert_eq!(colored_guess(&scored("crane", "slate")), " C  R  A  N  E ");
    }

    #[test]
    fn ranking_line_shows_score() {
        colored::control::set_override(false);
        let words = words_from_slice(&["crane", "slate"]);
        let scores = words.iter().cloned().zip([1.0, 1.0]).collect();

        let scored = Ranking::Scored {
            best: words.clone(),
            scores,
        };
        assert_eq!(
            ranking_line(&scored),
            "Best word(s) to try next: crane, slate (score 1.00)"
        );
        assert_eq!(
            ranking_line(&Ranking::Trivial(words)),
            "Best word(s) to try next: crane, slate"
        );
        assert_eq!(ranking_line(&Ranking::Empty), "No guess to suggest");
    }

    #[test]
    fn word_list_joins() {
        let words = words_from_slice(&["plate", "slate"]);
        assert_eq!(word_list(&words), "plate, slate");
        assert_eq!(word_list(&[]), "");
    }
}
