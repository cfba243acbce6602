//! Game state
//!
//! A `GameState` owns one game: the live candidate pool, the criteria folded
//! from every turn so far, and the turn counter. It is an ordinary value, so
//! independent games can run side by side against the same vocabulary.

use super::strategy::{Ranking, SearchContext, Strategy, StrategyType};
use crate::config::GameConfig;
use crate::core::{Criteria, Guess, LetterFeedback, WORD_LENGTH, Word};
use crate::error::SolverError;
use crate::input::{Entry, parse_entry};
use crate::progress::ProgressObserver;
use crate::wordlists::Vocabulary;
use log::{debug, info};
use rustc_hash::FxBuildHasher;
use std::cmp::Reverse;
use std::hash::BuildHasher;

/// Where a game stands after the last processed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// No turn has been processed yet
    Fresh,
    /// More than one candidate remains
    Active { remaining: usize },
    /// Exactly one candidate remains, or the last guess was all green
    Solved(Word),
    /// No candidate survived; `turn` is the turn whose feedback emptied the pool
    Exhausted { turn: usize },
}

/// Outcome of an automatic game against a known answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayResult {
    pub answer: Word,
    pub turns: usize,
    /// Every guess played, the solving guess included
    pub guesses: Vec<Word>,
    pub solved: bool,
}

/// One game against a shared vocabulary
#[derive(Debug, Clone)]
pub struct GameState<'a> {
    vocabulary: &'a Vocabulary,
    strategy: StrategyType,
    config: GameConfig,
    pool: Vec<Word>,
    criteria: Criteria,
    turn: usize,
    answer: Option<Word>,
    history: Vec<Guess>,
}

impl<'a> GameState<'a> {
    /// Start a fresh game over the full answer list
    ///
    /// # Errors
    ///
    /// Returns `SolverError::ThreadPool` if the search workers cannot start.
    pub fn new(vocabulary: &'a Vocabulary, config: GameConfig) -> Result<Self, SolverError> {
        Ok(Self {
            vocabulary,
            strategy: StrategyType::from_config(&config)?,
            config,
            pool: vocabulary.answers().to_vec(),
            criteria: Criteria::new(),
            turn: 1,
            answer: None,
            history: Vec::new(),
        })
    }

    /// Forget every turn and the known answer
    pub fn reset(&mut self) {
        self.pool = self.vocabulary.answers().to_vec();
        self.criteria = Criteria::new();
        self.turn = 1;
        self.answer = None;
        self.history.clear();
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        let Some(last) = self.history.last() else {
            return GameStatus::Fresh;
        };

        if last.is_solved() {
            return GameStatus::Solved(last.word().clone());
        }

        match self.pool.as_slice() {
            [] => GameStatus::Exhausted {
                turn: self.history.len(),
            },
            [only] => GameStatus::Solved(only.clone()),
            pool => GameStatus::Active {
                remaining: pool.len(),
            },
        }
    }

    /// Words still consistent with every turn
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub const fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// The turn about to be played, starting at 1
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[must_use]
    pub const fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Remember the answer so bare words can be scored automatically
    pub fn set_answer(&mut self, answer: Word) {
        self.answer = Some(answer);
    }

    /// Fold one scored guess into the game
    ///
    /// Grey reported at a position already fixed to that same letter is read
    /// as Green.
    pub fn process_guess(&mut self, guess: &Guess) -> GameStatus {
        let guess = self.correct_fixed_greys(guess);

        self.criteria = self.criteria.update(guess.scored());
        self.pool = self.criteria.filter(&self.pool);
        self.history.push(guess);
        self.turn += 1;

        debug!(
            "turn {}: {} candidates left, criteria {}",
            self.history.len(),
            self.pool.len(),
            self.criteria
        );
        self.status()
    }

    /// Parse one line of feedback text and fold it
    ///
    /// A bare word is scored against the known answer when there is one, and
    /// is otherwise taken as all grey.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidFeedback` or `SolverError::InvalidWord`
    /// if the line cannot be parsed. Nothing is folded in that case.
    pub fn process_feedback(&mut self, input: &str) -> Result<GameStatus, SolverError> {
        let guess = match parse_entry(input)? {
            Entry::Feedback(guess) => guess,
            Entry::AutoScore { guess, answer } => {
                let scored = Guess::scored_against(guess, &answer);
                self.set_answer(answer);
                scored
            }
            Entry::Word(word) => match &self.answer {
                Some(answer) => Guess::scored_against(word, answer),
                None => Guess::new(word, [LetterFeedback::Grey; WORD_LENGTH]),
            },
        };
        Ok(self.process_guess(&guess))
    }

    /// Rank guesses for the current turn with the configured strategy
    ///
    /// # Errors
    ///
    /// Returns an error if the search was cancelled or could not start.
    pub fn suggest(&self, progress: &dyn ProgressObserver) -> Result<Ranking, SolverError> {
        let context = SearchContext {
            pool: &self.pool,
            criteria: &self.criteria,
            answers: self.vocabulary.answers(),
            start_words: self.vocabulary.start_words(),
        };
        self.strategy.rank(&context, progress)
    }

    /// Play a whole game from `start` against a known `answer`
    ///
    /// The game is reset first. Among tied suggestions the one whose hash lies
    /// furthest from the answer's hash is played, so results are reproducible
    /// and never favour the answer. Gives up after `max_turns` guesses or when
    /// the pool empties.
    ///
    /// # Errors
    ///
    /// Returns an error if a search was cancelled or could not start.
    pub fn autoplay(
        &mut self,
        start: Word,
        answer: Word,
        progress: &dyn ProgressObserver,
    ) -> Result<AutoplayResult, SolverError> {
        self.reset();
        self.set_answer(answer.clone());

        let mut guesses = Vec::new();
        let mut next = start;

        while self.pool.len() > 1 && next != answer && guesses.len() < self.config.max_turns {
            guesses.push(next.clone());
            let status = self.process_guess(&Guess::scored_against(next.clone(), &answer));
            if matches!(status, GameStatus::Exhausted { .. }) {
                break;
            }

            let ranking = self.suggest(progress)?;
            match pessimistic_pick(ranking.words(), &answer) {
                Some(word) => next = word.clone(),
                None => break,
            }
        }

        let solved = guesses.len() < self.config.max_turns
            && (next == answer || matches!(self.pool.as_slice(), [only] if *only == answer));
        if solved {
            guesses.push(answer.clone());
            self.process_guess(&Guess::solved(answer.clone()));
        }

        info!(
            "autoplay {answer}: {} after {} guesses ({})",
            if solved { "solved" } else { "gave up" },
            guesses.len(),
            guesses
                .iter()
                .map(Word::text)
                .collect::<Vec<_>>()
                .join(" → ")
        );

        Ok(AutoplayResult {
            answer,
            turns: guesses.len(),
            guesses,
            solved,
        })
    }

    /// Autoplay from every start word and keep the quickest solves
    ///
    /// Returns an empty list if no start word solves within `max_turns`. The
    /// game is left reset.
    ///
    /// # Errors
    ///
    /// Returns an error if a search was cancelled or could not start.
    pub fn best_start_words(
        &mut self,
        answer: &Word,
        start_words: &[Word],
        progress: &dyn ProgressObserver,
    ) -> Result<Vec<AutoplayResult>, SolverError> {
        let mut best: Vec<AutoplayResult> = Vec::new();

        for start in start_words {
            let result = self.autoplay(start.clone(), answer.clone(), progress)?;
            if !result.solved {
                continue;
            }
            match best.first().map(|b| b.turns) {
                Some(turns) if result.turns > turns => {}
                Some(turns) if result.turns == turns => best.push(result),
                _ => best = vec![result],
            }
        }

        self.reset();
        Ok(best)
    }

    /// True if `word` is in the answer list
    #[must_use]
    pub fn is_known_word(&self, word: &Word) -> bool {
        self.vocabulary.contains(word)
    }

    /// Answer words containing `letter`
    #[must_use]
    pub fn words_containing(&self, letter: u8) -> Vec<&'a Word> {
        self.vocabulary.words_containing(letter)
    }

    fn correct_fixed_greys(&self, guess: &Guess) -> Guess {
        let mut marks = [LetterFeedback::Grey; WORD_LENGTH];
        let mut corrected = false;

        for (mark, scored) in marks.iter_mut().zip(guess.scored()) {
            *mark = scored.feedback;
            if scored.feedback == LetterFeedback::Grey
                && self.criteria.fixed_letter(scored.position) == Some(scored.letter)
            {
                *mark = LetterFeedback::Green;
                corrected = true;
            }
        }

        if corrected {
            debug!("{} repeats a known green as grey, reading it as green", guess.word());
            Guess::new(guess.word().clone(), marks)
        } else {
            guess.clone()
        }
    }
}

fn fx_hash(word: &Word) -> u64 {
    FxBuildHasher.hash_one(word.text())
}

/// Among tied suggestions, the one whose hash is furthest from the answer's
fn pessimistic_pick<'w>(candidates: &'w [Word], answer: &Word) -> Option<&'w Word> {
    let target = fx_hash(answer);
    candidates
        .iter()
        .max_by_key(|word| (fx_hash(word).abs_diff(target), Reverse(*word)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategyKind;
    use crate::progress::NoProgress;
    use crate::solver::CancelToken;

    const ANSWERS: &[&str] = &[
        "apple", "apply", "artsy", "crane", "slate", "trace", "crate", "grate", "irate",
        "plate", "stare", "flame", "blame", "shame", "brave", "grave",
    ];
    const STARTS: &[&str] = &["crane", "slate", "audio"];

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_slices(ANSWERS, STARTS)
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn config(kind: StrategyKind) -> GameConfig {
        GameConfig::new(kind).with_parallelism(2)
    }

    #[test]
    fn fresh_game() {
        let vocab = vocabulary();
        let game = GameState::new(&vocab, GameConfig::default()).unwrap();

        assert_eq!(game.status(), GameStatus::Fresh);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.pool().len(), ANSWERS.len());
        assert!(game.criteria().is_empty());
    }

    #[test]
    fn feedback_narrows_pool() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        let status = game.process_feedback("c0r0a2n0e2").unwrap();

        assert_eq!(status, GameStatus::Active { remaining: 5 });
        let pool: Vec<&str> = game.pool().iter().map(Word::text).collect();
        assert_eq!(pool, ["slate", "plate", "flame", "blame", "shame"]);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn grey_at_fixed_position_reads_as_green() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        game.process_feedback("c0r0a2n0e2").unwrap();
        let status = game.process_feedback("s2l2a0t2e2").unwrap();

        assert_eq!(status, GameStatus::Solved(word("slate")));
        let last = game.history().last().unwrap();
        assert_eq!(last.scored()[2].feedback, LetterFeedback::Green);
    }

    #[test]
    fn contradictory_feedback_exhausts() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        game.process_feedback("c0r0a2n0e2").unwrap();
        let status = game.process_feedback("b2l0a2m0e2").unwrap();

        assert_eq!(status, GameStatus::Exhausted { turn: 2 });
        assert!(game.pool().is_empty());
    }

    #[test]
    fn invalid_feedback_folds_nothing() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        assert!(game.process_feedback("c0r3a2n0e2").is_err());
        assert_eq!(game.status(), GameStatus::Fresh);
        assert_eq!(game.pool().len(), ANSWERS.len());
    }

    #[test]
    fn repeated_feedback_is_idempotent() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        game.process_feedback("s0t0a1r0e2").unwrap();
        let once = game.pool().to_vec();
        game.process_feedback("s0t0a1r0e2").unwrap();

        assert_eq!(game.pool(), once.as_slice());
        assert_eq!(game.turn(), 3);
    }

    #[test]
    fn bare_word_uses_known_answer() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        game.process_feedback("crane,slate").unwrap();
        assert_eq!(game.answer(), Some(&word("slate")));

        let status = game.process_feedback("plate").unwrap();
        assert_eq!(status, GameStatus::Solved(word("slate")));
    }

    #[test]
    fn bare_word_without_answer_is_all_grey() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        // Every answer in the list has an A or an E
        let status = game.process_feedback("crane").unwrap();

        assert_eq!(game.history()[0].count(LetterFeedback::Grey), WORD_LENGTH);
        assert_eq!(status, GameStatus::Exhausted { turn: 1 });
    }

    #[test]
    fn reset_restores_fresh_state() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        game.process_feedback("crane,slate").unwrap();
        game.reset();

        assert_eq!(game.status(), GameStatus::Fresh);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.answer(), None);
        assert_eq!(game.pool().len(), ANSWERS.len());
    }

    #[test]
    fn suggest_ranks_live_pool() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        game.process_feedback("c0r0a2n0e2").unwrap();
        game.process_feedback("f0l2a2m0e2").unwrap();
        let ranking = game.suggest(&NoProgress).unwrap();

        assert_eq!(ranking, Ranking::Trivial(vec![word("plate"), word("slate")]));
    }

    #[test]
    fn cancelled_config_fails_suggest() {
        let vocab = vocabulary();
        let cancel = CancelToken::new();
        let cancellable = config(StrategyKind::Reduction).with_cancel(cancel.clone());
        let mut game = GameState::new(&vocab, cancellable).unwrap();

        assert!(game.suggest(&NoProgress).is_ok());

        cancel.cancel();
        assert!(matches!(game.suggest(&NoProgress), Err(SolverError::Cancelled)));
        assert!(matches!(
            game.autoplay(word("audio"), word("grave"), &NoProgress),
            Err(SolverError::Cancelled)
        ));
    }

    #[test]
    fn autoplay_solves() {
        let vocab = vocabulary();

        for kind in [StrategyKind::Reduction, StrategyKind::LetterFrequency] {
            let mut game = GameState::new(&vocab, config(kind)).unwrap();
            let result = game
                .autoplay(word("crane"), word("slate"), &NoProgress)
                .unwrap();

            assert!(result.solved);
            assert_eq!(result.guesses.first(), Some(&word("crane")));
            assert_eq!(result.guesses.last(), Some(&word("slate")));
            assert_eq!(result.turns, result.guesses.len());
            assert!((2..=4).contains(&result.turns));
            assert_eq!(game.status(), GameStatus::Solved(word("slate")));
        }
    }

    #[test]
    fn autoplay_starting_on_answer_takes_one_turn() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        let result = game
            .autoplay(word("slate"), word("slate"), &NoProgress)
            .unwrap();

        assert!(result.solved);
        assert_eq!(result.guesses, vec![word("slate")]);
    }

    #[test]
    fn autoplay_is_deterministic() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        let first = game
            .autoplay(word("audio"), word("grave"), &NoProgress)
            .unwrap();
        let second = game
            .autoplay(word("audio"), word("grave"), &NoProgress)
            .unwrap();

        assert_eq!(first, second);
        assert!(first.solved);
    }

    #[test]
    fn autoplay_respects_turn_limit() {
        let vocab = vocabulary();
        let mut limited = config(StrategyKind::Reduction);
        limited.max_turns = 1;
        let mut game = GameState::new(&vocab, limited).unwrap();

        let result = game
            .autoplay(word("audio"), word("grave"), &NoProgress)
            .unwrap();

        assert!(!result.solved);
        assert_eq!(result.guesses, vec![word("audio")]);
    }

    #[test]
    fn autoplay_answer_outside_vocabulary() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();

        let result = game
            .autoplay(word("crane"), word("fuzzy"), &NoProgress)
            .unwrap();

        assert!(!result.solved);
        assert!(game.pool().is_empty());
    }

    #[test]
    fn best_start_words_keeps_fastest() {
        let vocab = vocabulary();
        let mut game = GameState::new(&vocab, config(StrategyKind::Reduction)).unwrap();
        let starts = [word("crane"), word("slate"), word("audio")];

        let best = game
            .best_start_words(&word("slate"), &starts, &NoProgress)
            .unwrap();

        assert_eq!(best.len(), 1);
        assert_eq!(best[0].guesses, vec![word("slate")]);
        assert_eq!(game.status(), GameStatus::Fresh);
    }

    #[test]
    fn vocabulary_queries() {
        let vocab = vocabulary();
        let game = GameState::new(&vocab, GameConfig::default()).unwrap();

        assert!(game.is_known_word(&word("crane")));
        assert!(!game.is_known_word(&word("fuzzy")));

        let with_y: Vec<&str> = game.words_containing(b'y').iter().map(|w| w.text()).collect();
        assert_eq!(with_y, ["apply", "artsy"]);
    }

    #[test]
    fn pessimistic_pick_is_stable() {
        let candidates = [word("plate"), word("slate")];
        let answer = word("slate");

        let first = pessimistic_pick(&candidates, &answer);
        let reversed = [word("slate"), word("plate")];
        assert_eq!(first, pessimistic_pick(&reversed, &answer));
        assert_eq!(pessimistic_pick(&[], &answer), None);
    }
}
