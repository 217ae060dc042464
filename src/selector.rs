//! Turn-by-turn letter selection for one hidden word at a time.
//!
//! Each call to [`EntropySelector::next_guess`] narrows the candidate list to
//! the words consistent with the revealed pattern, tallies which letters the
//! survivors contain, and picks the untried letter with the highest weighted
//! entropy.

use crate::corpus::{CorpusIndex, IndexedWord};
use crate::entropy::letter_score;
use crate::error::PlayerError;
use crate::pattern::PatternMatcher;

/// Lifecycle of the word currently being guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// A word has started and nothing has been guessed yet.
    Fresh,
    /// At least one guess has been made.
    InProgress,
    /// No word is in progress.
    Done,
}

/// Per-turn tallies, indexed by alphabet position. Cleared at the start of
/// every scored turn.
#[derive(Debug, Clone, Default)]
pub struct TurnStats {
    occurrence: Vec<usize>,
    non_occurrence: Vec<usize>,
    scores: Vec<Option<f64>>,
}

impl TurnStats {
    fn reset(&mut self, letters: usize) {
        self.occurrence.clear();
        self.occurrence.resize(letters, 0);
        self.non_occurrence.clear();
        self.non_occurrence.resize(letters, 0);
        self.scores.clear();
        self.scores.resize(letters, None);
    }

    fn record(&mut self, word: &IndexedWord) {
        for i in 0..self.occurrence.len() {
            if word.letters.contains(i) {
                self.occurrence[i] += 1;
            } else {
                self.non_occurrence[i] += 1;
            }
        }
    }

    /// Number of candidates containing the letter at alphabet index `i`.
    pub fn occurrence(&self, i: usize) -> usize {
        self.occurrence.get(i).copied().unwrap_or(0)
    }

    /// Number of candidates lacking the letter at alphabet index `i`.
    pub fn non_occurrence(&self, i: usize) -> usize {
        self.non_occurrence.get(i).copied().unwrap_or(0)
    }

    /// Score of the letter at alphabet index `i`, if it was scored this turn.
    pub fn score(&self, i: usize) -> Option<f64> {
        self.scores.get(i).copied().flatten()
    }
}

/// Score details for one letter from the most recent turn.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterAnalysis {
    pub letter: char,
    pub score: f64,
    pub occurrences: usize,
    pub non_occurrences: usize,
}

/// Chooses letters for one game. Borrows the shared index; every concurrent
/// game needs its own selector.
#[derive(Debug, Clone)]
pub struct EntropySelector<'a> {
    index: &'a CorpusIndex,
    length: usize,
    state: SelectorState,
    candidates: Vec<&'a IndexedWord>,
    stats: TurnStats,
    turn: usize,
}

impl<'a> EntropySelector<'a> {
    pub fn new(index: &'a CorpusIndex) -> Self {
        Self {
            index,
            length: 0,
            state: SelectorState::Done,
            candidates: Vec::new(),
            stats: TurnStats::default(),
            turn: 0,
        }
    }

    pub fn index(&self) -> &'a CorpusIndex {
        self.index
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn word_length(&self) -> usize {
        self.length
    }

    /// Guesses handed out for the current word.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.candidates.iter().map(|w| w.text.as_str())
    }

    pub fn stats(&self) -> &TurnStats {
        &self.stats
    }

    /// Begins a new word of `length`, seeding the candidates with every
    /// indexed word of that length.
    pub fn start_word(&mut self, length: usize) -> Result<(), PlayerError> {
        self.index.config().check_length(length)?;
        self.length = length;
        self.candidates = self.index.bucket_for(length).iter().collect();
        self.stats.reset(self.index.config().alphabet.len());
        self.state = SelectorState::Fresh;
        self.turn = 0;
        Ok(())
    }

    /// Like [`EntropySelector::start_word`], but skips the opening guess. For
    /// drivers that join a word after some letters were already guessed.
    pub fn resume_word(&mut self, length: usize) -> Result<(), PlayerError> {
        self.start_word(length)?;
        self.state = SelectorState::InProgress;
        Ok(())
    }

    /// Ends the current word. [`EntropySelector::next_guess`] fails until the
    /// next [`EntropySelector::start_word`].
    pub fn finish_word(&mut self) {
        self.state = SelectorState::Done;
        self.candidates.clear();
    }

    /// Picks the next letter to guess given the revealed `pattern` and the
    /// letters guessed so far.
    ///
    /// The first guess of a word is the index's opening guess for its length.
    /// Later guesses filter the candidates and maximise the weighted entropy;
    /// ties go to the letter earliest in the alphabet.
    pub fn next_guess(
        &mut self,
        pattern: &str,
        previous_guesses: &str,
    ) -> Result<char, PlayerError> {
        let index = self.index;
        let config = index.config();
        let matcher = match self.state {
            SelectorState::Done => return Err(PlayerError::NoActiveWord),
            _ => PatternMatcher::compile(pattern, previous_guesses, self.length, config)?,
        };

        let guessed = config.alphabet.known_letters(previous_guesses);
        if self.state == SelectorState::Fresh {
            self.state = SelectorState::InProgress;
            if let Some(letter) = index.opening_guess(self.length) {
                let already = config
                    .alphabet
                    .index_of(letter)
                    .is_some_and(|i| guessed.contains(i));
                if !already {
                    self.turn += 1;
                    if config.verbose {
                        eprintln!(
                            "[selector] turn {}: opening guess '{}' for length {} ({} candidates)",
                            self.turn,
                            letter,
                            self.length,
                            self.candidates.len()
                        );
                    }
                    return Ok(letter);
                }
            }
        }

        self.stats.reset(config.alphabet.len());
        let before = self.candidates.len();
        let stats = &mut self.stats;
        self.candidates.retain(|word| {
            let keep = matcher.matches(word);
            if keep {
                stats.record(word);
            }
            keep
        });

        if self.candidates.is_empty() {
            if config.verbose {
                eprintln!(
                    "[selector] no candidates match {:?} with guesses {:?} ({} before filtering)",
                    pattern, previous_guesses, before
                );
            }
            return Err(PlayerError::ExhaustedCandidates);
        }
        if guessed.is_superset(config.alphabet.full_set()) {
            return Err(PlayerError::AllLettersExhausted);
        }

        let total = self.candidates.len();
        let mut best: Option<(char, f64)> = None;
        for (i, &letter) in config.alphabet.letters().iter().enumerate() {
            let occurrences = self.stats.occurrence[i];
            if guessed.contains(i) || occurrences == 0 {
                continue;
            }
            let words = self.candidates.iter().map(|w| w.text.as_str());
            let score = letter_score(words, letter, occurrences, total)?;
            self.stats.scores[i] = Some(score);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((letter, score));
            }
        }

        let (letter, score) = best.ok_or(PlayerError::AllLettersExhausted)?;
        self.turn += 1;
        if config.verbose {
            eprintln!(
                "[selector] turn {}: {} -> {} candidates, guessing '{}' (score {:.4})",
                self.turn, before, total, letter, score
            );
        }
        Ok(letter)
    }

    /// Letters scored on the most recent turn, best first. Equal scores keep
    /// alphabet order.
    pub fn letter_analysis(&self) -> Vec<LetterAnalysis> {
        let alphabet = &self.index.config().alphabet;
        let mut analyses: Vec<LetterAnalysis> = alphabet
            .letters()
            .iter()
            .enumerate()
            .filter_map(|(i, &letter)| {
                self.stats.score(i).map(|score| LetterAnalysis {
                    letter,
                    score,
                    occurrences: self.stats.occurrence(i),
                    non_occurrences: self.stats.non_occurrence(i),
                })
            })
            .collect();
        analyses.sort_by(|a, b| b.score.total_cmp(&a.score));
        analyses
    }
}
