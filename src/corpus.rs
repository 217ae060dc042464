//! Per-length index over the word list, built once per session.
//!
//! Partitions the corpus into one bucket per length in the configured range
//! and precomputes the opening guess for each length: the letter contained in
//! the most words of that length.

use crate::alphabet::LetterSet;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// A corpus word along with the set of alphabet letters it uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedWord {
    pub text: String,
    pub letters: LetterSet,
}

/// Read-only after [`CorpusIndex::build`]; safe to share between games.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    config: GameConfig,
    /// `buckets[length - min_length]`
    buckets: Vec<Vec<IndexedWord>>,
    opening_guesses: Vec<Option<char>>,
    skipped: usize,
}

impl CorpusIndex {
    /// Builds the index. Words whose length is outside the configured range,
    /// or which use a character outside the alphabet, are left out of every
    /// bucket and counted in [`CorpusIndex::skipped_count`].
    pub fn build<S: AsRef<str>>(words: &[S], config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let span = config.max_length - config.min_length + 1;
        let mut buckets: Vec<Vec<IndexedWord>> = vec![Vec::new(); span];
        let mut skipped = 0;

        for word in words {
            let word = word.as_ref();
            let length = word.chars().count();
            if config.check_length(length).is_err() {
                skipped += 1;
                continue;
            }
            let Some(letters) = config.alphabet.letter_set(word) else {
                skipped += 1;
                continue;
            };
            buckets[length - config.min_length].push(IndexedWord {
                text: word.to_string(),
                letters,
            });
        }

        if config.verbose && skipped > 0 {
            eprintln!(
                "[corpus] skipped {} of {} words outside length {}..={} or alphabet \"{}\"",
                skipped,
                words.len(),
                config.min_length,
                config.max_length,
                config.alphabet
            );
        }

        let opening_guesses = buckets
            .iter()
            .map(|bucket| most_common_letter(&config, bucket))
            .collect();

        Ok(Self {
            config,
            buckets,
            opening_guesses,
            skipped,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All indexed words of exactly `length`. Empty for lengths with no words
    /// or outside the configured range.
    pub fn bucket_for(&self, length: usize) -> &[IndexedWord] {
        self.slot(length)
            .map(|i| self.buckets[i].as_slice())
            .unwrap_or(&[])
    }

    /// The words of exactly `length`, as plain strings.
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> + '_ {
        self.bucket_for(length).iter().map(|w| w.text.as_str())
    }

    /// The precomputed first guess for `length`, or `None` if no word of that
    /// length was indexed.
    pub fn opening_guess(&self, length: usize) -> Option<char> {
        self.slot(length).and_then(|i| self.opening_guesses[i])
    }

    /// Total number of indexed words across all buckets.
    pub fn word_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    /// Lengths that have at least one word.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(i, _)| i + self.config.min_length)
    }

    fn slot(&self, length: usize) -> Option<usize> {
        self.config
            .check_length(length)
            .ok()
            .map(|_| length - self.config.min_length)
    }
}

/// The letter contained in the most words of `bucket`; the earliest letter in
/// alphabet order wins a tie.
fn most_common_letter(config: &GameConfig, bucket: &[IndexedWord]) -> Option<char> {
    let alphabet = &config.alphabet;
    let mut counts = vec![0usize; alphabet.len()];
    for word in bucket {
        for (i, count) in counts.iter_mut().enumerate() {
            if word.letters.contains(i) {
                *count += 1;
            }
        }
    }

    let mut best = None;
    let mut best_count = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > best_count {
            best_count = count;
            best = alphabet.letter(i);
        }
    }
    best
}
