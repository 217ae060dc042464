//! Offline games against known targets, for evaluating guess quality.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::corpus::CorpusIndex;
use crate::error::PlayerError;
use crate::selector::EntropySelector;

/// Default number of wrong guesses allowed before a game is lost.
pub const DEFAULT_MAX_MISSES: usize = 8;

/// The pattern a game shows for `target` after `guessed`.
pub fn reveal(target: &str, guessed: &str, wildcard: char) -> String {
    target
        .chars()
        .map(|c| if guessed.contains(c) { c } else { wildcard })
        .collect()
}

/// Outcome of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub target: String,
    pub guesses: Vec<char>,
    pub misses: usize,
    pub won: bool,
}

/// Plays one game against `target`, losing once `max_misses` wrong guesses
/// have been made.
pub fn play_word(
    index: &CorpusIndex,
    target: &str,
    max_misses: usize,
) -> Result<GameRecord, PlayerError> {
    let wildcard = index.config().wildcard;
    let mut selector = EntropySelector::new(index);
    selector.start_word(target.chars().count())?;

    let mut guessed = String::new();
    let mut pattern = reveal(target, &guessed, wildcard);
    let mut guesses = Vec::new();
    let mut misses = 0;

    let won = loop {
        if !pattern.contains(wildcard) {
            break true;
        }
        if misses >= max_misses {
            break false;
        }

        let letter = selector.next_guess(&pattern, &guessed)?;
        guessed.push(letter);
        guesses.push(letter);
        if target.contains(letter) {
            pattern = reveal(target, &guessed, wildcard);
        } else {
            misses += 1;
        }
    };
    selector.finish_word();

    Ok(GameRecord {
        target: target.to_string(),
        guesses,
        misses,
        won,
    })
}

/// Aggregate results of [`benchmark`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkReport {
    pub games: usize,
    pub wins: usize,
    pub total_guesses: usize,
    pub total_misses: usize,
    /// Targets the selector could not play, e.g. words missing from the index.
    pub errors: usize,
    /// `(misses, games)` pairs for every miss count that occurred, ascending.
    pub miss_distribution: Vec<(usize, usize)>,
}

impl BenchmarkReport {
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64
    }

    pub fn average_misses(&self) -> f64 {
        let played = self.games - self.errors;
        if played == 0 {
            return 0.0;
        }
        self.total_misses as f64 / played as f64
    }
}

/// Plays every target in parallel. Each game owns its selector; the index is
/// shared read-only.
pub fn benchmark<S>(index: &CorpusIndex, targets: &[S], max_misses: usize) -> BenchmarkReport
where
    S: AsRef<str> + Sync,
{
    let results: Vec<Result<GameRecord, PlayerError>> = targets
        .par_iter()
        .map(|target| play_word(index, target.as_ref(), max_misses))
        .collect();

    let mut report = BenchmarkReport {
        games: results.len(),
        ..Default::default()
    };
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for result in &results {
        match result {
            Ok(record) => {
                if record.won {
                    report.wins += 1;
                }
                report.total_guesses += record.guesses.len();
                report.total_misses += record.misses;
                *distribution.entry(record.misses).or_insert(0) += 1;
            }
            Err(_) => report.errors += 1,
        }
    }

    report.miss_distribution = distribution.into_iter().collect();
    report
}
