//! # Snowman Player
//!
//! A letter-guessing agent for masked-word games, where the game shows a
//! pattern such as `"**x**"` and counts wrong guesses.
//!
//! The corpus is indexed once per session ([`CorpusIndex`]). For each hidden
//! word an [`EntropySelector`] narrows the candidate words to those consistent
//! with the pattern and picks the untried letter with the highest expected
//! information gain, weighted by the risk that the letter misses.

pub mod alphabet;
pub mod config;
pub mod corpus;
pub mod entropy;
pub mod error;
pub mod pattern;
pub mod selector;
pub mod simulate;

use std::fs;
use std::io;
use std::path::Path;

pub use alphabet::{Alphabet, LetterSet};
pub use config::GameConfig;
pub use corpus::{CorpusIndex, IndexedWord};
pub use error::{ConfigError, PlayerError};
pub use pattern::{PatternMatcher, RevealedPattern};
pub use selector::{EntropySelector, LetterAnalysis, SelectorState};

/// Splits a word list into trimmed, lowercased, non-empty lines.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Load the dictionary from the embedded file
pub fn load_dictionary() -> Vec<String> {
    parse_word_list(include_str!("../dictionary/dictionary.txt"))
}

/// Read a word list from a file (one word per line).
pub fn load_word_list(path: &Path) -> Result<Vec<String>, io::Error> {
    Ok(parse_word_list(&fs::read_to_string(path)?))
}
