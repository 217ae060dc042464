//! Session configuration.

use crate::alphabet::{Alphabet, MAX_LETTERS};
use crate::error::ConfigError;

/// Marker for unrevealed positions in a pattern.
pub const DEFAULT_WILDCARD: char = '*';

pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Longest supported word; positional masks are `u64`.
pub const MAX_WORD_LENGTH: usize = 64;

/// Everything fixed for the lifetime of a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub alphabet: Alphabet,
    pub min_length: usize,
    pub max_length: usize,
    pub wildcard: char,
    /// Print per-turn diagnostics to stderr.
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::lowercase(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            wildcard: DEFAULT_WILDCARD,
            verbose: false,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_length_range(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    pub fn with_wildcard(mut self, wildcard: char) -> Self {
        self.wildcard = wildcard;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.alphabet.len() > MAX_LETTERS {
            return Err(ConfigError::AlphabetTooLarge(self.alphabet.len()));
        }
        if self.alphabet.contains(self.wildcard) {
            return Err(ConfigError::WildcardInAlphabet(self.wildcard));
        }
        if self.min_length == 0
            || self.min_length > self.max_length
            || self.max_length > MAX_WORD_LENGTH
        {
            return Err(ConfigError::InvalidLengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    pub fn check_length(&self, length: usize) -> Result<(), ConfigError> {
        if (self.min_length..=self.max_length).contains(&length) {
            Ok(())
        } else {
            Err(ConfigError::LengthOutOfRange {
                length,
                min: self.min_length,
                max: self.max_length,
            })
        }
    }
}
