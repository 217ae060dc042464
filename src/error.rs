//! Error types for index construction and letter selection.

use thiserror::Error;

/// Problems with the session configuration or a requested word length.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the alphabet is empty")]
    EmptyAlphabet,
    #[error("the alphabet lists '{0}' more than once")]
    DuplicateLetter(char),
    #[error("the alphabet has {0} letters, at most 64 are supported")]
    AlphabetTooLarge(usize),
    #[error("the wildcard marker '{0}' is also a letter of the alphabet")]
    WildcardInAlphabet(char),
    #[error("invalid word length range {min}..={max}")]
    InvalidLengthRange { min: usize, max: usize },
    #[error("word length {length} is outside the configured range {min}..={max}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },
}

/// Failures reported by the entropy selector.
///
/// All of these describe something inconsistent in what the caller supplied;
/// none of them leave the selector in an unusable state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("no word is in progress")]
    NoActiveWord,
    #[error("no viable candidates remain for this pattern")]
    ExhaustedCandidates,
    #[error("every letter that could still appear has already been guessed")]
    AllLettersExhausted,
}

impl PlayerError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        PlayerError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
