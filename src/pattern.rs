//! Revealed patterns and the candidate predicate compiled from them.
//!
//! A pattern such as `"c*t"` has one slot per letter of the hidden word:
//! either a revealed letter or the wildcard marker. Together with the letters
//! guessed so far it determines which words are still possible.

use crate::alphabet::{Alphabet, LetterSet};
use crate::config::GameConfig;
use crate::corpus::IndexedWord;
use crate::error::PlayerError;

/// A parsed pattern: `Some(letter)` for revealed slots, `None` for wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedPattern {
    slots: Vec<Option<char>>,
}

impl RevealedPattern {
    pub fn parse(pattern: &str, config: &GameConfig) -> Result<Self, PlayerError> {
        let slots = pattern
            .chars()
            .map(|c| {
                if c == config.wildcard {
                    Ok(None)
                } else if config.alphabet.contains(c) {
                    Ok(Some(c))
                } else {
                    Err(PlayerError::invalid_pattern(
                        pattern,
                        format!("'{}' is neither a letter nor the wildcard", c),
                    ))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { slots })
    }

    /// A pattern with nothing revealed.
    pub fn hidden(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    pub fn is_fully_hidden(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_solved(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn revealed(&self, alphabet: &Alphabet) -> LetterSet {
        let mut set = LetterSet::EMPTY;
        for i in self.slots.iter().flatten().filter_map(|&c| alphabet.index_of(c)) {
            set.insert(i);
        }
        set
    }

    pub fn render(&self, wildcard: char) -> String {
        self.slots.iter().map(|s| s.unwrap_or(wildcard)).collect()
    }
}

/// Positional predicate over words of one fixed length.
///
/// A word matches when every revealed slot holds that letter and no wildcard
/// slot holds a letter that has already been guessed. A guessed letter that
/// was a hit is revealed at all its positions, so it cannot hide behind a
/// wildcard either.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    slots: Vec<Option<char>>,
    guessed: Vec<char>,
    /// Guessed letters the pattern does not show; no match may contain them.
    misses: LetterSet,
    unconstrained: bool,
}

impl PatternMatcher {
    /// Compiles `pattern` and `previous_guesses` for words of `length`.
    /// Characters of `previous_guesses` outside the alphabet are ignored.
    pub fn compile(
        pattern: &str,
        previous_guesses: &str,
        length: usize,
        config: &GameConfig,
    ) -> Result<Self, PlayerError> {
        let revealed = RevealedPattern::parse(pattern, config)?;
        if revealed.len() != length {
            return Err(PlayerError::invalid_pattern(
                pattern,
                format!("expected {} slots, found {}", length, revealed.len()),
            ));
        }
        Ok(Self::from_parts(revealed, previous_guesses, &config.alphabet))
    }

    pub fn from_parts(
        revealed: RevealedPattern,
        previous_guesses: &str,
        alphabet: &Alphabet,
    ) -> Self {
        let guessed_set = alphabet.known_letters(previous_guesses);
        let hits = revealed.revealed(alphabet);
        let misses = LetterSet(guessed_set.0 & !hits.0);

        let mut guessed: Vec<char> = Vec::with_capacity(guessed_set.len());
        for (i, &c) in alphabet.letters().iter().enumerate() {
            if guessed_set.contains(i) {
                guessed.push(c);
            }
        }

        let unconstrained = guessed.is_empty() && revealed.is_fully_hidden();
        Self {
            slots: revealed.slots,
            guessed,
            misses,
            unconstrained,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when nothing has been guessed or revealed yet.
    pub fn is_unconstrained(&self) -> bool {
        self.unconstrained
    }

    /// Guessed letters absent from the pattern.
    pub fn misses(&self) -> LetterSet {
        self.misses
    }

    pub fn matches(&self, word: &IndexedWord) -> bool {
        if word.letters.intersects(self.misses) {
            return false;
        }
        self.matches_str(&word.text)
    }

    pub fn matches_str(&self, word: &str) -> bool {
        let mut chars = word.chars();
        if self.unconstrained {
            return chars.count() == self.slots.len();
        }
        for slot in &self.slots {
            let Some(c) = chars.next() else {
                return false;
            };
            match slot {
                Some(known) if c != *known => return false,
                None if self.guessed.contains(&c) => return false,
                _ => {}
            }
        }
        chars.next().is_none()
    }
}
