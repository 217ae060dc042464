//! The ordered set of letters a session is played with.
//!
//! Iteration order matters: every tie between letters is broken in favour of
//! the letter that comes first in the alphabet.

use crate::error::ConfigError;

/// Maximum number of letters, so a set of letters fits in a `u64`.
pub const MAX_LETTERS: usize = 64;

/// An ordered, duplicate-free list of allowed characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    pub fn new(letters: &str) -> Result<Self, ConfigError> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if letters.len() > MAX_LETTERS {
            return Err(ConfigError::AlphabetTooLarge(letters.len()));
        }
        for (i, &c) in letters.iter().enumerate() {
            if letters[..i].contains(&c) {
                return Err(ConfigError::DuplicateLetter(c));
            }
        }
        Ok(Self { letters })
    }

    /// Lowercase `a` through `z`.
    pub fn lowercase() -> Self {
        Self {
            letters: ('a'..='z').collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.letters.iter().position(|&l| l == c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// The set of alphabet letters used by `word`, or `None` if the word
    /// contains a character outside the alphabet.
    pub fn letter_set(&self, word: &str) -> Option<LetterSet> {
        let mut set = LetterSet::EMPTY;
        for c in word.chars() {
            set.insert(self.index_of(c)?);
        }
        Some(set)
    }

    /// Like [`Alphabet::letter_set`], but characters outside the alphabet are
    /// ignored.
    pub fn known_letters(&self, s: &str) -> LetterSet {
        let mut set = LetterSet::EMPTY;
        for i in s.chars().filter_map(|c| self.index_of(c)) {
            set.insert(i);
        }
        set
    }

    pub fn full_set(&self) -> LetterSet {
        LetterSet::first_n(self.letters.len())
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.letters {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// A set of alphabet indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(pub u64);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    fn first_n(n: usize) -> Self {
        if n >= 64 {
            Self(u64::MAX)
        } else {
            Self((1u64 << n) - 1)
        }
    }

    /// Adds `index`. Returns `false`, leaving the set unchanged, if `index`
    /// is 64 or more.
    pub fn insert(&mut self, index: usize) -> bool {
        match Self::bit(index) {
            Some(bit) => {
                self.0 |= bit;
                true
            }
            None => false,
        }
    }

    pub fn contains(self, index: usize) -> bool {
        Self::bit(index).is_some_and(|bit| self.0 & bit != 0)
    }

    fn bit(index: usize) -> Option<u64> {
        u32::try_from(index).ok().and_then(|i| 1u64.checked_shl(i))
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}
