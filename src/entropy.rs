//! Entropy scoring for a single letter.
//!
//! Guessing a letter splits the candidates by where the letter occurs. The
//! Shannon entropy of that split is the information the guess yields; it is
//! then weighted by how likely the letter is to appear and divided by how
//! likely it is to miss.

use std::collections::BTreeMap;

use crate::config::MAX_WORD_LENGTH;
use crate::error::ConfigError;

/// Bitmask of the positions of `letter` in `word` (bit `i` for position `i`).
/// `None` for words longer than 64 characters.
pub fn positional_mask(word: &str, letter: char) -> Option<u64> {
    let mut mask = 0u64;
    for (i, c) in word.chars().enumerate() {
        let bit = u32::try_from(i).ok().and_then(|i| 1u64.checked_shl(i))?;
        if c == letter {
            mask |= bit;
        }
    }
    Some(mask)
}

/// Number of candidates for each non-empty positional mask of `letter`.
/// Words without the letter are not counted.
pub fn partition_by_positions<'w, I>(
    words: I,
    letter: char,
) -> Result<BTreeMap<u64, usize>, ConfigError>
where
    I: IntoIterator<Item = &'w str>,
{
    let mut groups = BTreeMap::new();
    for word in words {
        let mask =
            positional_mask(word, letter).ok_or_else(|| ConfigError::LengthOutOfRange {
                length: word.chars().count(),
                min: 1,
                max: MAX_WORD_LENGTH,
            })?;
        if mask != 0 {
            *groups.entry(mask).or_insert(0) += 1;
        }
    }
    Ok(groups)
}

/// `-Σ p·log2(p)` over the groups, with `p = size / total`.
///
/// Terms are summed smallest group first, so partitions with the same group
/// sizes always produce bit-identical results.
pub fn partition_entropy(groups: &BTreeMap<u64, usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let mut counts: Vec<usize> = groups.values().copied().filter(|&c| c > 0).collect();
    counts.sort_unstable();

    let n = total as f64;
    let mut sum = 0.0;
    for count in counts {
        let p = count as f64 / n;
        sum += p * p.log2();
    }
    -sum
}

/// Weights the raw gain of a letter found in `occurrences` of `total`
/// candidates: `gain · (occ/N)² / ((N − occ)/N)`.
///
/// A letter present in every candidate can never miss and scores
/// `f64::INFINITY`. The occurrence ratio is applied twice; guess order
/// depends on it.
pub fn weighted_score(raw_gain: f64, occurrences: usize, total: usize) -> f64 {
    if occurrences >= total {
        return f64::INFINITY;
    }
    let n = total as f64;
    let hit = occurrences as f64 / n;
    let miss = (total - occurrences) as f64 / n;
    raw_gain / miss * hit * hit
}

/// Full score of `letter` over `words`, where `occurrences` is the number of
/// those words containing it.
pub fn letter_score<'w, I>(
    words: I,
    letter: char,
    occurrences: usize,
    total: usize,
) -> Result<f64, ConfigError>
where
    I: IntoIterator<Item = &'w str>,
{
    if occurrences >= total {
        return Ok(f64::INFINITY);
    }
    let groups = partition_by_positions(words, letter)?;
    Ok(weighted_score(partition_entropy(&groups, total), occurrences, total))
}
