//! Frequency dictionary built from a training corpus.

use std::fs;
use std::path::Path;

use ahash::AHashMap;

use crate::error::Result;

/// A dictionary mapping each known lowercase word to an occurrence count.
///
/// Counts start at [`FrequencyTable::DEFAULT_COUNT`] and are incremented per
/// observed token, so a word seen `n` times stores `n + 1` and a word never
/// seen at all scores `DEFAULT_COUNT` when looked up. That floor keeps every
/// candidate assignable a nonzero weight; membership, by contrast, is strict
/// key presence and is never affected by the fallback.
///
/// The table is built once and read-only afterwards, so it can be shared
/// across threads freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: AHashMap<String, u64>,
}

impl FrequencyTable {
    /// The count reported for words that were never observed.
    pub const DEFAULT_COUNT: u64 = 1;

    /// Create an empty table.
    pub fn new() -> Self {
        FrequencyTable {
            counts: AHashMap::new(),
        }
    }

    /// Build a table from a sequence of already-tokenized words.
    ///
    /// Each token is lowercased before counting.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = AHashMap::new();

        for token in tokens {
            let word = token.as_ref().to_lowercase();
            if word.is_empty() {
                continue;
            }
            *counts.entry(word).or_insert(Self::DEFAULT_COUNT) += 1;
        }

        FrequencyTable { counts }
    }

    /// Build a table from raw corpus text, tokenizing on whitespace.
    pub fn from_corpus(text: &str) -> Self {
        Self::build(text.split_whitespace())
    }

    /// Build a table from a corpus file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_corpus(&text))
    }

    /// Check if a word was observed during construction.
    ///
    /// Lookups are exact; keys are lowercase, so queries are expected
    /// lowercase as well.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Get the count of a word, or [`FrequencyTable::DEFAULT_COUNT`] if it
    /// was never observed.
    pub fn count(&self, word: &str) -> u64 {
        self.counts
            .get(word)
            .copied()
            .unwrap_or(Self::DEFAULT_COUNT)
    }

    /// Number of distinct known words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the table holds no words.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over the known words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}
