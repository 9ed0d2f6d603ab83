//! Labeled correction datasets.
//!
//! A dataset is a plain text file with one pair per line: the correct word
//! first, the misspelled form second, separated by whitespace. Blank lines
//! and `#` comments are ignored.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A benchmark pair: the intended word and an observed misspelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPair {
    /// The correct word.
    pub expected: String,
    /// The misspelled form.
    pub typo: String,
}

impl LabeledPair {
    /// Create a pair, lowercasing both forms.
    pub fn new(expected: &str, typo: &str) -> Self {
        LabeledPair {
            expected: expected.to_lowercase(),
            typo: typo.to_lowercase(),
        }
    }
}

/// Parse labeled pairs from dataset text.
///
/// Lines with fewer than two fields are skipped with a warning rather than
/// failing the whole load.
pub fn parse_pairs(text: &str) -> Vec<LabeledPair> {
    text.lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }

            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some(expected), Some(typo)) => Some(LabeledPair::new(expected, typo)),
                _ => {
                    log::warn!("skipping malformed dataset line {}: {line:?}", number + 1);
                    None
                }
            }
        })
        .collect()
}

/// Load labeled pairs from a dataset file.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledPair>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_pairs(&text))
}
