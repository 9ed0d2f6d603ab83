//! Frequency-ranked spelling correction.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::spelling::alphabet::Alphabet;
use crate::spelling::dictionary::FrequencyTable;
use crate::spelling::edits::EditGenerator;
use crate::util::levenshtein::damerau_levenshtein_distance;

/// A correction candidate with its dictionary weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Stored dictionary count of the word.
    pub count: u64,
    /// Edit distance from the (lowercased) input.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, count: u64, distance: usize) -> Self {
        Suggestion {
            word,
            count,
            distance,
        }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Higher counts come first; equal counts fall back to word order so
        // that ranking is deterministic for a given dictionary.
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of correcting a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The normalized (lowercased) input word.
    pub input: String,
    /// Best-ranked candidate, or `None` when no known word lies within two
    /// edits. An empty result is a normal outcome, not a fault.
    pub suggestion: Option<Suggestion>,
}

impl Correction {
    /// The corrected word, falling back to the input unmodified when no
    /// correction was found.
    pub fn output(&self) -> &str {
        self.suggestion
            .as_ref()
            .map(|s| s.word.as_str())
            .unwrap_or(&self.input)
    }

    /// Whether a known candidate was found.
    pub fn found(&self) -> bool {
        self.suggestion.is_some()
    }
}

/// Spelling corrector over an immutable frequency table.
///
/// The alphabet is derived from the table at construction time. All methods
/// take `&self` and the corrector holds no interior mutability, so it can be
/// shared read-only across threads.
pub struct Corrector {
    table: FrequencyTable,
    alphabet: Alphabet,
}

impl Corrector {
    /// Create a corrector, deriving the alphabet from the table.
    pub fn new(table: FrequencyTable) -> Self {
        let alphabet = Alphabet::from_table(&table);
        Corrector { table, alphabet }
    }

    /// The underlying frequency table.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// The alphabet derived from the table.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Check if a word is in the dictionary.
    pub fn is_known(&self, word: &str) -> bool {
        self.table.contains(&word.to_lowercase())
    }

    /// Known words reachable from `word` by the two-step edit expansion.
    ///
    /// This is the raw distance-2 search; it does not consult the word
    /// itself or its one-edit neighbors. Returns an empty set when nothing
    /// is in reach.
    pub fn known_within_two_edits(&self, word: &str) -> AHashSet<String> {
        let generator = EditGenerator::new(&self.alphabet);
        generator.known_edits2(&word.to_lowercase(), &self.table)
    }

    /// The candidate pool for a word: the word itself when known, otherwise
    /// its known one-edit neighbors, otherwise the two-edit expansion.
    ///
    /// The pool is unordered; ranking is a separate step.
    pub fn candidates(&self, word: &str) -> AHashSet<String> {
        let word = word.to_lowercase();

        if self.table.contains(&word) {
            let mut exact = AHashSet::new();
            exact.insert(word);
            return exact;
        }

        let generator = EditGenerator::new(&self.alphabet);
        let one_edit = generator.edits1(&word);

        let known_one_edit: AHashSet<String> = one_edit
            .iter()
            .filter(|edit| self.table.contains(edit))
            .cloned()
            .collect();
        if !known_one_edit.is_empty() {
            return known_one_edit;
        }

        generator.known_expansion(&one_edit, &self.table)
    }

    /// All candidates for a word, ranked by count (descending) with ties
    /// broken by word order.
    pub fn suggestions(&self, word: &str) -> Vec<Suggestion> {
        let word = word.to_lowercase();

        let mut suggestions: Vec<Suggestion> = self
            .candidates(&word)
            .into_iter()
            .map(|candidate| {
                let count = self.table.count(&candidate);
                let distance = damerau_levenshtein_distance(&word, &candidate);
                Suggestion::new(candidate, count, distance)
            })
            .collect();

        suggestions.sort();
        suggestions
    }

    /// Correct a word, returning the highest-ranked known candidate.
    pub fn correct(&self, word: &str) -> Correction {
        let word = word.to_lowercase();
        let suggestion = self.suggestions(&word).into_iter().next();

        Correction {
            input: word,
            suggestion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_wins() {
        let corrector = Corrector::new(FrequencyTable::from_corpus("the cat sat"));

        let correction = corrector.correct("cat");
        let suggestion = correction.suggestion.unwrap();
        assert_eq!(suggestion.word, "cat");
        assert_eq!(suggestion.distance, 0);
    }

    #[test]
    fn test_alphabet_is_derived_from_the_table() {
        let corrector = Corrector::new(FrequencyTable::from_corpus("the cat sat"));

        assert!(corrector.table().contains("cat"));
        assert!(corrector.alphabet().contains('c'));
        assert!(!corrector.alphabet().contains('z'));
    }

    #[test]
    fn test_one_transposition_away() {
        let corrector = Corrector::new(FrequencyTable::from_corpus("the cat sat"));

        let correction = corrector.correct("cta");
        assert_eq!(correction.output(), "cat");
        assert_eq!(correction.suggestion.unwrap().distance, 1);
    }

    #[test]
    fn test_two_edits_away() {
        let corrector = Corrector::new(FrequencyTable::from_corpus("spelling is hard"));

        let correction = corrector.correct("speling");
        assert_eq!(correction.output(), "spelling");
    }

    #[test]
    fn test_frequency_ranking() {
        // "the" observed twice, "ten" once: both are one edit from "teh".
        let corrector = Corrector::new(FrequencyTable::from_corpus("the the ten"));

        let correction = corrector.correct("teh");
        assert_eq!(correction.output(), "the");

        let suggestions = corrector.suggestions("teh");
        assert_eq!(suggestions[0].word, "the");
        assert!(suggestions.iter().any(|s| s.word == "ten"));
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // "bat" and "cat" both appear once and are one replacement away.
        let corrector = Corrector::new(FrequencyTable::from_corpus("bat cat"));

        let correction = corrector.correct("aat");
        assert_eq!(correction.output(), "bat");
    }

    #[test]
    fn test_no_correction_falls_back_to_input() {
        let corrector = Corrector::new(FrequencyTable::from_corpus("the cat sat"));

        let correction = corrector.correct("xylophone");
        assert!(!correction.found());
        assert_eq!(correction.output(), "xylophone");
        assert!(corrector.candidates("xylophone").is_empty());
    }

    #[test]
    fn test_empty_input_does_not_error() {
        let corrector = Corrector::new(FrequencyTable::from_corpus("at it is"));

        // Two-character words are reachable from "" by two inserts.
        let candidates = corrector.candidates("");
        assert!(candidates.contains("at"));

        let correction = corrector.correct("");
        assert!(correction.found());
    }

    #[test]
    fn test_input_is_lowercased_once() {
        let corrector = Corrector::new(FrequencyTable::from_corpus("the cat sat"));

        assert!(corrector.is_known("CAT"));
        assert_eq!(corrector.correct("CTA").output(), "cat");
    }

    #[test]
    fn test_candidate_pool_prefers_one_edit_neighbors() {
        // "cart" is two edits from "cta"; "cat" is one. The pool stops at
        // the one-edit layer when it is non-empty.
        let corrector = Corrector::new(FrequencyTable::from_corpus("cat cart"));

        let candidates = corrector.candidates("cta");
        assert!(candidates.contains("cat"));
        assert!(!candidates.contains("cart"));
    }

    #[test]
    fn test_known_within_two_edits_is_pure_distance_two_search() {
        let corrector = Corrector::new(FrequencyTable::from_corpus("the cat sat"));

        // The layered pool would stop at the exact match; the raw search
        // still runs the full expansion.
        let known = corrector.known_within_two_edits("cat");
        assert!(known.contains("sat"));
        assert!(known.contains("cat"));
    }
}
