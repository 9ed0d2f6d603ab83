//! Single-edit candidate generation, parameterized by an alphabet.

use ahash::AHashSet;

use crate::spelling::alphabet::Alphabet;
use crate::spelling::dictionary::FrequencyTable;

/// Generates the strings reachable from a word by single-character edits.
///
/// The generator is pure: it has no dictionary dependency and produces
/// strings that may or may not be real words. Insert and replace operations
/// iterate over the borrowed [`Alphabet`]. Every produced string differs
/// from the input; operations that would reproduce it (replacing a character
/// with itself, transposing two equal characters) are skipped.
pub struct EditGenerator<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> EditGenerator<'a> {
    /// Create a generator over the given alphabet.
    pub fn new(alphabet: &'a Alphabet) -> Self {
        EditGenerator { alphabet }
    }

    /// All strings reachable from `word` by exactly one edit.
    ///
    /// An empty input yields one insert result per alphabet character, since
    /// the other operations need at least one character to act on.
    pub fn edits1(&self, word: &str) -> AHashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        let mut edits = AHashSet::new();

        // Deletions
        for i in 0..len {
            let mut edited = chars.clone();
            edited.remove(i);
            edits.insert(edited.into_iter().collect());
        }

        // Transpositions (swapping adjacent characters)
        for i in 0..len.saturating_sub(1) {
            if chars[i] == chars[i + 1] {
                continue;
            }
            let mut edited = chars.clone();
            edited.swap(i, i + 1);
            edits.insert(edited.into_iter().collect());
        }

        // Replacements
        for i in 0..len {
            for &ch in self.alphabet.chars() {
                if ch == chars[i] {
                    continue;
                }
                let mut edited = chars.clone();
                edited[i] = ch;
                edits.insert(edited.into_iter().collect());
            }
        }

        // Insertions (including both ends)
        for i in 0..=len {
            for &ch in self.alphabet.chars() {
                let mut edited = chars.clone();
                edited.insert(i, ch);
                edits.insert(edited.into_iter().collect());
            }
        }

        edits
    }

    /// Known words reachable by a second edit from an existing one-edit set.
    pub fn known_expansion(
        &self,
        edits: &AHashSet<String>,
        table: &FrequencyTable,
    ) -> AHashSet<String> {
        let mut known = AHashSet::new();

        for edit in edits {
            for candidate in self.edits1(edit) {
                if table.contains(&candidate) {
                    known.insert(candidate);
                }
            }
        }

        known
    }

    /// Known words reachable from `word` by the two-step expansion.
    ///
    /// Returns an empty set when no known word lies within reach; that is a
    /// normal outcome, not an error.
    pub fn known_edits2(&self, word: &str, table: &FrequencyTable) -> AHashSet<String> {
        self.known_expansion(&self.edits1(word), table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet_for(corpus: &str) -> (FrequencyTable, Alphabet) {
        let table = FrequencyTable::from_corpus(corpus);
        let alphabet = Alphabet::from_table(&table);
        (table, alphabet)
    }

    #[test]
    fn test_edits1_contains_expected_variants() {
        let (_, alphabet) = alphabet_for("the cat sat bat");
        let generator = EditGenerator::new(&alphabet);

        let edits = generator.edits1("cat");

        // Deletions
        assert!(edits.contains("at"));
        assert!(edits.contains("ct"));
        assert!(edits.contains("ca"));

        // Transpositions
        assert!(edits.contains("act"));
        assert!(edits.contains("cta"));

        // Replacements and insertions over the observed alphabet
        assert!(edits.contains("bat"));
        assert!(edits.contains("cats"));
    }

    #[test]
    fn test_edits1_never_contains_input() {
        let (_, alphabet) = alphabet_for("the cat sat bat");
        let generator = EditGenerator::new(&alphabet);

        assert!(!generator.edits1("cat").contains("cat"));
        // Transposing equal adjacent characters would reproduce the input.
        assert!(!generator.edits1("aa").contains("aa"));
    }

    #[test]
    fn test_edits1_length_bounds() {
        let (_, alphabet) = alphabet_for("the cat sat bat");
        let generator = EditGenerator::new(&alphabet);

        let word = "cat";
        for edit in generator.edits1(word) {
            let diff = edit.chars().count().abs_diff(word.chars().count());
            assert!(diff <= 1, "edit {edit:?} strays more than one character");
        }
    }

    #[test]
    fn test_edits1_empty_word() {
        let (_, alphabet) = alphabet_for("ab");
        let generator = EditGenerator::new(&alphabet);

        let edits = generator.edits1("");

        // Only inserts apply: one single-character string per alphabet char.
        assert_eq!(edits.len(), alphabet.len());
        assert!(edits.contains("a"));
        assert!(edits.contains("b"));
    }

    #[test]
    fn test_known_edits2_finds_word_two_edits_away() {
        let (table, alphabet) = alphabet_for("spelling is hard");
        let generator = EditGenerator::new(&alphabet);

        let known = generator.known_edits2("speling", &table);
        assert!(known.contains("spelling"));
    }

    #[test]
    fn test_known_edits2_length_bounds() {
        let (table, alphabet) = alphabet_for("the cat sat cart carts");
        let generator = EditGenerator::new(&alphabet);

        let word = "cta";
        for candidate in generator.known_edits2(word, &table) {
            let diff = candidate.chars().count().abs_diff(word.chars().count());
            assert!(diff <= 2, "candidate {candidate:?} strays more than two characters");
        }
    }

    #[test]
    fn test_known_edits2_empty_when_nothing_in_reach() {
        let (table, alphabet) = alphabet_for("the cat sat");
        let generator = EditGenerator::new(&alphabet);

        let known = generator.known_edits2("xylophone", &table);
        assert!(known.is_empty());
    }
}
