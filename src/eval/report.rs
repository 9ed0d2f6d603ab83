//! Evaluation outcomes and the aggregate report.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Outcome of evaluating one labeled pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairOutcome {
    /// The expected word was in the corrector's candidate pool.
    Hit,
    /// The expected word was not found within two edits.
    Miss,
    /// The pair was outside the algorithm's guaranteed reach (edit distance
    /// above the configured maximum) and was excluded from the accuracy
    /// denominator.
    Skipped,
}

/// Per-pair evaluation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairResult {
    /// The correct word.
    pub expected: String,
    /// The misspelled form that was corrected.
    pub typo: String,
    /// Outcome of this pair.
    pub outcome: PairOutcome,
    /// The corrector's best-ranked candidate, if any.
    pub best: Option<String>,
    /// Oracle words absent from the two-edit known closure. Empty unless an
    /// oracle was consulted and disagreed.
    pub divergence: Vec<String>,
}

/// Aggregate report over a dataset run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalReport {
    /// Per-pair records, in dataset order.
    pub results: Vec<PairResult>,
    /// Total pairs seen.
    pub total: usize,
    /// Pairs that entered the accuracy denominator.
    pub attempted: usize,
    /// Pairs excluded for exceeding the distance threshold.
    pub skipped: usize,
    /// Attempted pairs whose expected word was found.
    pub hits: usize,
    /// Pairs with a non-empty divergence.
    pub divergent_pairs: usize,
}

impl EvalReport {
    /// Tally a report from per-pair records.
    pub fn from_results(results: Vec<PairResult>) -> Self {
        let mut report = EvalReport {
            total: results.len(),
            ..Default::default()
        };

        for result in &results {
            match result.outcome {
                PairOutcome::Hit => {
                    report.attempted += 1;
                    report.hits += 1;
                }
                PairOutcome::Miss => report.attempted += 1,
                PairOutcome::Skipped => report.skipped += 1,
            }
            if !result.divergence.is_empty() {
                report.divergent_pairs += 1;
            }
        }

        report.results = results;
        report
    }

    /// Accuracy ratio: hits over attempted pairs, in `[0, 1]`. Skipped
    /// pairs are not part of the denominator. Zero when nothing was
    /// attempted.
    pub fn accuracy(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        self.hits as f64 / self.attempted as f64
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(outcome: PairOutcome, divergence: Vec<String>) -> PairResult {
        PairResult {
            expected: "spelling".to_string(),
            typo: "speling".to_string(),
            outcome,
            best: None,
            divergence,
        }
    }

    #[test]
    fn test_report_tallies() {
        let report = EvalReport::from_results(vec![
            pair(PairOutcome::Hit, vec![]),
            pair(PairOutcome::Hit, vec!["stray".to_string()]),
            pair(PairOutcome::Miss, vec![]),
            pair(PairOutcome::Skipped, vec![]),
        ]);

        assert_eq!(report.total, 4);
        assert_eq!(report.attempted, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.hits, 2);
        assert_eq!(report.divergent_pairs, 1);
    }

    #[test]
    fn test_accuracy_excludes_skipped_pairs() {
        let report = EvalReport::from_results(vec![
            pair(PairOutcome::Hit, vec![]),
            pair(PairOutcome::Miss, vec![]),
            pair(PairOutcome::Skipped, vec![]),
            pair(PairOutcome::Skipped, vec![]),
        ]);

        assert!((report.accuracy() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_accuracy_stays_in_unit_interval() {
        let empty = EvalReport::from_results(vec![]);
        assert_eq!(empty.accuracy(), 0.0);

        let all_hits = EvalReport::from_results(vec![pair(PairOutcome::Hit, vec![])]);
        assert_eq!(all_hits.accuracy(), 1.0);

        let all_misses = EvalReport::from_results(vec![pair(PairOutcome::Miss, vec![])]);
        assert!(all_misses.accuracy() >= 0.0 && all_misses.accuracy() <= 1.0);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = EvalReport::from_results(vec![pair(PairOutcome::Hit, vec![])]);
        let json = report.to_json().unwrap();
        let parsed: EvalReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.hits, report.hits);
        assert_eq!(parsed.results, report.results);
    }
}
