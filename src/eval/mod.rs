//! Evaluation harness for the spelling corrector.
//!
//! Runs a corrector over a labeled dataset of (correct, misspelled) pairs,
//! reports an accuracy ratio, and can cross-check an external correction
//! oracle against the corrector's two-edit search.

pub mod dataset;
pub mod oracle;
pub mod report;

// Re-export commonly used types
pub use dataset::*;
pub use oracle::*;
pub use report::*;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{RespellError, Result};
use crate::spelling::corrector::Corrector;
use crate::util::levenshtein::damerau_levenshtein_within;

/// What to do when the oracle proposes a word the two-edit search cannot
/// reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DivergencePolicy {
    /// Log the divergence, record it in the report, and keep going.
    #[default]
    Warn,
    /// Fail the run on the first divergence.
    Abort,
}

/// Configuration for an evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Pairs whose expected and misspelled forms are further apart than
    /// this are skipped: they are outside the search's guaranteed reach.
    pub max_distance: usize,
    /// Divergence handling when an oracle is consulted.
    pub divergence: DivergencePolicy,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_distance: 2,
            divergence: DivergencePolicy::Warn,
        }
    }
}

/// Drives a corrector over labeled pairs and tallies the outcome.
pub struct Evaluator<'a> {
    corrector: &'a Corrector,
    config: EvalConfig,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator with the default configuration.
    pub fn new(corrector: &'a Corrector) -> Self {
        Evaluator {
            corrector,
            config: EvalConfig::default(),
        }
    }

    /// Create an evaluator with a custom configuration.
    pub fn with_config(corrector: &'a Corrector, config: EvalConfig) -> Self {
        Evaluator { corrector, config }
    }

    /// Evaluate pairs against the corrector alone.
    ///
    /// The corrector is read-only, so pairs are scored in parallel.
    pub fn run(&self, pairs: &[LabeledPair]) -> EvalReport {
        let results: Vec<PairResult> = pairs
            .par_iter()
            .map(|pair| self.evaluate_pair(pair))
            .collect();

        EvalReport::from_results(results)
    }

    /// Evaluate pairs, additionally consulting an oracle for each attempted
    /// pair and checking its reply against the two-edit known closure.
    ///
    /// The oracle exchange is a stateful external resource, so this path is
    /// sequential.
    pub fn run_against_oracle(
        &self,
        pairs: &[LabeledPair],
        oracle: &mut dyn CorrectionOracle,
    ) -> Result<EvalReport> {
        let mut results = Vec::with_capacity(pairs.len());

        for pair in pairs {
            let mut result = self.evaluate_pair(pair);

            if result.outcome != PairOutcome::Skipped {
                let reply = oracle.correct(&pair.typo)?;
                result.divergence = self.divergence(&pair.typo, reply);

                if !result.divergence.is_empty() {
                    match self.config.divergence {
                        DivergencePolicy::Abort => {
                            return Err(RespellError::evaluation(format!(
                                "oracle proposed unreachable candidates for {:?}: {:?}",
                                pair.typo, result.divergence
                            )));
                        }
                        DivergencePolicy::Warn => {
                            log::warn!(
                                "oracle proposed unreachable candidates for {:?}: {:?}",
                                pair.typo,
                                result.divergence
                            );
                        }
                    }
                }
            }

            results.push(result);
        }

        Ok(EvalReport::from_results(results))
    }

    /// Score one pair: gate on edit distance, then check whether the
    /// expected word is in the corrector's candidate pool.
    fn evaluate_pair(&self, pair: &LabeledPair) -> PairResult {
        let in_reach =
            damerau_levenshtein_within(&pair.expected, &pair.typo, self.config.max_distance)
                .is_some();
        if !in_reach {
            log::debug!(
                "skipping {:?} -> {:?}: distance above {}",
                pair.expected,
                pair.typo,
                self.config.max_distance
            );
            return PairResult {
                expected: pair.expected.clone(),
                typo: pair.typo.clone(),
                outcome: PairOutcome::Skipped,
                best: None,
                divergence: Vec::new(),
            };
        }

        let candidates = self.corrector.candidates(&pair.typo);
        let outcome = if candidates.contains(&pair.expected) {
            PairOutcome::Hit
        } else {
            PairOutcome::Miss
        };
        let best = self
            .corrector
            .correct(&pair.typo)
            .suggestion
            .map(|s| s.word);

        PairResult {
            expected: pair.expected.clone(),
            typo: pair.typo.clone(),
            outcome,
            best,
            divergence: Vec::new(),
        }
    }

    /// Oracle words the two-edit search cannot reach, lowercased for
    /// comparison against the dictionary.
    fn divergence(&self, typo: &str, reply: Option<Vec<String>>) -> Vec<String> {
        let Some(words) = reply else {
            return Vec::new();
        };

        let closure = self.corrector.known_within_two_edits(typo);
        let mut stray: Vec<String> = words
            .into_iter()
            .map(|word| word.to_lowercase())
            .filter(|word| !closure.contains(word))
            .collect();
        stray.sort_unstable();
        stray.dedup();
        stray
    }
}
