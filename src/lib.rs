//! # Respell
//!
//! A frequency-weighted spelling correction library for Rust.
//!
//! ## Features
//!
//! - Frequency dictionary built from a reference corpus, with a
//!   Laplace-style count floor so unseen words never score zero
//! - Bounded edit-distance candidate search (one and two edits) over the
//!   alphabet observed in the corpus
//! - Frequency-ranked corrections with deterministic tie-breaking
//! - Evaluation harness: labeled dataset loading, accuracy reporting, and
//!   comparison against an external correction oracle

pub mod error;
pub mod eval;
pub mod spelling;
pub mod util;

pub mod prelude {
    pub use crate::error::{RespellError, Result};
    pub use crate::eval::{
        DivergencePolicy, EvalConfig, EvalReport, Evaluator, LabeledPair, PairOutcome,
    };
    pub use crate::spelling::{
        Alphabet, Correction, Corrector, EditGenerator, FrequencyTable, Suggestion,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
