//! Error types for the Respell library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RespellError`] enum. The spelling core itself raises no errors; the
//! variants here cover corpus loading, dataset parsing, and the evaluation
//! harness.
//!
//! # Examples
//!
//! ```
//! use respell::error::{RespellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RespellError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Respell operations.
#[derive(Error, Debug)]
pub enum RespellError {
    /// I/O errors (corpus files, dataset files, oracle sockets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Dataset-related errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Oracle exchange errors
    #[error("Oracle error: {0}")]
    Oracle(String),

    /// Evaluation run errors
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RespellError.
pub type Result<T> = std::result::Result<T, RespellError>;

impl RespellError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        RespellError::Corpus(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        RespellError::Dataset(msg.into())
    }

    /// Create a new oracle error.
    pub fn oracle<S: Into<String>>(msg: S) -> Self {
        RespellError::Oracle(msg.into())
    }

    /// Create a new evaluation error.
    pub fn evaluation<S: Into<String>>(msg: S) -> Self {
        RespellError::Evaluation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RespellError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RespellError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
