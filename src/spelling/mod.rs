//! Spelling correction core.
//!
//! This module provides the frequency dictionary, the alphabet-parameterized
//! edit generator, and the corrector that ranks known candidates within two
//! edits of a misspelled word.

pub mod alphabet;
pub mod corrector;
pub mod dictionary;
pub mod edits;

// Re-export commonly used types
pub use alphabet::*;
pub use corrector::*;
pub use dictionary::*;
pub use edits::*;
