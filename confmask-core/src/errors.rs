//! errors.rs - Custom error types for the confmask-core library.
//!
//! This module defines a structured error enum for the library. Content never
//! produces an error (unmatched or malformed lines pass through untouched), so
//! the variants here cover setup problems: pattern compilation, options files
//! and the underlying I/O streams.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `confmask-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` expressions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfmaskError {
    #[error("Failed to compile masking pattern '{0}': {1}")]
    PatternCompilationError(String, regex::Error),

    #[error("Failed to parse options file '{0}': {1}")]
    OptionsParseError(String, String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
