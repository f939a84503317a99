// File: confmask-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for running the anonymizer on in-memory text.
//! Useful for library callers and tests that do not want to deal with readers
//! and writers.

use crate::config::MaskingOptions;
use crate::errors::ConfmaskError;
use crate::pipeline::Anonymizer;
use crate::summary::MaskingSummary;

/// Anonymizes `content` in one call and returns the masked text together with
/// the run's counters.
pub fn anonymize_string_with_summary(
    options: MaskingOptions,
    content: &str,
) -> Result<(String, MaskingSummary), ConfmaskError> {
    let mut output: Vec<u8> = Vec::with_capacity(content.len());
    let summary = Anonymizer::new(options).run(content.as_bytes(), &mut output)?;
    let masked = String::from_utf8(output)
        .map_err(|e| ConfmaskError::from(anyhow::Error::new(e)))?;
    Ok((masked, summary))
}

/// Anonymizes `content` in one call.
///
/// # Arguments
///
/// * `options` - Which optional maskers to run. IP masking always runs.
/// * `content` - Configuration text, possibly spanning many lines.
pub fn anonymize_string(options: MaskingOptions, content: &str) -> Result<String, ConfmaskError> {
    anonymize_string_with_summary(options, content).map(|(masked, _)| masked)
}
