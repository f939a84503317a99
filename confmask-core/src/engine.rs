// confmask-core/src/engine.rs
//! Defines the core `LineMasker` trait.
//!
//! Every masking stage (VRF rewrite, description/comment filter, IP masking)
//! implements this trait, and the pipeline runs an ordered list of them over
//! each line. Stages are pure with respect to the line: they never see the
//! line terminator and never add or remove lines.
//!
//! License: MIT OR APACHE 2.0

use crate::summary::MaskingSummary;

/// A single, pluggable masking stage.
pub trait LineMasker: Send + Sync {
    /// Short stage name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the masked form of `line`.
    ///
    /// # Arguments
    /// * `line` - A line body without its terminator.
    /// * `summary` - Counters for the current run; stages add what they changed.
    fn mask_line(&self, line: &str, summary: &mut MaskingSummary) -> String;
}
