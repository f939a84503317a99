// confmask/src/lib.rs
//! # confmask CLI
//!
//! Thin terminal wrapper around `confmask-core`: collects the masking tokens,
//! refuses to run without piped input, and streams stdin to stdout through the
//! anonymizer.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::anonymize::{run_confmask, run_confmask_with};
