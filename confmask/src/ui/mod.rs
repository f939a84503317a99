//! Terminal-facing output helpers.

pub mod output_format;
