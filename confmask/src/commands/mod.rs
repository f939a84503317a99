//! Command implementations for the confmask binary.

pub mod anonymize;
