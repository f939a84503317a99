// confmask/src/cli.rs
//! This file defines the command-line interface (CLI) for the confmask application.
//!
//! The masking switches keep their historical single-dash spelling
//! (`-vrfname`, `-desc`, `-comment`) and may appear anywhere, in any order and
//! any number of times. They are collected as loose tokens rather than clap
//! flags so that unknown tokens can be ignored instead of rejected.
//!
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

use confmask_core::MaskingOptions;

/// Token that prints the masking summary to stderr after the run.
pub const FLAG_SUMMARY: &str = "-summary";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "confmask",
    author = "confmask contributors",
    version = env!("CARGO_PKG_VERSION"),
    about = "Anonymize network-device configurations read from stdin",
    long_about = "confmask reads a device configuration from stdin and writes it to stdout \
                  with IP addresses masked. Optional tokens also pseudonymize VRF names \
                  (-vrfname), remove description text (-desc) and remove comment text \
                  (-comment). Clap options such as --config must come before the masking tokens.",
    after_help = "Example: cat running-config.txt | confmask -vrfname -desc -comment"
)]
pub struct Cli {
    /// YAML file with `mask_vrf_names`, `mask_descriptions` and `mask_comments` keys.
    #[arg(
        long = "config",
        value_name = "FILE",
        env = "CONFMASK_CONFIG",
        help = "Read masking options from a YAML file (merged with the tokens)."
    )]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long = "debug", help = "Enable debug logging on stderr.")]
    pub debug: bool,

    /// Masking tokens: -vrfname, -desc, -comment, -summary. Anything else is ignored.
    #[arg(
        value_name = "TOKENS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Masking tokens: -vrfname, -desc, -comment, -summary. Unknown tokens are ignored."
    )]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Options enabled by the tokens alone, before any config file is merged in.
    pub fn token_options(&self) -> MaskingOptions {
        MaskingOptions::from_args(&self.tokens)
    }

    pub fn wants_summary(&self) -> bool {
        self.tokens.iter().any(|token| token == FLAG_SUMMARY)
    }
}
