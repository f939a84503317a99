// confmask/src/logger.rs
//! Logger initialization for the confmask binary.
//!
//! Everything goes to stderr so stdout carries only the masked configuration.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger` once. `RUST_LOG` is honoured unless a level is forced.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);

    // A second initialization (e.g. in tests) is harmless.
    let _ = builder.try_init();
}
