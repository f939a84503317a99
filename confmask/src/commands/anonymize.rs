//! The anonymize command: stdin in, masked configuration out.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io;
use std::process::ExitCode;

use confmask_core::{Anonymizer, MaskingOptions, MaskingSummary};

use crate::cli::Cli;
use crate::ui::output_format;

/// Combines the tokens with the optional options file.
pub fn resolve_options(cli: &Cli) -> Result<MaskingOptions> {
    let options = cli.token_options();
    let Some(path) = cli.config.as_ref() else {
        return Ok(options);
    };
    let from_file = MaskingOptions::load_from_file(path)
        .with_context(|| format!("Failed to load masking options from {}", path.display()))?;
    Ok(options.merge(from_file))
}

/// The main operation runner for the confmask CLI, bound to the process's
/// stdin, stdout and stderr.
pub fn run_confmask(cli: &Cli) -> Result<ExitCode> {
    let stdin = io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let stderr_supports_color = io::stderr().is_terminal();
    run_confmask_with(
        cli,
        stdin_is_terminal,
        stdin.lock(),
        io::stdout().lock(),
        &mut io::stderr(),
        stderr_supports_color,
    )
}

/// Runs confmask over explicit streams.
///
/// Returns exit code 1 without reading `reader` or writing `writer` when
/// `stdin_is_terminal` is set; the usage message goes to `err`.
pub fn run_confmask_with<R: io::BufRead, W: io::Write, E: io::Write>(
    cli: &Cli,
    stdin_is_terminal: bool,
    reader: R,
    writer: W,
    err: &mut E,
    err_supports_color: bool,
) -> Result<ExitCode> {
    if stdin_is_terminal {
        output_format::print_usage_error(err, err_supports_color)?;
        return Ok(ExitCode::from(1));
    }

    let options = resolve_options(cli)?;
    info!("Starting confmask with {:?}.", options);

    let summary = anonymize(&options, reader, writer)?;

    if cli.wants_summary() {
        output_format::print_summary(&summary, err, err_supports_color)?;
    }

    info!("confmask completed.");
    Ok(ExitCode::SUCCESS)
}

/// Runs the pipeline over any reader/writer pair.
pub fn anonymize<R: io::BufRead, W: io::Write>(
    options: &MaskingOptions,
    reader: R,
    writer: W,
) -> Result<MaskingSummary> {
    let anonymizer = Anonymizer::new(*options);
    let summary = anonymizer
        .run(reader, writer)
        .context("Anonymization failed")?;
    debug!("Run summary: {:?}", summary);
    Ok(summary)
}
