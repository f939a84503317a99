// confmask/src/ui/output_format.rs
//! Formatting of messages written to stderr.
//!
//! Color is only applied when the caller says the stream is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use confmask_core::MaskingSummary;

pub const USAGE: &str = "Usage: cat your-config.txt | confmask [-vrfname] [-desc] [-comment]";

pub fn print_error_message<W: Write>(
    writer: &mut W,
    msg: &str,
    supports_color: bool,
) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg)
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

/// Printed when nothing is piped in.
pub fn print_usage_error<W: Write>(writer: &mut W, supports_color: bool) -> io::Result<()> {
    print_error_message(writer, "No configuration data piped to confmask.", supports_color)?;
    writeln!(writer, "{}", USAGE)
}

pub fn print_summary<W: Write>(
    summary: &MaskingSummary,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let header = "--- Masking Summary ---";
    if supports_color {
        writeln!(writer, "{}", header.cyan().bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }
    for (label, count) in summary.entries() {
        if count == 0 {
            continue;
        }
        if supports_color {
            writeln!(writer, "  {}: {}", label, count.yellow())?;
        } else {
            writeln!(writer, "  {}: {}", label, count)?;
        }
    }
    if summary.total_masked() == 0 {
        writeln!(writer, "  No tokens masked.")?;
    }
    Ok(())
}
