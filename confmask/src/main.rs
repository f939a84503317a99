// confmask/src/main.rs
//! confmask entry point.

use clap::Parser;
use is_terminal::IsTerminal;
use std::process::ExitCode;

use confmask::cli::Cli;
use confmask::logger;
use confmask::run_confmask;
use confmask::ui::output_format;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match run_confmask(&cli) {
        Ok(code) => code,
        Err(e) => {
            let stderr_supports_color = std::io::stderr().is_terminal();
            let _ = output_format::print_error_message(
                &mut std::io::stderr(),
                &format!("{:#}", e),
                stderr_supports_color,
            );
            ExitCode::FAILURE
        }
    }
}
