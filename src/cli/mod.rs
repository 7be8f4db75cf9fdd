//! Command-line interface: argument definitions, the audit command and
//! the mapping of outcomes to process exit codes.

pub mod commands;
pub mod types;

use std::process::ExitCode;

use clap::error::ErrorKind;

pub use types::Cli;

/// Exit status for success and for help/version output.
pub const EXIT_OK: u8 = 0;

/// Exit status for every validation, credential and upstream failure.
pub const EXIT_ERROR: u8 = 1;

/// Print a clap parse outcome and pick the exit code.
///
/// Help and version requests succeed. Everything else, including a bare
/// invocation that only prints usage, fails with [`EXIT_ERROR`].
pub fn handle_parse_error(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(EXIT_OK),
        _ => ExitCode::from(EXIT_ERROR),
    }
}

/// Log a fatal error with its cause chain.
pub fn handle_error(err: &anyhow::Error) -> ExitCode {
    tracing::error!("{err:#}");
    ExitCode::from(EXIT_ERROR)
}
