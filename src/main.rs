//! gpg-audit CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use gpg_audit::cli::{self, Cli};
use gpg_audit::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return cli::handle_parse_error(&err),
    };

    if let Err(err) = LoggerImpl::init(&LogConfig::from_flags(cli.debug, cli.json)) {
        eprintln!("[ERROR] {err:#}");
        return ExitCode::from(cli::EXIT_ERROR);
    }

    match cli::commands::audit::execute(&cli).await {
        Ok(_) => ExitCode::from(cli::EXIT_OK),
        Err(err) => cli::handle_error(&err),
    }
}
