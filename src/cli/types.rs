//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::models::AuditMode;
use crate::infrastructure::config::{parse_span, validate_org_name, CliOverrides};

const EXAMPLES: &str = "\
EXAMPLES:
    gpg-audit --config config.json
    gpg-audit --org acme --org acme-labs
    gpg-audit --org acme --span 30d

The GitHub token is read from $GITHUB_TOKEN, or from a local .credentials file.";

#[derive(Parser, Debug)]
#[command(name = "gpg-audit")]
#[command(
    about = "Iterates over GitHub orgs and checks whether users have set up GPG keys",
    long_about = None
)]
#[command(version, arg_required_else_help = true, after_help = EXAMPLES)]
pub struct Cli {
    /// Prebuilt JSON configuration file
    #[arg(long = "config", visible_alias = "from-file", value_name = "JSON_FILE")]
    pub config: Option<PathBuf>,

    /// GitHub org to check (repeatable)
    #[arg(long = "org", value_name = "ORG_NAME", value_parser = parse_org_arg)]
    pub orgs: Vec<String>,

    /// Only check users with commits in the last N days, i.e. "30d"
    #[arg(long, value_name = "DAYS", value_parser = parse_span_arg)]
    pub span: Option<u32>,

    /// Which users to check [possible values: all-users, active-users-only]
    #[arg(long, value_name = "MODE", value_parser = parse_mode_arg)]
    pub mode: Option<AuditMode>,

    /// Print even more information while running
    #[arg(short, long)]
    pub debug: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The command-line half of the run configuration.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            orgs: self.orgs.clone(),
            mode: self.mode,
            span_days: self.span,
        }
    }
}

fn parse_org_arg(value: &str) -> Result<String, String> {
    validate_org_name(value)
        .map(|()| value.to_string())
        .map_err(|e| e.to_string())
}

fn parse_span_arg(value: &str) -> Result<u32, String> {
    parse_span(value).map_err(|e| e.to_string())
}

fn parse_mode_arg(value: &str) -> Result<AuditMode, String> {
    value.parse().map_err(|e: crate::infrastructure::config::ConfigError| e.to_string())
}
