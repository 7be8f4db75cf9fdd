use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use figment::providers::{Format, Json};
use figment::Figment;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::models::{AuditMode, RunConfig};

/// GitHub org names: alphanumerics, single hyphens between them.
static ORG_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:-?[A-Za-z0-9]){0,50}$").expect("org name pattern is valid")
});

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("--org was given with an invalid GitHub org name: {0:?}")]
    InvalidOrgName(String),

    #[error("Invalid mode: {0:?}. Must be one of: all-users, active-users-only")]
    InvalidMode(String),

    #[error("Invalid span: {0:?}. Must be an integer day count, i.e. \"30d\"")]
    InvalidSpan(String),

    #[error("--config or --from-file was given with an invalid file path: {path}")]
    UnreadableConfigFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file specified: {path}")]
    InvalidConfigFile {
        path: String,
        #[source]
        source: Box<figment::Error>,
    },

    #[error("No GitHub org was given, use --org or the \"orgs\" key of a config file")]
    NoOrgs,
}

/// Shape of the JSON configuration file.
///
/// ```json
/// {
///   "orgs": ["acme", "acme-labs"],
///   "ignores": [{ "username": "build-bot" }],
///   "mode": "active-users-only",
///   "span": "30d"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub orgs: Option<Vec<String>>,
    #[serde(default)]
    pub ignores: Option<Vec<IgnoreEntry>>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub span: Option<SpanValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreEntry {
    #[serde(default)]
    pub username: Option<String>,
}

/// `span` may be written as `30` or `"30d"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpanValue {
    Days(i64),
    Text(String),
}

impl SpanValue {
    pub fn days(&self) -> Result<u32, ConfigError> {
        match self {
            Self::Days(days) => {
                u32::try_from(*days).map_err(|_| ConfigError::InvalidSpan(days.to_string()))
            }
            Self::Text(text) => parse_span(text),
        }
    }
}

/// Values taken from the command line, before merging with a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub orgs: Vec<String>,
    pub mode: Option<AuditMode>,
    pub span_days: Option<u32>,
}

/// Parse a day count such as `30`, `30d` or `30D`.
pub fn parse_span(input: &str) -> Result<u32, ConfigError> {
    let normalized = input.trim().to_lowercase();
    let digits = normalized.strip_suffix('d').unwrap_or(&normalized);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidSpan(input.to_string()));
    }
    digits
        .parse()
        .map_err(|_| ConfigError::InvalidSpan(input.to_string()))
}

/// Check a GitHub org name against the allowed character set.
pub fn validate_org_name(name: &str) -> Result<(), ConfigError> {
    if ORG_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::InvalidOrgName(name.to_string()))
    }
}

/// Resolves a [`RunConfig`] from command-line values and an optional
/// JSON configuration file.
///
/// Precedence: command-line `mode` and `span` win over the file. Orgs
/// are concatenated, command line first. Ignores come from the file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve the run configuration relative to the current time.
    pub fn resolve(overrides: &CliOverrides) -> Result<RunConfig, ConfigError> {
        Self::resolve_at(overrides, Utc::now())
    }

    /// Resolve the run configuration with an explicit clock.
    pub fn resolve_at(
        overrides: &CliOverrides,
        now: DateTime<Utc>,
    ) -> Result<RunConfig, ConfigError> {
        let file = match overrides.config_path {
            Some(ref path) => {
                debug!("[START] Configuration file read-in");
                let file = Self::load_file(path)?;
                debug!("[END] Configuration file read-in");
                file
            }
            None => FileConfig::default(),
        };

        let mut orgs = overrides.orgs.clone();
        for org in file.orgs.unwrap_or_default() {
            debug!(org = %org, "adding org from configuration file");
            orgs.push(org);
        }
        for org in &orgs {
            validate_org_name(org)?;
        }
        if orgs.is_empty() {
            return Err(ConfigError::NoOrgs);
        }

        let ignores: HashSet<String> = file
            .ignores
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| entry.username)
            .inspect(|username| debug!(username = %username, "adding user to ignore list"))
            .collect();

        let mode = match overrides.mode {
            Some(mode) => Some(mode),
            None => file.mode.as_deref().map(str::parse::<AuditMode>).transpose()?,
        };
        let span_days = match overrides.span_days {
            Some(days) => Some(days),
            None => file.span.as_ref().map(SpanValue::days).transpose()?,
        };

        let mode = Self::default_mode(mode, span_days);
        let since = match (mode, span_days) {
            (AuditMode::ActiveUsersOnly, Some(days)) => Some(activity_cutoff(now, days)?),
            _ => None,
        };

        let config = RunConfig {
            orgs,
            ignores,
            mode,
            since,
        };
        debug!(
            orgs = ?config.orgs,
            ignores = config.ignores.len(),
            mode = %config.mode,
            since = ?config.since_param(),
            "resolved run configuration"
        );
        Ok(config)
    }

    /// Load the JSON configuration file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<FileConfig, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading configuration file");

        // figment treats a missing file as empty, so check readability first.
        std::fs::File::open(path).map_err(|source| ConfigError::UnreadableConfigFile {
            path: path.display().to_string(),
            source,
        })?;

        Figment::new()
            .merge(Json::file(path))
            .extract()
            .map_err(|source| ConfigError::InvalidConfigFile {
                path: path.display().to_string(),
                source: Box::new(source),
            })
    }

    /// A span implies active-users-only unless a mode was given. Without a
    /// span there is no activity window, so the audit covers all users.
    fn default_mode(mode: Option<AuditMode>, span_days: Option<u32>) -> AuditMode {
        match (mode, span_days) {
            (Some(mode), Some(_)) => mode,
            (None, Some(_)) => {
                info!("Defaulting mode to \"active-users-only\" since a span argument was given");
                AuditMode::ActiveUsersOnly
            }
            (_, None) => {
                info!("Defaulting mode to \"all-users\" since no span argument was given");
                AuditMode::AllUsers
            }
        }
    }
}

/// `now - days`, truncated to whole seconds.
fn activity_cutoff(now: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>, ConfigError> {
    Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .map(|cutoff| cutoff.trunc_subsecs(0))
        .ok_or_else(|| ConfigError::InvalidSpan(days.to_string()))
}
