//! Resolved, immutable configuration of a single audit run.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::infrastructure::config::ConfigError;

/// Which population of org members is audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditMode {
    /// Every member of every configured org.
    AllUsers,
    /// Only members who authored a commit inside the activity window.
    ActiveUsersOnly,
}

impl AuditMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllUsers => "all-users",
            Self::ActiveUsersOnly => "active-users-only",
        }
    }
}

impl fmt::Display for AuditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all-users" => Ok(Self::AllUsers),
            "active-users-only" => Ok(Self::ActiveUsersOnly),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// Everything the pipeline needs to know about what to audit.
///
/// `since` is `Some` exactly when `mode` is [`AuditMode::ActiveUsersOnly`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Org names in the order they were given, command line first.
    pub orgs: Vec<String>,
    /// Usernames routed to the ignored bucket without a key lookup.
    pub ignores: HashSet<String>,
    pub mode: AuditMode,
    /// Lower bound for commit activity, whole seconds.
    pub since: Option<DateTime<Utc>>,
}

impl RunConfig {
    /// The cutoff rendered for the `since` query parameter.
    pub fn since_param(&self) -> Option<String> {
        self.since.map(format_github_timestamp)
    }
}

/// ISO 8601 timestamp in the `YYYY-MM-DDTHH:MM:SSZ` form GitHub accepts.
pub fn format_github_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
