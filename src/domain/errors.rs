//! Domain errors for the gpg-audit pipeline.

use thiserror::Error;

use crate::infrastructure::config::ConfigError;
use crate::infrastructure::credentials::CredentialsError;

/// Errors that terminate an audit run.
///
/// Every variant is fatal except [`AuditError::Conflict`], which the
/// commit-activity filter downgrades to a per-repository skip.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error(
        "404 response from GET {url}. Does your GITHUB_TOKEN have sufficient permissions for this GitHub org?"
    )]
    InsufficientPermissions { url: String },

    #[error("409 response from GET {url}")]
    Conflict { url: String },

    #[error("Unexpected response code {status} from GET {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Could not find \"{field}\" field in {context}, response may be corrupted")]
    MissingField {
        field: &'static str,
        context: String,
    },

    #[error("Malformed repository URL: {0}")]
    MalformedRepositoryUrl(String),

    #[error("No unique GitHub users found for the search parameters given")]
    NoMembers,

    #[error("GitHub request failed")]
    Network(#[from] reqwest::Error),

    #[error("Failed to write report")]
    Io(#[from] std::io::Error),
}

impl AuditError {
    /// Returns true if the error only invalidates the current unit of work.
    pub const fn is_skippable(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

pub type AuditResult<T> = Result<T, AuditError>;
