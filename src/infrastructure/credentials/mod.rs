//! Credentials management infrastructure
//!
//! GitHub token resolution:
//! - `GITHUB_TOKEN` environment variable
//! - `.credentials` file fallback in the working directory
//! - Redacted `Debug` output for the token

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Environment variable holding the GitHub personal access token.
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Fallback file holding the token when the variable is unset.
pub const CREDENTIALS_FILE: &str = ".credentials";

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error(
        "Environment variable GITHUB_TOKEN not set to GitHub personal access token, and no {CREDENTIALS_FILE} file found"
    )]
    MissingToken,
}

/// A GitHub access token. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubToken(String);

impl GitHubToken {
    /// Wrap a raw token, stripping line breaks and surrounding whitespace.
    /// Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let token: String = raw.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubToken([REDACTED])")
    }
}

/// Resolve the token from the environment, then from `.credentials` in
/// the working directory.
pub fn resolve_token() -> Result<GitHubToken, CredentialsError> {
    resolve_token_from(Path::new(CREDENTIALS_FILE))
}

/// Resolve the token from the environment, then from `credentials_file`.
pub fn resolve_token_from(credentials_file: &Path) -> Result<GitHubToken, CredentialsError> {
    if let Some(token) = std::env::var(ENV_GITHUB_TOKEN)
        .ok()
        .as_deref()
        .and_then(GitHubToken::new)
    {
        debug!("using GitHub token from {ENV_GITHUB_TOKEN}");
        return Ok(token);
    }

    match std::fs::read_to_string(credentials_file) {
        Ok(contents) => {
            debug!(path = %credentials_file.display(), "using GitHub token from credentials file");
            GitHubToken::new(&contents).ok_or(CredentialsError::MissingToken)
        }
        Err(_) => Err(CredentialsError::MissingToken),
    }
}
