//! GitHub HTTP client.
//!
//! Wraps the GitHub REST API, providing one typed method per endpoint
//! the audit reads. Each call fetches a single page; pagination and the
//! decision of what to do with a page live in the services.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::errors::{AuditError, AuditResult};
use crate::domain::models::{Commit, GpgKey, OrgMember, Repository};
use crate::domain::ports::GitHubApi;
use crate::infrastructure::credentials::GitHubToken;

/// Base URL for the GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Overrides [`GITHUB_API_BASE`], e.g. for GitHub Enterprise Server.
pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";

/// Page size requested from every listing endpoint.
pub const PER_PAGE: u32 = 100;

/// HTTP client for the GitHub REST API.
///
/// Status codes are mapped to [`AuditError`] per endpoint; network and
/// body decoding failures become [`AuditError::Network`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    token: GitHubToken,
    base_url: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API.
    pub fn new(token: GitHubToken) -> Self {
        Self::with_base_url(token, GITHUB_API_BASE)
    }

    /// Create a client against an arbitrary API root.
    pub fn with_base_url(token: GitHubToken, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            token,
            base_url,
        }
    }

    /// Create a client honouring `GITHUB_API_URL` when it is set.
    pub fn from_env(token: GitHubToken) -> Self {
        match std::env::var(ENV_GITHUB_API_URL) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(token, url.trim()),
            _ => Self::new(token),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue an authorized GET.
    async fn get(&self, url: &str) -> AuditResult<reqwest::Response> {
        debug!(url = %url, "GET");
        let resp = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token.expose()))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", concat!("gpg-audit/", env!("CARGO_PKG_VERSION")))
            .send()
            .await?;
        debug!(url = %url, status = resp.status().as_u16(), "response");
        Ok(resp)
    }

    async fn parse_list<T: DeserializeOwned>(resp: reqwest::Response) -> AuditResult<Vec<T>> {
        Ok(resp.json::<Vec<T>>().await?)
    }
}

fn unexpected(status: StatusCode, url: String) -> AuditError {
    AuditError::UnexpectedStatus {
        status: status.as_u16(),
        url,
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_org_members(&self, org: &str, page: u32) -> AuditResult<Vec<OrgMember>> {
        let url = format!(
            "{}/orgs/{org}/members?per_page={PER_PAGE}&page={page}",
            self.base_url
        );
        let resp = self.get(&url).await?;
        match resp.status() {
            StatusCode::OK => Self::parse_list(resp).await,
            status => Err(unexpected(status, url)),
        }
    }

    async fn list_org_repos(&self, org: &str, page: u32) -> AuditResult<Vec<Repository>> {
        let url = format!(
            "{}/orgs/{org}/repos?per_page={PER_PAGE}&page={page}",
            self.base_url
        );
        let resp = self.get(&url).await?;
        match resp.status() {
            StatusCode::OK => Self::parse_list(resp).await,
            StatusCode::NOT_FOUND => Err(AuditError::InsufficientPermissions { url }),
            status => Err(unexpected(status, url)),
        }
    }

    async fn list_commits_since(
        &self,
        owner: &str,
        repo: &str,
        since: &str,
        page: u32,
    ) -> AuditResult<Vec<Commit>> {
        let url = format!(
            "{}/repos/{owner}/{repo}/commits?per_page={PER_PAGE}&since={since}&page={page}",
            self.base_url
        );
        let resp = self.get(&url).await?;
        match resp.status() {
            StatusCode::OK => Self::parse_list(resp).await,
            StatusCode::NOT_FOUND => Err(AuditError::InsufficientPermissions { url }),
            StatusCode::CONFLICT => Err(AuditError::Conflict { url }),
            status => Err(unexpected(status, url)),
        }
    }

    async fn list_gpg_keys(&self, username: &str) -> AuditResult<Vec<GpgKey>> {
        let url = format!("{}/users/{username}/gpg_keys", self.base_url);
        let resp = self.get(&url).await?;
        match resp.status() {
            StatusCode::OK => Self::parse_list(resp).await,
            status => Err(unexpected(status, url)),
        }
    }
}
