use async_trait::async_trait;

use crate::domain::errors::AuditResult;
use crate::domain::models::{Commit, GpgKey, OrgMember, Repository};

/// Read-only access to the GitHub endpoints used by the audit.
///
/// Listing methods fetch a single page; `page` starts at 1. Callers
/// paginate until an empty page comes back. Status handling is the
/// implementation's job: unexpected statuses surface as
/// [`AuditError`](crate::domain::errors::AuditError) values.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /orgs/{org}/members`
    ///
    /// # Errors
    /// Any non-200 response.
    async fn list_org_members(&self, org: &str, page: u32) -> AuditResult<Vec<OrgMember>>;

    /// `GET /orgs/{org}/repos`
    ///
    /// # Errors
    /// `InsufficientPermissions` on 404, `UnexpectedStatus` on any other non-200.
    async fn list_org_repos(&self, org: &str, page: u32) -> AuditResult<Vec<Repository>>;

    /// `GET /repos/{owner}/{repo}/commits?since=...`
    ///
    /// # Errors
    /// `InsufficientPermissions` on 404, `Conflict` on 409 (empty
    /// repository), `UnexpectedStatus` on any other non-200.
    async fn list_commits_since(
        &self,
        owner: &str,
        repo: &str,
        since: &str,
        page: u32,
    ) -> AuditResult<Vec<Commit>>;

    /// `GET /users/{username}/gpg_keys`
    ///
    /// # Errors
    /// Any non-200 response.
    async fn list_gpg_keys(&self, username: &str) -> AuditResult<Vec<GpgKey>>;
}
