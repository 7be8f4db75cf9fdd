use reqwest::Url;
use tracing::{debug, info};

use crate::domain::errors::{AuditError, AuditResult};
use crate::domain::ports::GitHubApi;

use super::pagination::collect_pages;

/// A repository located by its canonical web URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
    pub html_url: String,
}

impl RepoRef {
    /// Split `https://<host>/<owner>/<repo>` into owner and name.
    ///
    /// Both segments must be plain GitHub names; URLs with a query, a
    /// fragment, extra path segments or percent-encoded characters are
    /// rejected.
    pub fn from_html_url(html_url: &str) -> AuditResult<Self> {
        let malformed = || AuditError::MalformedRepositoryUrl(html_url.to_string());
        let url = Url::parse(html_url).map_err(|_| malformed())?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(malformed());
        }

        let mut segments: Vec<&str> = url.path_segments().ok_or_else(malformed)?.collect();
        if segments.last() == Some(&"") {
            segments.pop();
        }
        match segments.as_slice() {
            [owner, name] if is_github_name(owner) && is_github_name(name) => Ok(Self {
                owner: (*owner).to_string(),
                name: (*name).to_string(),
                html_url: html_url.to_string(),
            }),
            _ => Err(malformed()),
        }
    }
}

fn is_github_name(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Lists the repositories of each org.
pub struct RepoEnumerator<'a> {
    api: &'a dyn GitHubApi,
}

impl<'a> RepoEnumerator<'a> {
    pub fn new(api: &'a dyn GitHubApi) -> Self {
        Self { api }
    }

    /// Repositories of every org in `orgs`, in org order.
    ///
    /// # Errors
    /// `InsufficientPermissions` when an org's repository listing is a 404,
    /// any other failed page request, or a repository without `html_url`.
    pub async fn enumerate(&self, orgs: &[String]) -> AuditResult<Vec<RepoRef>> {
        info!("Will check activity within {} GitHub orgs", orgs.len());
        let mut repos = Vec::new();
        for org in orgs {
            debug!(org = %org, "Getting all repos for GitHub org");
            let listed = collect_pages(|page| self.api.list_org_repos(org, page)).await?;
            info!(
                "Found {} repos to check from within the GitHub org {org} ...",
                listed.len()
            );
            for repo in listed {
                let html_url = repo.html_url.ok_or_else(|| AuditError::MissingField {
                    field: "html_url",
                    context: format!("repository listing of GitHub org {org}"),
                })?;
                repos.push(RepoRef::from_html_url(&html_url)?);
            }
        }
        info!(
            "Will check activity within {} repos from {} GitHub orgs",
            repos.len(),
            orgs.len()
        );
        Ok(repos)
    }
}
