use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::domain::errors::AuditResult;
use crate::domain::ports::GitHubApi;

use super::repo_enumerator::RepoRef;

/// Narrows org members down to those with recent commits.
pub struct ActivityFilter<'a> {
    api: &'a dyn GitHubApi,
}

impl<'a> ActivityFilter<'a> {
    pub fn new(api: &'a dyn GitHubApi) -> Self {
        Self { api }
    }

    /// Members who authored at least one commit since `since` in any of
    /// `repos`. Authors who are not in `members` are not counted.
    ///
    /// # Errors
    /// Any failed commit page request other than a conflict, which skips
    /// the repository.
    pub async fn active_members(
        &self,
        repos: &[RepoRef],
        members: &BTreeSet<String>,
        since: &str,
    ) -> AuditResult<BTreeSet<String>> {
        let mut active = BTreeSet::new();
        for repo in repos {
            info!("Checking repository @ {} ...", repo.html_url);
            debug!("[START] Commit checks");
            self.scan_repository(repo, members, since, &mut active).await?;
            debug!("[END] Commit checks");
        }
        info!(
            "Found {} active users out of {} org members",
            active.len(),
            members.len()
        );
        Ok(active)
    }

    async fn scan_repository(
        &self,
        repo: &RepoRef,
        members: &BTreeSet<String>,
        since: &str,
        active: &mut BTreeSet<String>,
    ) -> AuditResult<()> {
        let mut page = 1;
        loop {
            let commits = match self
                .api
                .list_commits_since(&repo.owner, &repo.name, since, page)
                .await
            {
                Ok(commits) => commits,
                Err(err) if err.is_skippable() => {
                    warn!("{err}, skipping repository {}", repo.html_url);
                    return Ok(());
                }
                Err(err) => return Err(err),
            };

            if commits.is_empty() {
                if page == 1 {
                    debug!("No matching Git commits for search parameters in this repo");
                }
                return Ok(());
            }
            debug!(
                "Found {} Git commits generally matching search parameters in this repo",
                commits.len()
            );

            for login in commits.iter().filter_map(|c| c.author_login()) {
                if members.contains(login) && !active.contains(login) {
                    debug!("Labeling GitHub user \"{login}\" as active after seeing a Git commit from them");
                    active.insert(login.to_string());
                }
            }
            page += 1;
        }
    }
}
