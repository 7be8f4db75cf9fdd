//! In-memory [`GitHubApi`] used by the service tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::{AuditError, AuditResult};
use crate::domain::models::{Commit, CommitAuthor, GpgKey, OrgMember, Repository};
use crate::domain::ports::GitHubApi;

/// Pages are served in order; any page past the configured ones is empty.
#[derive(Default)]
pub struct FakeGitHub {
    members: HashMap<String, Vec<Vec<OrgMember>>>,
    repos: HashMap<String, Vec<Vec<Repository>>>,
    commits: HashMap<String, Vec<Vec<Commit>>>,
    gpg_keys: HashMap<String, usize>,
    forbidden_orgs: HashSet<String>,
    conflicted_repos: HashSet<String>,
    failing_users: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member_pages(mut self, org: &str, pages: &[&[&str]]) -> Self {
        let pages = pages
            .iter()
            .map(|page| {
                page.iter()
                    .map(|login| OrgMember {
                        login: Some((*login).to_string()),
                    })
                    .collect()
            })
            .collect();
        self.members.insert(org.to_string(), pages);
        self
    }

    pub fn with_raw_member_page(mut self, org: &str, page: Vec<OrgMember>) -> Self {
        self.members.insert(org.to_string(), vec![page]);
        self
    }

    /// Repositories are given by name and exposed as `https://github.com/{org}/{name}`.
    pub fn with_repo_pages(mut self, org: &str, pages: &[&[&str]]) -> Self {
        let pages = pages
            .iter()
            .map(|page| {
                page.iter()
                    .map(|name| Repository {
                        html_url: Some(format!("https://github.com/{org}/{name}")),
                        full_name: Some(format!("{org}/{name}")),
                    })
                    .collect()
            })
            .collect();
        self.repos.insert(org.to_string(), pages);
        self
    }

    /// Commit pages for `owner/repo`, one optional author login per commit.
    pub fn with_commit_pages(mut self, full_name: &str, pages: &[&[Option<&str>]]) -> Self {
        let pages = pages
            .iter()
            .map(|page| {
                page.iter()
                    .map(|login| Commit {
                        sha: None,
                        author: login.map(|l| CommitAuthor {
                            login: Some(l.to_string()),
                        }),
                    })
                    .collect()
            })
            .collect();
        self.commits.insert(full_name.to_string(), pages);
        self
    }

    pub fn with_gpg_keys(mut self, username: &str, count: usize) -> Self {
        self.gpg_keys.insert(username.to_string(), count);
        self
    }

    pub fn with_forbidden_org(mut self, org: &str) -> Self {
        self.forbidden_orgs.insert(org.to_string());
        self
    }

    pub fn with_conflicted_repo(mut self, full_name: &str) -> Self {
        self.conflicted_repos.insert(full_name.to_string());
        self
    }

    pub fn with_failing_user(mut self, username: &str) -> Self {
        self.failing_users.insert(username.to_string());
        self
    }

    /// Every request made so far, as `METHOD-ish path` strings.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    pub fn request_count(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.starts_with(prefix))
            .count()
    }

    fn record(&self, request: String) {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request);
    }

    fn page<T: Clone>(pages: Option<&Vec<Vec<T>>>, page: u32) -> Vec<T> {
        pages
            .and_then(|pages| pages.get(page as usize - 1))
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn list_org_members(&self, org: &str, page: u32) -> AuditResult<Vec<OrgMember>> {
        self.record(format!("members/{org}?page={page}"));
        Ok(Self::page(self.members.get(org), page))
    }

    async fn list_org_repos(&self, org: &str, page: u32) -> AuditResult<Vec<Repository>> {
        let request = format!("repos/{org}?page={page}");
        self.record(request.clone());
        if self.forbidden_orgs.contains(org) {
            return Err(AuditError::InsufficientPermissions { url: request });
        }
        Ok(Self::page(self.repos.get(org), page))
    }

    async fn list_commits_since(
        &self,
        owner: &str,
        repo: &str,
        since: &str,
        page: u32,
    ) -> AuditResult<Vec<Commit>> {
        let full_name = format!("{owner}/{repo}");
        let request = format!("commits/{full_name}?since={since}&page={page}");
        self.record(request.clone());
        if self.conflicted_repos.contains(&full_name) {
            return Err(AuditError::Conflict { url: request });
        }
        Ok(Self::page(self.commits.get(&full_name), page))
    }

    async fn list_gpg_keys(&self, username: &str) -> AuditResult<Vec<GpgKey>> {
        let request = format!("gpg_keys/{username}");
        self.record(request.clone());
        if self.failing_users.contains(username) {
            return Err(AuditError::UnexpectedStatus {
                status: 500,
                url: request,
            });
        }
        let count = self.gpg_keys.get(username).copied().unwrap_or(0);
        Ok(vec![GpgKey::default(); count])
    }
}
