//! GitHub REST API records consumed by the audit.
//!
//! Only the fields the audit reads are modelled. Everything is optional
//! so that an absent field surfaces as a data-integrity error in the
//! service that needs it rather than as an opaque parse failure.

use serde::{Deserialize, Serialize};

/// An entry of `GET /orgs/{org}/members`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMember {
    #[serde(default)]
    pub login: Option<String>,
}

/// An entry of `GET /orgs/{org}/repos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Canonical web URL, e.g. `https://github.com/acme/widgets`.
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// An entry of `GET /repos/{owner}/{repo}/commits`.
///
/// `author` is the GitHub account linked to the commit, which is null
/// when the commit email does not map to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

impl Commit {
    pub fn author_login(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.login.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub login: Option<String>,
}

/// An entry of `GET /users/{username}/gpg_keys`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpgKey {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub key_id: Option<String>,
}
