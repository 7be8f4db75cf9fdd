use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::errors::{AuditError, AuditResult};
use crate::domain::ports::GitHubApi;

use super::pagination::collect_pages;

/// Collects the deduplicated member logins of a set of orgs.
pub struct MemberEnumerator<'a> {
    api: &'a dyn GitHubApi,
}

impl<'a> MemberEnumerator<'a> {
    pub fn new(api: &'a dyn GitHubApi) -> Self {
        Self { api }
    }

    /// Union of the members of every org in `orgs`.
    ///
    /// # Errors
    /// Any failed page request, or a member record without `login`.
    pub async fn enumerate(&self, orgs: &[String]) -> AuditResult<BTreeSet<String>> {
        debug!("[START] Determine unique members of specified GitHub org(s)");
        let mut users = BTreeSet::new();
        for org in orgs {
            let members = collect_pages(|page| self.api.list_org_members(org, page)).await?;
            debug!(org = %org, count = members.len(), "fetched org members");
            for member in members {
                let login = member.login.ok_or_else(|| AuditError::MissingField {
                    field: "login",
                    context: format!("member listing of GitHub org {org}"),
                })?;
                users.insert(login);
            }
        }
        debug!(unique = users.len(), "[END] Determine unique members of specified GitHub org(s)");
        Ok(users)
    }
}
