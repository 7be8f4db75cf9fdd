use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::domain::errors::AuditResult;
use crate::domain::models::{Bucket, Classification};
use crate::domain::ports::GitHubApi;

/// Sorts candidates into ignored, compliant and non-compliant.
pub struct ComplianceChecker<'a> {
    api: &'a dyn GitHubApi,
}

impl<'a> ComplianceChecker<'a> {
    pub fn new(api: &'a dyn GitHubApi) -> Self {
        Self { api }
    }

    /// Classify every candidate. Ignored users are not looked up.
    ///
    /// # Errors
    /// Any failed GPG key request.
    pub async fn classify(
        &self,
        candidates: &BTreeSet<String>,
        ignores: &HashSet<String>,
    ) -> AuditResult<Classification> {
        let mut classification = Classification::new();
        for user in candidates {
            if ignores.contains(user) {
                debug!(user = %user, "ignored per exception list");
                classification.push(Bucket::Ignored, user.as_str());
                continue;
            }
            let keys = self.api.list_gpg_keys(user).await?;
            debug!(user = %user, keys = keys.len(), "checked GPG keys");
            let bucket = if keys.is_empty() {
                Bucket::NonCompliant
            } else {
                Bucket::Compliant
            };
            classification.push(bucket, user.as_str());
        }
        Ok(classification)
    }
}
