//! The audit run context.
//!
//! Owns the resolved configuration, the GitHub port and the report
//! location, and drives the stages in order: members, then (active mode)
//! repositories and commit activity, then GPG key checks and reports.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::errors::{AuditError, AuditResult};
use crate::domain::models::{AuditMode, Classification, RunConfig};
use crate::domain::ports::GitHubApi;

use super::activity_filter::ActivityFilter;
use super::compliance_checker::ComplianceChecker;
use super::member_enumerator::MemberEnumerator;
use super::repo_enumerator::RepoEnumerator;
use super::report_writer::ReportWriter;

pub struct AuditPipeline {
    api: Arc<dyn GitHubApi>,
    config: RunConfig,
    reports: ReportWriter,
}

impl AuditPipeline {
    pub fn new(api: Arc<dyn GitHubApi>, config: RunConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            api,
            config,
            reports: ReportWriter::new(output_dir),
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn reports(&self) -> &ReportWriter {
        &self.reports
    }

    /// Run the whole audit and write the reports.
    ///
    /// Previous report files are removed before any request is made, so a
    /// failed run never leaves stale results behind.
    pub async fn run(&self) -> AuditResult<Classification> {
        self.reports.clear_previous();

        let api = self.api.as_ref();
        let members = MemberEnumerator::new(api).enumerate(&self.config.orgs).await?;
        if members.is_empty() {
            return Err(AuditError::NoMembers);
        }

        let candidates = self.candidates(members).await?;
        let classification = ComplianceChecker::new(api)
            .classify(&candidates, &self.config.ignores)
            .await?;

        self.reports.write(&classification)?;
        Ok(classification)
    }

    async fn candidates(&self, members: BTreeSet<String>) -> AuditResult<BTreeSet<String>> {
        let since = match (self.config.mode, self.config.since_param()) {
            (AuditMode::ActiveUsersOnly, Some(since)) => since,
            _ => return Ok(members),
        };
        info!("Activity time within which to check users is {since}");

        let api = self.api.as_ref();
        let repos = RepoEnumerator::new(api).enumerate(&self.config.orgs).await?;
        ActivityFilter::new(api)
            .active_members(&repos, &members, &since)
            .await
    }
}
