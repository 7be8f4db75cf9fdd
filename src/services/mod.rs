//! Audit stages and the pipeline that runs them.

pub mod activity_filter;
pub mod audit_pipeline;
pub mod compliance_checker;
pub mod member_enumerator;
pub mod pagination;
pub mod repo_enumerator;
pub mod report_writer;

#[cfg(test)]
pub(crate) mod test_support;

pub use activity_filter::ActivityFilter;
pub use audit_pipeline::AuditPipeline;
pub use compliance_checker::ComplianceChecker;
pub use member_enumerator::MemberEnumerator;
pub use repo_enumerator::{RepoEnumerator, RepoRef};
pub use report_writer::{format_percentage, ReportWriter};
