pub mod classification;
pub mod github;
pub mod run_config;

pub use classification::{case_insensitive_cmp, Bucket, Classification};
pub use github::{Commit, CommitAuthor, GpgKey, OrgMember, Repository};
pub use run_config::{format_github_timestamp, AuditMode, RunConfig};
