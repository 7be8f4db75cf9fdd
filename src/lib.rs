//! gpg-audit - GitHub org GPG key compliance audit
//!
//! Enumerates the members of one or more GitHub organizations, optionally
//! narrows them to users with recent commits, checks each user's public
//! GPG keys and writes three sorted username lists: ignored, compliant
//! and non-compliant.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): run configuration, classification, GitHub records, ports
//! - **Service Layer** (`services`): the audit stages and the pipeline
//! - **Adapters** (`adapters`): the GitHub REST client
//! - **Infrastructure Layer** (`infrastructure`): config, credentials, logging
//! - **CLI Layer** (`cli`): command-line interface

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::github::GitHubClient;
pub use domain::models::{AuditMode, Bucket, Classification, RunConfig};
pub use domain::ports::GitHubApi;
pub use domain::{AuditError, AuditResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::AuditPipeline;
