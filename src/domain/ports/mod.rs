//! Port trait definitions (Hexagonal Architecture)
//!
//! - GitHubApi: the paginated GitHub endpoints the audit reads
//!
//! Services depend on these traits only, so the pipeline can be driven by
//! the HTTP adapter in production and by in-memory fakes in tests.

pub mod github_api;

pub use github_api::GitHubApi;
