//! GitHub REST adapter.
//!
//! Implements the [`GitHubApi`](crate::domain::ports::GitHubApi) port over
//! HTTP: org members, org repositories, commits since a cutoff and user
//! GPG keys.

pub mod client;

pub use client::{GitHubClient, ENV_GITHUB_API_URL, GITHUB_API_BASE, PER_PAGE};
