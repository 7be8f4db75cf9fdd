//! Infrastructure layer module
//!
//! This module contains the process-level plumbing around the audit:
//! - Configuration management
//! - Logging infrastructure
//! - Credentials management

pub mod config;
pub mod credentials;
pub mod logging;
