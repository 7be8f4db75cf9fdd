//! Domain layer for the GPG audit
//!
//! Run configuration, classification results, GitHub records and the
//! port through which services reach GitHub.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{AuditError, AuditResult};
