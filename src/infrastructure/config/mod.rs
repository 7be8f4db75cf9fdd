//! Configuration management infrastructure
//!
//! Run configuration resolution:
//! - JSON config file loading (figment)
//! - Command-line precedence over file values
//! - Org name, mode and span validation
//! - Mode defaulting and activity cutoff derivation

pub mod loader;

pub use loader::{
    parse_span, validate_org_name, CliOverrides, ConfigError, ConfigLoader, FileConfig,
    IgnoreEntry, SpanValue,
};
