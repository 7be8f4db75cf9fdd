//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Compact text output with severity prefixes
//! - JSON log formatting
//! - `--debug` and `RUST_LOG` level control

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
