/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (text, json)
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogConfig {
    /// Configuration for the `--debug` and `--json` command-line flags.
    pub fn from_flags(debug: bool, json: bool) -> Self {
        Self {
            level: if debug { "debug" } else { "info" }.to_string(),
            format: if json { LogFormat::Json } else { LogFormat::Text },
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_flags(false, false)
    }
}
