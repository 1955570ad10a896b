//! Demo runtime configuration.

/// Settings for one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn,
    /// error).
    pub log_level: String,
    /// Log a summary of the room once the scenario finishes.
    pub summary: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string(), summary: true }
    }
}
