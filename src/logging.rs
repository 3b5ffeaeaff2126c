//! Logging initialization

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Console logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error) or an `EnvFilter`
    /// directive string
    pub level: String,
    /// Include event targets in output
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
        }
    }
}

impl LogConfig {
    /// Sets the log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

/// Initializes the global console subscriber.
///
/// Fails if a global subscriber is already set, which callers treat as a
/// configuration error rather than a panic.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.with_target)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::debug!(level = %config.level, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.with_target);
    }

    #[test]
    fn test_log_config_with_level() {
        let config = LogConfig::default().with_level("debug");
        assert_eq!(config.level, "debug");
    }
}
