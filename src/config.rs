//! Configuration loading

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Classification thresholds, in CPU usage percent.
///
/// A node strictly above `cpu_high` is high-load; strictly below `cpu_low`
/// is underutilized. Equal high and low thresholds are accepted; a node
/// exactly at that value then matches neither class.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThresholdConfig {
    pub cpu_high: f64,
    pub cpu_low: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            cpu_high: 80.0,
            cpu_low: 40.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    pub log_level: Option<String>,
}

impl MonitorConfig {
    /// Loads configuration: defaults, then the first config file found,
    /// then `NODEPERF_`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        let defaults = MonitorConfig::default();
        settings = settings.add_source(
            config::Config::try_from(&defaults).map_err(|e| Error::Config(e.to_string()))?,
        );

        let config_paths = ["nodeperf.toml", "config.toml", "config/nodeperf.toml"];
        for path in &config_paths {
            if std::path::Path::new(path).exists() {
                tracing::info!(path, "loading configuration file");
                settings = settings.add_source(config::File::with_name(path));
                break;
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("NODEPERF")
                .separator("__")
                .try_parsing(true),
        );

        settings
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Writes a sample configuration file for callers to edit
    pub fn generate_sample_config(path: &str) -> Result<()> {
        let sample = MonitorConfig {
            thresholds: ThresholdConfig::default(),
            log_level: Some("info".to_string()),
        };
        let toml =
            toml::to_string_pretty(&sample).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = MonitorConfig::default();
        assert_eq!(config.thresholds.cpu_high, 80.0);
        assert_eq!(config.thresholds.cpu_low, 40.0);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = MonitorConfig {
            thresholds: ThresholdConfig {
                cpu_high: 75.0,
                cpu_low: 25.0,
            },
            log_level: Some("debug".to_string()),
        };

        let toml = toml::to_string(&config).unwrap();
        let parsed: MonitorConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.thresholds.cpu_high, 75.0);
        assert_eq!(parsed.thresholds.cpu_low, 25.0);
        assert_eq!(parsed.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_generate_sample_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodeperf.toml");
        let path = path.to_str().unwrap();

        MonitorConfig::generate_sample_config(path).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let parsed: MonitorConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.thresholds.cpu_high, 80.0);
    }
}
