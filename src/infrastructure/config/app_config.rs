//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "pocketlab";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "tecknian";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration from file and CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Remote demo API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Location lookup configuration.
    #[serde(default)]
    pub location: LocationConfig,

    /// Accelerometer configuration.
    #[serde(default)]
    pub sensor: SensorConfig,
}

/// Remote demo API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the JSON demo endpoint.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_api_timeout(),
        }
    }
}

/// Location lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Consent to read the device position. `false` mirrors a denied
    /// permission prompt.
    #[serde(default = "default_true")]
    pub consent: bool,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            consent: default_true(),
        }
    }
}

/// Accelerometer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Sampling interval in milliseconds.
    #[serde(default = "default_sensor_interval")]
    pub interval_ms: u64,

    /// Fall back to a synthetic waveform when no hardware sensor exists.
    #[serde(default = "default_true")]
    pub synthetic_fallback: bool,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_sensor_interval(),
            synthetic_fallback: default_true(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_api_timeout() -> u64 {
    30
}

fn default_sensor_interval() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = args.api_base_url {
            self.api.base_url = base_url;
        }
        if let Some(consent) = args.location_consent {
            self.location.consent = consent;
        }
        if let Some(interval) = args.sensor_interval_ms {
            self.sensor.interval_ms = interval;
        }
        if let Some(fallback) = args.synthetic_sensor {
            self.sensor.synthetic_fallback = fallback;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("pocketlab.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            api: ApiConfig::default(),
            location: LocationConfig::default(),
            sensor: SensorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [api]
            base_url = "http://localhost:9000"

            [sensor]
            interval_ms = 50
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.timeout_secs, 30); // untouched default
        assert_eq!(config.sensor.interval_ms, 50);
        assert!(config.sensor.synthetic_fallback);
        assert!(config.location.consent);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.sensor.interval_ms, 100);
        assert!(config.location.consent);
    }

    #[test]
    fn test_cli_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            log_path: None,
            log_level: Some(LogLevel::Trace),
            api_base_url: None,
            location_consent: Some(false),
            sensor_interval_ms: Some(16),
            synthetic_sensor: None,
        };

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert!(!config.location.consent);
        assert_eq!(config.sensor.interval_ms, 16);
        assert!(config.sensor.synthetic_fallback);
    }
}
