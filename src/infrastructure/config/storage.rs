use super::app_config::AppConfig;
use super::state_config::StateConfig;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "tecknian";
const APP_NAME: &str = "pocketlab";
const CONFIG_FILE_NAME: &str = "config.toml";
const STATE_FILE_NAME: &str = "state.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Ensures the configuration directory exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        if !self.config_dir.exists() {
            info!("Creating configuration directory at {:?}", self.config_dir);
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Loads the application configuration.
    ///
    /// A missing file is created with defaults; a malformed file falls back
    /// to defaults without being overwritten.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or created.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        self.ensure_config_dir()?;
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            std::path::Path::to_path_buf,
        );

        if !config_path.exists() {
            info!(
                "Config file not found at {:?}, creating default.",
                config_path
            );
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Failed to parse config file: {}. Using defaults.", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Loads the persisted session state.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read.
    pub fn load_state(&self) -> Result<StateConfig, ConfigError> {
        self.ensure_config_dir()?;
        let state_path = self.config_dir.join(STATE_FILE_NAME);

        if !state_path.exists() {
            return Ok(StateConfig::default());
        }

        let content = fs::read_to_string(&state_path)?;
        match toml::from_str::<StateConfig>(&content) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!("Failed to parse state file: {}. Resetting state.", e);
                Ok(StateConfig::default())
            }
        }
    }

    /// Saves the persisted session state.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save_state(&self, state: &StateConfig) -> Result<(), ConfigError> {
        self.ensure_config_dir()?;
        let state_path = self.config_dir.join(STATE_FILE_NAME);
        Self::save_to_file(&state_path, state)
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}
