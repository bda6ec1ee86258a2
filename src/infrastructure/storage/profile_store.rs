//! State-file profile storage.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::errors::StoreError;
use crate::domain::ports::ProfileStore;
use crate::infrastructure::config::StorageManager;

/// Profile store adapter backed by the state file.
///
/// The name lives under a single key in `state.toml`; writes replace the
/// file atomically.
pub struct TomlProfileStore {
    storage: StorageManager,
}

impl TomlProfileStore {
    /// Creates a store over the given storage manager.
    #[must_use]
    pub const fn new(storage: StorageManager) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ProfileStore for TomlProfileStore {
    async fn load_name(&self) -> Result<Option<String>, StoreError> {
        debug!("Loading profile name from state file");

        let state = self.storage.load_state().map_err(|e| {
            warn!(error = %e, "Failed to load state file");
            StoreError::load_failed(e.to_string())
        })?;

        Ok(state.profile_name)
    }

    async fn save_name(&self, name: &str) -> Result<(), StoreError> {
        debug!("Saving profile name to state file");

        let mut state = self.storage.load_state().map_err(|e| {
            warn!(error = %e, "Failed to load state file before save");
            StoreError::save_failed(e.to_string())
        })?;

        state.profile_name = Some(name.to_string());

        self.storage.save_state(&state).map_err(|e| {
            warn!(error = %e, "Failed to write state file");
            StoreError::save_failed(e.to_string())
        })?;

        debug!("Profile name saved");
        Ok(())
    }
}
