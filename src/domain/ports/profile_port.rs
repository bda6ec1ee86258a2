//! Profile store port definition.

use async_trait::async_trait;

use crate::domain::errors::StoreError;

/// Port for the locally persisted profile name.
///
/// One string under one fixed key: read at screen mount, written on an
/// explicit save.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Loads the saved name, if any.
    async fn load_name(&self) -> Result<Option<String>, StoreError>;

    /// Saves the name.
    async fn save_name(&self, name: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock in-memory profile store for testing.
    pub struct MockProfileStore {
        name: Arc<RwLock<Option<String>>>,
    }

    impl MockProfileStore {
        /// Creates an empty mock store.
        pub fn new() -> Self {
            Self {
                name: Arc::new(RwLock::new(None)),
            }
        }

        /// Creates a mock store with a saved name.
        pub fn with_name(name: impl Into<String>) -> Self {
            Self {
                name: Arc::new(RwLock::new(Some(name.into()))),
            }
        }
    }

    impl Default for MockProfileStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl ProfileStore for MockProfileStore {
        async fn load_name(&self) -> Result<Option<String>, StoreError> {
            Ok(self.name.read().await.clone())
        }

        async fn save_name(&self, name: &str) -> Result<(), StoreError> {
            *self.name.write().await = Some(name.to_string());
            Ok(())
        }
    }
}
