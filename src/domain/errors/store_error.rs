//! Profile store error types.

use thiserror::Error;

/// Errors raised by the local profile store port.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StoreError {
    #[error("failed to load profile: {message}")]
    LoadFailed { message: String },

    #[error("failed to save profile: {message}")]
    SaveFailed { message: String },
}

impl StoreError {
    /// Creates a load error.
    #[must_use]
    pub fn load_failed(message: impl Into<String>) -> Self {
        Self::LoadFailed {
            message: message.into(),
        }
    }

    /// Creates a save error.
    #[must_use]
    pub fn save_failed(message: impl Into<String>) -> Self {
        Self::SaveFailed {
            message: message.into(),
        }
    }
}
