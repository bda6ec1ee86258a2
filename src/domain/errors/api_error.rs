//! Remote API error types.

use thiserror::Error;

/// Remote demo API error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("request timed out")]
    Timeout,

    #[error("unexpected response status: {status}")]
    Status { status: u16 },

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error("unexpected API error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the error came from the transport rather than the API.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout)
    }
}
