//! Platform device error types.

use thiserror::Error;

/// Errors raised by the location and motion-sensor ports.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DeviceError {
    #[error("Permission to access location was denied")]
    ConsentDenied,

    #[error("location lookup failed: {message}")]
    Lookup { message: String },

    #[error("Accelerometer not available on this device")]
    SensorUnavailable,

    #[error("sensor read failed: {message}")]
    SensorRead { message: String },
}

impl DeviceError {
    /// Creates a location lookup error.
    #[must_use]
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup {
            message: message.into(),
        }
    }

    /// Creates a sensor read error.
    #[must_use]
    pub fn sensor_read(message: impl Into<String>) -> Self {
        Self::SensorRead {
            message: message.into(),
        }
    }

    /// Returns whether the failure is a user-denied consent rather than a fault.
    #[must_use]
    pub const fn is_consent_denied(&self) -> bool {
        matches!(self, Self::ConsentDenied)
    }
}
