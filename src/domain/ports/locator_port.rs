//! Location port definition.

use async_trait::async_trait;

use crate::domain::entities::{Coordinates, Place};
use crate::domain::errors::DeviceError;

/// Outcome of a location consent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    /// The user granted location access.
    Granted,
    /// The user denied location access.
    Denied,
}

/// Port for one-shot device location lookups.
#[async_trait]
pub trait Locator: Send + Sync {
    /// Requests permission to read the device position.
    async fn request_consent(&self) -> Consent;

    /// Queries the current position once.
    async fn current_position(&self) -> Result<Coordinates, DeviceError>;

    /// Resolves a position to a place.
    async fn reverse_geocode(&self, position: Coordinates) -> Result<Place, DeviceError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Mock locator for testing.
    pub struct MockLocator {
        consent: Consent,
        lookup_succeeds: AtomicBool,
        city: Option<String>,
    }

    impl MockLocator {
        /// Creates a granting mock resolving to the given city.
        pub fn granted(city: impl Into<String>) -> Self {
            Self {
                consent: Consent::Granted,
                lookup_succeeds: AtomicBool::new(true),
                city: Some(city.into()),
            }
        }

        /// Creates a denying mock.
        pub fn denied() -> Self {
            Self {
                consent: Consent::Denied,
                lookup_succeeds: AtomicBool::new(true),
                city: None,
            }
        }

        /// Creates a granting mock whose geocoder finds no city.
        pub fn granted_without_city() -> Self {
            Self {
                consent: Consent::Granted,
                lookup_succeeds: AtomicBool::new(true),
                city: None,
            }
        }

        /// Makes position lookups fail.
        pub fn fail_lookups(&self) {
            self.lookup_succeeds.store(false, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl Locator for MockLocator {
        async fn request_consent(&self) -> Consent {
            self.consent
        }

        async fn current_position(&self) -> Result<Coordinates, DeviceError> {
            if self.lookup_succeeds.load(Ordering::SeqCst) {
                Ok(Coordinates::new(31.5497, 74.3436))
            } else {
                Err(DeviceError::lookup("mock position failure"))
            }
        }

        async fn reverse_geocode(&self, _position: Coordinates) -> Result<Place, DeviceError> {
            if self.lookup_succeeds.load(Ordering::SeqCst) {
                Ok(Place {
                    city: self.city.clone(),
                    country: Some("Pakistan".to_string()),
                })
            } else {
                Err(DeviceError::lookup("mock geocode failure"))
            }
        }
    }
}
