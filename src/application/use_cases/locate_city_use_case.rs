//! City lookup use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::DeviceError;
use crate::domain::ports::{Consent, Locator};

/// Handles the one-shot permission-gated city lookup.
#[derive(Clone)]
pub struct LocateCityUseCase {
    locator: Arc<dyn Locator>,
}

impl LocateCityUseCase {
    /// Creates a new locate use case.
    #[must_use]
    pub const fn new(locator: Arc<dyn Locator>) -> Self {
        Self { locator }
    }

    /// Requests consent, queries the position once, and resolves a city name.
    ///
    /// # Errors
    /// Returns `DeviceError::ConsentDenied` when permission is refused, or a
    /// lookup error when either query fails.
    pub async fn execute(&self) -> Result<String, DeviceError> {
        debug!("Requesting location consent");

        if self.locator.request_consent().await == Consent::Denied {
            warn!("Location consent denied");
            return Err(DeviceError::ConsentDenied);
        }

        let position = self.locator.current_position().await.map_err(|e| {
            warn!(error = %e, "Position query failed");
            e
        })?;

        debug!(%position, "Position resolved, reverse geocoding");

        let place = self.locator.reverse_geocode(position).await.map_err(|e| {
            warn!(error = %e, "Reverse geocode failed");
            e
        })?;

        let city = place.city_or_unknown();
        info!(%city, "City lookup complete");

        Ok(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockLocator;

    #[tokio::test]
    async fn test_granted_lookup_returns_city() {
        let use_case = LocateCityUseCase::new(Arc::new(MockLocator::granted("Lahore")));

        assert_eq!(use_case.execute().await.unwrap(), "Lahore");
    }

    #[tokio::test]
    async fn test_denied_consent_short_circuits() {
        let use_case = LocateCityUseCase::new(Arc::new(MockLocator::denied()));

        assert!(matches!(
            use_case.execute().await,
            Err(DeviceError::ConsentDenied)
        ));
    }

    #[tokio::test]
    async fn test_unresolved_city_falls_back() {
        let use_case = LocateCityUseCase::new(Arc::new(MockLocator::granted_without_city()));

        assert_eq!(use_case.execute().await.unwrap(), "Unknown City");
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let locator = Arc::new(MockLocator::granted("Lahore"));
        locator.fail_lookups();
        let use_case = LocateCityUseCase::new(locator);

        assert!(matches!(
            use_case.execute().await,
            Err(DeviceError::Lookup { .. })
        ));
    }
}
