//! Network geolocation client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::{IpPositionResponse, ReverseGeocodeResponse};
use crate::domain::entities::{Coordinates, Place};
use crate::domain::errors::DeviceError;
use crate::domain::ports::{Consent, Locator};

const POSITION_URL: &str = "http://ip-api.com/json";
const GEOCODE_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";
const LOOKUP_TIMEOUT_SECS: u64 = 15;

/// Locator adapter using IP geolocation for the position query and a public
/// reverse geocoder for the place lookup.
///
/// Consent is decided at construction time from configuration; a terminal
/// has no runtime permission prompt to raise.
pub struct GeoClient {
    client: Client,
    consent: bool,
    position_url: String,
    geocode_url: String,
}

impl GeoClient {
    /// Creates a client with the given consent.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(consent: bool) -> Result<Self, DeviceError> {
        Self::with_endpoints(consent, POSITION_URL, GEOCODE_URL)
    }

    /// Creates a client against custom endpoints (useful for testing).
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_endpoints(
        consent: bool,
        position_url: impl Into<String>,
        geocode_url: impl Into<String>,
    ) -> Result<Self, DeviceError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .build()
            .map_err(|e| DeviceError::lookup(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            consent,
            position_url: position_url.into(),
            geocode_url: geocode_url.into(),
        })
    }
}

#[async_trait]
impl Locator for GeoClient {
    async fn request_consent(&self) -> Consent {
        if self.consent {
            Consent::Granted
        } else {
            Consent::Denied
        }
    }

    async fn current_position(&self) -> Result<Coordinates, DeviceError> {
        debug!("Querying current position");

        let response = self
            .client
            .get(&self.position_url)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Position query failed");
                DeviceError::lookup(e.to_string())
            })?;

        let position: IpPositionResponse = response
            .json()
            .await
            .map_err(|e| DeviceError::lookup(format!("malformed position response: {e}")))?;

        if position.status != "success" {
            let reason = position.message.unwrap_or_else(|| "unknown".to_string());
            warn!(%reason, "Position service reported failure");
            return Err(DeviceError::lookup(reason));
        }

        let coordinates = Coordinates::new(position.lat, position.lon);
        debug!(%coordinates, "Position resolved");

        Ok(coordinates)
    }

    async fn reverse_geocode(&self, position: Coordinates) -> Result<Place, DeviceError> {
        debug!(%position, "Reverse geocoding");

        let response = self
            .client
            .get(&self.geocode_url)
            .query(&[
                ("latitude", position.latitude.to_string()),
                ("longitude", position.longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Reverse geocode failed");
                DeviceError::lookup(e.to_string())
            })?;

        let geocoded: ReverseGeocodeResponse = response
            .json()
            .await
            .map_err(|e| DeviceError::lookup(format!("malformed geocode response: {e}")))?;

        let to_option = |s: String| if s.is_empty() { None } else { Some(s) };

        Ok(Place {
            city: to_option(geocoded.city),
            country: to_option(geocoded.country_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_denied_consent_never_hits_network() {
        let client = GeoClient::with_endpoints(false, "http://invalid.test", "http://invalid.test")
            .unwrap();

        assert_eq!(client.request_consent().await, Consent::Denied);
    }

    #[tokio::test]
    async fn test_position_parses_success_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "status": "success",
                    "lat": 31.5497,
                    "lon": 74.3436,
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client =
            GeoClient::with_endpoints(true, server.url(), "http://unused.test").unwrap();
        let position = client.current_position().await.unwrap();

        assert!((position.latitude - 31.5497).abs() < f64::EPSILON);
        assert!((position.longitude - 74.3436).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_position_surfaces_service_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body(json!({"status": "fail", "message": "private range"}).to_string())
            .create_async()
            .await;

        let client =
            GeoClient::with_endpoints(true, server.url(), "http://unused.test").unwrap();
        let result = client.current_position().await;

        assert!(matches!(result, Err(DeviceError::Lookup { .. })));
    }

    #[tokio::test]
    async fn test_reverse_geocode_maps_empty_city_to_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"city": "", "countryName": "Pakistan"}).to_string())
            .create_async()
            .await;

        let client =
            GeoClient::with_endpoints(true, "http://unused.test", server.url()).unwrap();
        let place = client
            .reverse_geocode(Coordinates::new(31.5497, 74.3436))
            .await
            .unwrap();

        assert_eq!(place.city, None);
        assert_eq!(place.country, Some("Pakistan".to_string()));
        assert_eq!(place.city_or_unknown(), "Unknown City");
    }
}
