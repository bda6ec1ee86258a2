use serde::Deserialize;

/// Position response from the IP geolocation service.
#[derive(Debug, Deserialize)]
pub struct IpPositionResponse {
    /// "success" or "fail".
    #[serde(default)]
    pub status: String,
    /// Failure reason, present when status is "fail".
    #[serde(default)]
    pub message: Option<String>,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub lat: f64,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub lon: f64,
}

/// Reverse geocode response.
#[derive(Debug, Deserialize)]
pub struct ReverseGeocodeResponse {
    /// Resolved city, possibly empty.
    #[serde(default)]
    pub city: String,
    /// Resolved country name, possibly empty.
    #[serde(rename = "countryName", default)]
    pub country_name: String,
}
