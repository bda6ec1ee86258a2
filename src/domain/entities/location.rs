//! Location entities.

/// A pair of WGS84 coordinates from a one-shot position query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A reverse-geocoded place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Place {
    /// City name, when the geocoder resolved one.
    pub city: Option<String>,
    /// Country name, when available.
    pub country: Option<String>,
}

impl Place {
    /// Returns the city, falling back to a fixed label when unresolved.
    #[must_use]
    pub fn city_or_unknown(&self) -> String {
        self.city
            .clone()
            .unwrap_or_else(|| "Unknown City".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_fallback() {
        let place = Place::default();
        assert_eq!(place.city_or_unknown(), "Unknown City");

        let place = Place {
            city: Some("Lahore".to_string()),
            country: Some("Pakistan".to_string()),
        };
        assert_eq!(place.city_or_unknown(), "Lahore");
    }

    #[test]
    fn test_coordinates_display() {
        let coords = Coordinates::new(31.5497, 74.3436);
        assert_eq!(coords.to_string(), "31.5497, 74.3436");
    }
}
