//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Fetch state definitions.
pub mod fetch;
/// Contact directory filtering.
pub mod filter;
/// Port definitions.
pub mod ports;

pub use entities::{Contact, ContactGroup, SensorReading};
pub use errors::{ApiError, DeviceError, StoreError};
pub use fetch::FetchState;
pub use ports::{Accelerometer, Locator, PlaceholderApi, ProfileStore};
