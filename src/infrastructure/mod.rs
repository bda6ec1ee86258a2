//! Infrastructure layer with platform service adapters.

/// Application configuration.
pub mod config;
/// Network geolocation adapter.
pub mod geo;
/// JSON demo endpoint adapter.
pub mod placeholder;
/// Motion sensor adapters.
pub mod sensor;
/// Profile storage adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use geo::GeoClient;
pub use placeholder::PlaceholderClient;
pub use sensor::{IioAccelerometer, SensorSubscription, SyntheticAccelerometer};
pub use storage::TomlProfileStore;
