//! Motion sensor adapters.

mod iio;
mod sampler;
mod synthetic;

pub use iio::IioAccelerometer;
pub use sampler::SensorSubscription;
pub use synthetic::SyntheticAccelerometer;
