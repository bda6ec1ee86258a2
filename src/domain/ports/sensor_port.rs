//! Motion sensor port definition.

use async_trait::async_trait;

use crate::domain::entities::SensorReading;
use crate::domain::errors::DeviceError;

/// Port for reading the device accelerometer.
///
/// The port exposes single samples; the subscription machinery that polls it
/// at an interval lives in the infrastructure sampler.
#[async_trait]
pub trait Accelerometer: Send + Sync {
    /// Returns whether the sensor can be read on this machine.
    async fn is_available(&self) -> bool;

    /// Reads one sample.
    async fn sample(&self) -> Result<SensorReading, DeviceError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Mock accelerometer producing a deterministic ramp.
    pub struct MockAccelerometer {
        available: AtomicBool,
        samples_taken: AtomicUsize,
    }

    impl MockAccelerometer {
        /// Creates an available mock.
        pub fn new() -> Self {
            Self {
                available: AtomicBool::new(true),
                samples_taken: AtomicUsize::new(0),
            }
        }

        /// Creates an unavailable mock.
        pub fn unavailable() -> Self {
            let mock = Self::new();
            mock.available.store(false, Ordering::SeqCst);
            mock
        }

        /// Number of samples served so far.
        pub fn samples_taken(&self) -> usize {
            self.samples_taken.load(Ordering::SeqCst)
        }
    }

    impl Default for MockAccelerometer {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl Accelerometer for MockAccelerometer {
        async fn is_available(&self) -> bool {
            self.available.load(Ordering::SeqCst)
        }

        async fn sample(&self) -> Result<SensorReading, DeviceError> {
            if !self.available.load(Ordering::SeqCst) {
                return Err(DeviceError::SensorUnavailable);
            }

            #[allow(clippy::cast_precision_loss)]
            let n = self.samples_taken.fetch_add(1, Ordering::SeqCst) as f64;
            Ok(SensorReading::new(n * 0.01, n * 0.02, 1.0))
        }
    }
}
