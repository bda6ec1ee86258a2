//! Synthetic accelerometer fallback.

use std::time::Instant;

use async_trait::async_trait;

use crate::domain::entities::SensorReading;
use crate::domain::errors::DeviceError;
use crate::domain::ports::Accelerometer;

/// Accelerometer stand-in for machines without motion hardware.
///
/// Produces a slow drifting waveform around a resting 1 g Z axis, so the
/// monitor view has something to show on a desktop.
pub struct SyntheticAccelerometer {
    started: Instant,
}

impl SyntheticAccelerometer {
    /// Creates a synthetic sensor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SyntheticAccelerometer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Accelerometer for SyntheticAccelerometer {
    async fn is_available(&self) -> bool {
        true
    }

    async fn sample(&self) -> Result<SensorReading, DeviceError> {
        let t = self.started.elapsed().as_secs_f64();

        Ok(SensorReading::new(
            (t * 0.9).sin() * 0.08,
            (t * 0.7).cos() * 0.06,
            1.0 + (t * 1.3).sin() * 0.02,
        ))
    }
}
