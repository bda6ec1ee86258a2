//! Industrial I/O accelerometer adapter.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::SensorReading;
use crate::domain::errors::DeviceError;
use crate::domain::ports::Accelerometer;

const IIO_DEVICES_DIR: &str = "/sys/bus/iio/devices";
const STANDARD_GRAVITY: f64 = 9.806_65;

/// Accelerometer adapter reading the Linux iio sysfs interface.
pub struct IioAccelerometer {
    device_dir: PathBuf,
}

impl IioAccelerometer {
    /// Scans the iio bus for a device exposing accelerometer channels.
    #[must_use]
    pub fn discover() -> Option<Self> {
        Self::discover_in(Path::new(IIO_DEVICES_DIR))
    }

    /// Scans a specific devices directory (useful for testing).
    #[must_use]
    pub fn discover_in(devices_dir: &Path) -> Option<Self> {
        let entries = std::fs::read_dir(devices_dir).ok()?;

        for entry in entries.flatten() {
            let dir = entry.path();
            if dir.join("in_accel_x_raw").exists() {
                debug!(device = %dir.display(), "Found iio accelerometer");
                return Some(Self { device_dir: dir });
            }
        }

        debug!("No iio accelerometer found");
        None
    }

    fn read_channel(&self, name: &str) -> Result<f64, DeviceError> {
        let path = self.device_dir.join(name);
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| DeviceError::sensor_read(format!("{name}: {e}")))?;

        raw.trim()
            .parse::<f64>()
            .map_err(|e| DeviceError::sensor_read(format!("{name}: {e}")))
    }

    fn scale(&self) -> f64 {
        // Missing scale files are common; raw counts are better than nothing.
        self.read_channel("in_accel_scale").unwrap_or_else(|e| {
            warn!(error = %e, "No accelerometer scale, using raw counts");
            1.0
        })
    }
}

#[async_trait]
impl Accelerometer for IioAccelerometer {
    async fn is_available(&self) -> bool {
        self.device_dir.join("in_accel_x_raw").exists()
    }

    async fn sample(&self) -> Result<SensorReading, DeviceError> {
        let scale = self.scale();

        // Channel values are m/s² after scaling; report g-forces.
        let x = self.read_channel("in_accel_x_raw")? * scale / STANDARD_GRAVITY;
        let y = self.read_channel("in_accel_y_raw")? * scale / STANDARD_GRAVITY;
        let z = self.read_channel("in_accel_z_raw")? * scale / STANDARD_GRAVITY;

        Ok(SensorReading::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_device(dir: &Path, x: &str, y: &str, z: &str, scale: Option<&str>) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("in_accel_x_raw"), x).unwrap();
        fs::write(dir.join("in_accel_y_raw"), y).unwrap();
        fs::write(dir.join("in_accel_z_raw"), z).unwrap();
        if let Some(scale) = scale {
            fs::write(dir.join("in_accel_scale"), scale).unwrap();
        }
    }

    #[tokio::test]
    async fn test_discover_and_sample() {
        let root = tempdir().unwrap();
        let device = root.path().join("iio:device0");
        write_device(&device, "0\n", "0\n", "16384\n", Some("0.000598\n"));

        let sensor = IioAccelerometer::discover_in(root.path()).unwrap();
        assert!(sensor.is_available().await);

        let reading = sensor.sample().await.unwrap();
        assert!(reading.x.abs() < f64::EPSILON);
        // 16384 * 0.000598 / 9.80665 ≈ 0.999 g
        assert!((reading.z - 1.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_missing_scale_falls_back_to_raw() {
        let root = tempdir().unwrap();
        let device = root.path().join("iio:device0");
        write_device(&device, "1\n", "2\n", "3\n", None);

        let sensor = IioAccelerometer::discover_in(root.path()).unwrap();
        let reading = sensor.sample().await.unwrap();

        assert!((reading.x - 1.0 / STANDARD_GRAVITY).abs() < 1e-9);
    }

    #[test]
    fn test_discover_returns_none_without_device() {
        let root = tempdir().unwrap();
        assert!(IioAccelerometer::discover_in(root.path()).is_none());
    }

    #[tokio::test]
    async fn test_sample_fails_on_garbage_channel() {
        let root = tempdir().unwrap();
        let device = root.path().join("iio:device0");
        write_device(&device, "not-a-number\n", "0\n", "0\n", None);

        let sensor = IioAccelerometer::discover_in(root.path()).unwrap();
        assert!(matches!(
            sensor.sample().await,
            Err(DeviceError::SensorRead { .. })
        ));
    }
}
