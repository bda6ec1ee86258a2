//! Sensor subscription machinery.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, warn};

use crate::domain::entities::SensorReading;
use crate::domain::ports::Accelerometer;

/// A live sensor subscription.
///
/// Polls the accelerometer port at a fixed interval and forwards each sample
/// over the channel until removed. Release is guaranteed on drop so a screen
/// teardown can never leave a dangling sampler behind.
pub struct SensorSubscription {
    running: Arc<AtomicBool>,
    handle: tokio::task::JoinHandle<()>,
}

impl SensorSubscription {
    /// Starts sampling the given source.
    #[must_use]
    pub fn start(
        source: Arc<dyn Accelerometer>,
        sample_interval: Duration,
        tx: mpsc::UnboundedSender<SensorReading>,
    ) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(sample_interval);

            while flag.load(Ordering::SeqCst) {
                ticker.tick().await;

                if !flag.load(Ordering::SeqCst) {
                    break;
                }

                match source.sample().await {
                    Ok(reading) => {
                        if tx.send(reading).is_err() {
                            debug!("Sensor channel closed");
                            break;
                        }
                    }
                    Err(e) => {
                        // One bad read does not end the subscription.
                        warn!(error = %e, "Sensor sample failed");
                    }
                }
            }

            debug!("Sensor sampling loop stopped");
        });

        Self { running, handle }
    }

    /// Returns whether the sampler is still delivering readings.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.running.load(Ordering::SeqCst) && !self.handle.is_finished()
    }

    /// Deregisters the subscription. No readings are delivered afterwards.
    pub fn remove(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.handle.abort();
    }
}

impl Drop for SensorSubscription {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockAccelerometer;

    const TICK: Duration = Duration::from_millis(5);

    #[tokio::test]
    async fn test_subscription_delivers_readings() {
        let source = Arc::new(MockAccelerometer::new());
        let (tx, mut rx) = mpsc::unbounded_channel();

        let subscription = SensorSubscription::start(source, TICK, tx);

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_ne!(first, second);
        assert!(subscription.is_active());

        subscription.remove();
    }

    #[tokio::test]
    async fn test_no_readings_after_remove() {
        let source = Arc::new(MockAccelerometer::new());
        let (tx, mut rx) = mpsc::unbounded_channel();

        let subscription = SensorSubscription::start(source, TICK, tx);
        let _ = rx.recv().await.unwrap();

        subscription.remove();
        while rx.try_recv().is_ok() {}

        tokio::time::sleep(TICK * 4).await;
        assert!(rx.try_recv().is_err());
        assert!(!subscription.is_active());
    }

    #[tokio::test]
    async fn test_drop_stops_sampling() {
        let source = Arc::new(MockAccelerometer::new());
        let taken_before;
        {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let _subscription = SensorSubscription::start(source.clone(), TICK, tx);
            let _ = rx.recv().await.unwrap();
            taken_before = source.samples_taken();
        }

        tokio::time::sleep(TICK * 4).await;
        // One in-flight sample may land between drop and abort, nothing more.
        assert!(source.samples_taken() <= taken_before + 1);
    }

    #[tokio::test]
    async fn test_closed_receiver_ends_loop() {
        let source = Arc::new(MockAccelerometer::new());
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        let subscription = SensorSubscription::start(source, TICK, tx);
        tokio::time::sleep(TICK * 4).await;

        assert!(!subscription.is_active());
    }
}
