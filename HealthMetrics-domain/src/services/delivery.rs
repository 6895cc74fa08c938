use std::time::Duration;

use tracing::debug;

/// Delay applied before a successful result is handed back to the panel
pub const DEFAULT_CALCULATION_DELAY: Duration = Duration::from_millis(500);

/// Deferred completion of a calculation.
///
/// The delay only gives the panel time to show its calculating state. It runs on the
/// async timer and never blocks a thread; no computation depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredDelivery {
    delay: Duration,
}

impl Default for DeferredDelivery {
    fn default() -> Self {
        Self::new(DEFAULT_CALCULATION_DELAY)
    }
}

impl DeferredDelivery {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Deliver results without waiting
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Hand `value` back once the delay has elapsed
    pub async fn deliver<T: Send>(&self, value: T) -> T {
        if !self.delay.is_zero() {
            debug!("Deferring result delivery by {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_default_delivery_waits_half_a_second() {
        let delivery = DeferredDelivery::default();
        let started = Instant::now();

        let value = delivery.deliver(42).await;

        assert_eq!(value, 42);
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn test_immediate_delivery() {
        let delivery = DeferredDelivery::immediate();
        assert!(delivery.delay().is_zero());
        assert_eq!(tokio_test::block_on(delivery.deliver("done")), "done");
    }
}
