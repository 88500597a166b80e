//! Fixed-delay request throttling
//!
//! A cooperative politeness mechanism, not an adaptive backoff: the delay is
//! the same whether the previous request succeeded or failed, and there is no
//! per-host or per-status differentiation.

use std::time::Duration;

/// Enforces a minimum delay between consecutive outbound requests
#[derive(Debug, Clone)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    /// Creates a throttle with the given fixed delay in milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Self {
            delay: Duration::from_millis(millis),
        }
    }

    /// The configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleeps for the configured delay
    pub async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}
