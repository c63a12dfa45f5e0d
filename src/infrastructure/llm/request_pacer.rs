use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Enforces a minimum interval between outbound provider calls.
///
/// One pacer instance is shared (via `Arc`) by every provider client, so the
/// interval is global across providers rather than per-provider. The lock is
/// held across the sleep so concurrent callers queue up instead of racing the
/// timestamp.
pub struct RequestPacer {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Sleeps until the configured interval since the previous call has
    /// elapsed, then records this call.
    pub async fn pace(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn given_rapid_calls_when_pacing_then_interval_enforced() {
        let pacer = RequestPacer::new(Duration::from_millis(50));
        let start = Instant::now();

        pacer.pace().await;
        pacer.pace().await;

        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn given_first_call_when_pacing_then_no_delay() {
        let pacer = RequestPacer::new(Duration::from_secs(10));
        let start = Instant::now();

        pacer.pace().await;

        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
