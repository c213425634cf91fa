//! Simulated network latency.
//!
//! Reads pass a cache key: the first read of a key waits, repeats return at
//! once. Writes pass no key, which forgets every cached key and always waits.

use dashmap::DashSet;
use std::time::Duration;

pub struct FakeNetwork {
    seen: DashSet<String>,
    max_latency: Duration,
}

impl FakeNetwork {
    pub fn new(max_latency: Duration) -> Self {
        Self {
            seen: DashSet::new(),
            max_latency,
        }
    }

    pub fn max_latency(&self) -> Duration {
        self.max_latency
    }

    pub fn is_cached(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Waits for a random delay in `[0, max_latency)` unless `key` was already seen.
    pub async fn simulate(&self, key: Option<&str>) {
        let fresh = match key {
            Some(key) => self.seen.insert(key.to_string()),
            None => {
                self.seen.clear();
                true
            }
        };

        if !fresh {
            return;
        }

        let max_ms = self.max_latency.as_millis() as u64;
        if max_ms == 0 {
            return;
        }

        let delay_ms = rand::random::<u64>() % max_ms;
        tracing::trace!("Simulating {}ms of network latency for {:?}", delay_ms, key);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
