use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Simple counter used to log the amount of Riot API requests performed.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    count: AtomicU64,
}

impl RequestMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            count: AtomicU64::new(0),
        })
    }

    pub fn inc(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn log_summary(&self) {
        let total = self.count();
        let elapsed = self.start.elapsed().as_secs_f64();
        tracing::info!("📊 {} requests executed in {:.2}s", total, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inc_increases_count() {
        let metrics = RequestMetrics::new();
        metrics.inc();
        metrics.inc();

        assert_eq!(metrics.count(), 2);
    }
}
