//! Logger metrics for observability
//!
//! Counters for monitoring the deferred pipeline: how much was emitted,
//! how much was lost to ring overwrites, how much a poller relayed, and
//! how often the output sink failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// All counters are relaxed atomics; they are cheap enough to bump from a
/// producer's hot path.
///
/// # Example
///
/// ```
/// use slogger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_logged();
/// metrics.record_overwritten();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.overwritten_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Records accepted by `log`
    total_logged: AtomicU64,

    /// Records evicted from a ring before anyone removed them
    overwritten: AtomicU64,

    /// Records pulled out of sub-loggers by `poll`
    relayed: AtomicU64,

    /// Lines the output sink failed to take
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            overwritten: AtomicU64::new(0),
            relayed: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn overwritten_count(&self) -> u64 {
        self.overwritten.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn relayed_count(&self) -> u64 {
        self.relayed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) {
        self.total_logged.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an overwrite, returning the previous count
    #[inline]
    pub fn record_overwritten(&self) -> u64 {
        self.overwritten.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_relayed(&self) {
        self.relayed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a sink failure, returning the previous count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Percentage of logged records lost to overwrites
    pub fn drop_rate(&self) -> f64 {
        let logged = self.total_logged();
        if logged == 0 {
            return 0.0;
        }
        (self.overwritten_count() as f64 / logged as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.overwritten.store(0, Ordering::Relaxed);
        self.relayed.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.overwritten_count(), 0);
        assert_eq!(metrics.relayed_count(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_overwritten(), 0);
        assert_eq!(metrics.record_overwritten(), 1);
        assert_eq!(metrics.record_write_failure(), 0);
        assert_eq!(metrics.overwritten_count(), 2);
        assert_eq!(metrics.write_failures(), 1);
    }

    #[test]
    fn test_drop_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.drop_rate(), 0.0);

        for _ in 0..100 {
            metrics.record_logged();
        }
        for _ in 0..10 {
            metrics.record_overwritten();
        }

        let rate = metrics.drop_rate();
        assert!((9.9..=10.1).contains(&rate), "Drop rate was {}", rate);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_logged();
        metrics.record_relayed();
        metrics.reset();
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.relayed_count(), 0);
    }
}
