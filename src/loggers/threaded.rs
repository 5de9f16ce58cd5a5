//! Deferred logger for hard real-time threads
//!
//! One thread logs, another pulls the records out later. The logging side
//! only moves an already rendered record into a [`Ring`]: no formatting, no
//! I/O, no lock. Whoever calls [`Logger::remove`] (normally a
//! [`DirectLogger`](super::DirectLogger) it is attached to) does the
//! rendering on its own time.

use crate::core::{LogLevel, LogRecord, Logger, LoggerMetrics, Ring, DEFAULT_RING_CAPACITY};

/// A logger that buffers records for later retrieval
///
/// Only one thread may log through a given instance; records from a second
/// producer would interleave unpredictably. Give each real-time thread its
/// own `ThreadedLogger` and attach them all to one direct logger.
///
/// When more than `N` records are waiting, the oldest are overwritten and
/// counted in [`metrics`](Self::metrics).
pub struct ThreadedLogger<const N: usize = DEFAULT_RING_CAPACITY> {
    debug: bool,
    info: bool,
    ring: Ring<LogRecord, N>,
    metrics: LoggerMetrics,
}

impl<const N: usize> ThreadedLogger<N> {
    pub fn new(debug: bool, info: bool) -> Self {
        Self {
            debug,
            info,
            ring: Ring::new(),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Records waiting to be removed
    pub fn pending(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl<const N: usize> Logger for ThreadedLogger<N> {
    fn log(&self, line: u32, file: &'static str, level: LogLevel, message: String) {
        self.metrics.record_logged();
        if self.ring.add(LogRecord::new(line, file, level, message)).is_some() {
            self.metrics.record_overwritten();
        }
    }

    #[inline]
    fn enable_debug(&self) -> bool {
        self.debug
    }

    #[inline]
    fn enable_info(&self) -> bool {
        self.info
    }

    fn remove(&self) -> Option<LogRecord> {
        self.ring.remove()
    }

    fn name(&self) -> &str {
        "threaded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{debug, error, info};

    #[test]
    fn test_records_come_back_in_order() {
        let logger: ThreadedLogger = ThreadedLogger::new(true, true);
        debug!(logger, "first {}", 1);
        info!(logger, "second");
        error!(logger, "third");

        let levels: Vec<(LogLevel, String)> = std::iter::from_fn(|| logger.remove())
            .map(|r| (r.level(), r.into_text()))
            .collect();
        assert_eq!(
            levels,
            vec![
                (LogLevel::Debug, "first 1".to_string()),
                (LogLevel::Info, "second".to_string()),
                (LogLevel::Error, "third".to_string()),
            ]
        );
    }

    #[test]
    fn test_records_keep_call_site() {
        let logger: ThreadedLogger<4> = ThreadedLogger::new(false, false);
        let line = line!() + 1;
        error!(logger, "boom");

        let record = logger.remove().expect("one record");
        assert_eq!(record.line(), line);
        assert_eq!(record.file(), "src/loggers/threaded.rs");
    }

    #[test]
    fn test_disabled_levels_store_nothing() {
        let logger: ThreadedLogger<8> = ThreadedLogger::new(false, false);
        for i in 0..100 {
            debug!(logger, "debug {}", i);
            info!(logger, "info {}", i);
        }
        assert_eq!(logger.pending(), 0);
        assert!(logger.remove().is_none());
        assert_eq!(logger.metrics().total_logged(), 0);
    }

    #[test]
    fn test_overflow_counts_overwrites() {
        let logger: ThreadedLogger<4> = ThreadedLogger::new(true, true);
        for i in 0..10 {
            error!(logger, "msg {}", i);
        }

        assert_eq!(logger.pending(), 4);
        assert_eq!(logger.metrics().total_logged(), 10);
        assert_eq!(logger.metrics().overwritten_count(), 6);

        let texts: Vec<String> = std::iter::from_fn(|| logger.remove())
            .map(LogRecord::into_text)
            .collect();
        assert_eq!(texts, vec!["msg 6", "msg 7", "msg 8", "msg 9"]);
    }

    #[test]
    fn test_capacity() {
        let logger: ThreadedLogger = ThreadedLogger::new(true, true);
        assert_eq!(logger.capacity(), DEFAULT_RING_CAPACITY);
        assert_eq!(logger.name(), "threaded");
    }
}
