//! Background thread that polls a logger on a fixed interval

use crate::core::{LoggerError, Result, SharedLogger};
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for poller cleanup (5 seconds)
///
/// This timeout is used when the poller is dropped without explicit shutdown.
/// For custom timeout control, use the `shutdown()` method instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Drives [`Logger::poll`](crate::Logger::poll) from a dedicated thread
///
/// The thread polls every `interval` and once more when shut down, so
/// records buffered before shutdown are still rendered.
///
/// # Example
///
/// ```
/// use slogger::prelude::*;
/// use slogger::info;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let rt_logger: Arc<ThreadedLogger> = Arc::new(ThreadedLogger::new(true, true));
/// let console = DirectLogger::console(true, true);
/// console.add(rt_logger.clone());
///
/// let mut poller = Poller::spawn(Arc::new(console), Duration::from_millis(10)).unwrap();
/// info!(rt_logger, "rendered by the poll thread");
/// assert!(poller.shutdown(Duration::from_secs(1)));
/// assert_eq!(rt_logger.pending(), 0);
/// ```
pub struct Poller {
    shutdown_tx: Option<Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Poller {
    pub fn spawn(logger: SharedLogger, interval: Duration) -> Result<Self> {
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);

        let handle = thread::Builder::new()
            .name("slogger-poll".to_string())
            .spawn(move || loop {
                let stop = match shutdown_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => false,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
                };

                Self::poll_isolated(&logger);

                if stop {
                    break;
                }
            })
            .map_err(|e| LoggerError::io_operation("spawning poll thread", "slogger-poll", e))?;

        Ok(Self {
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Poll once, keeping the thread alive if a logger panics
    fn poll_isolated(logger: &SharedLogger) {
        if let Err(panic_info) = catch_unwind(AssertUnwindSafe(|| logger.poll())) {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            eprintln!(
                "[LOGGER CRITICAL] Logger '{}' panicked during poll: {}. Polling continues.",
                logger.name(),
                panic_msg
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the thread after one final poll, waiting at most `timeout`
    ///
    /// Returns `true` if the thread finished within the timeout.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        // Closing the channel wakes the thread for its final poll
        drop(self.shutdown_tx.take());

        let Some(handle) = self.handle.take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Poll thread panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Poll thread did not finish within {:?}. \
                     Some records may not be rendered.",
                    timeout
                );
                return false;
            }

            // Small sleep to avoid busy-waiting
            thread::sleep(Duration::from_millis(1));
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
        }
    }
}
