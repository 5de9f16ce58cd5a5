//! # slogger
//!
//! Deferred logging for threads that must never block.
//!
//! A real-time thread logs into a [`ThreadedLogger`], which only moves the
//! record into a fixed-size lock-free ring. A [`DirectLogger`] owns the
//! console or log file; sub-loggers are attached to it and drained whenever
//! it is polled, usually by a [`Poller`] thread.
//!
//! ## Features
//!
//! - **Lock-free producer**: logging never takes a lock, allocates, or touches
//!   I/O; on a full ring it may spin while a concurrent poll moves the oldest
//!   record out
//! - **Bounded memory**: a full ring overwrites its oldest record
//! - **Single writer**: a log file is exclusively locked by one process
//! - **Cheap when off**: disabled levels skip message formatting
//!
//! ```
//! use slogger::prelude::*;
//! use slogger::{error, info};
//! use std::sync::Arc;
//!
//! let rt: Arc<ThreadedLogger> = Arc::new(ThreadedLogger::new(false, true));
//! let main_logger = DirectLogger::console(false, true);
//! main_logger.add(rt.clone());
//!
//! info!(rt, "stream {} started", 1);
//! error!(rt, "late packet");
//! main_logger.poll();
//! assert_eq!(rt.pending(), 0);
//! ```

pub mod core;
pub mod loggers;
pub mod macros;
pub mod time;
pub mod utils;

pub mod prelude {
    pub use crate::core::{
        LogLevel, LogOutput, LogRecord, Logger, LoggerConfig, LoggerError, LoggerMetrics, Result,
        SharedLogger,
    };
    pub use crate::loggers::{DirectLogger, DirectLoggerBuilder, Poller, ThreadedLogger};
    pub use crate::time::{TaiTime, Timeout, Timer};
}

pub use crate::core::{
    LogLevel, LogOutput, LogRecord, Logger, LoggerConfig, LoggerError, LoggerMetrics, Result, Ring,
    SharedLogger, DEFAULT_LOG_PATH, DEFAULT_RING_CAPACITY,
};
pub use loggers::{
    format_line, DirectLogger, DirectLoggerBuilder, Poller, ThreadedLogger, DEFAULT_POLL_INTERVAL,
    DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use macros::{strip_prefix, ERROR_SLOW_INTERVAL};
pub use time::{TaiTime, Timeout, Timer};
