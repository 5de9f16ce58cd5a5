//! Logger capability shared by immediate and deferred loggers

use super::{log_level::LogLevel, log_record::LogRecord};
use std::sync::Arc;

/// Shared handle to any logger, as held by a polling logger
pub type SharedLogger = Arc<dyn Logger>;

/// Leveled emission plus the two hooks that connect loggers to each other
///
/// A deferred logger overrides [`remove`](Logger::remove) to hand out what it
/// buffered; an aggregating logger overrides [`poll`](Logger::poll) to drain
/// the loggers attached to it.
///
/// The leveled helpers check the enablement flags, but by then the message
/// has already been formatted. Call sites should go through the
/// [`debug!`](crate::debug) and [`info!`](crate::info) macros, which check
/// the flag before formatting.
pub trait Logger: Send + Sync {
    /// Emit one record at `level`
    fn log(&self, line: u32, file: &'static str, level: LogLevel, message: String);

    fn enable_debug(&self) -> bool;

    fn enable_info(&self) -> bool;

    #[inline]
    fn debug_msg(&self, line: u32, file: &'static str, message: String) {
        if self.enable_debug() {
            self.log(line, file, LogLevel::Debug, message);
        }
    }

    #[inline]
    fn info_msg(&self, line: u32, file: &'static str, message: String) {
        if self.enable_info() {
            self.log(line, file, LogLevel::Info, message);
        }
    }

    #[inline]
    fn error_msg(&self, line: u32, file: &'static str, message: String) {
        self.log(line, file, LogLevel::Error, message);
    }

    /// Whether a record at `level` would be emitted
    fn enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Debug => self.enable_debug(),
            LogLevel::Info => self.enable_info(),
            LogLevel::Error => true,
        }
    }

    /// Drain attached loggers into this one; no-op unless overridden
    fn poll(&self) {}

    /// Hand out the oldest buffered record; `None` unless overridden
    fn remove(&self) -> Option<LogRecord> {
        None
    }

    fn name(&self) -> &str {
        "logger"
    }
}
