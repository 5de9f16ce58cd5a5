//! Immediate logger that renders to the console or a file
//!
//! Besides rendering its own records, a [`DirectLogger`] can hold other
//! loggers and relay whatever they buffered each time it is polled.

use super::sink::Sink;
use crate::core::{
    LogLevel, LogOutput, LogRecord, Logger, LoggerConfig, LoggerError, LoggerMetrics, Result,
    SharedLogger, DEFAULT_LOG_PATH,
};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render a record as `<file>:<line>: [HH:MM:SS] LEVEL - message\n` (UTC)
pub fn format_line(record: &LogRecord, at: &DateTime<Utc>) -> String {
    format!(
        "{}:{}: [{}] {} - {}\n",
        record.file(),
        record.line(),
        at.format("%H:%M:%S"),
        record.level(),
        record.escaped_text()
    )
}

pub struct DirectLogger {
    debug: bool,
    info: bool,
    sink: Mutex<Sink>,
    poll_loggers: RwLock<Vec<SharedLogger>>,
    metrics: LoggerMetrics,
}

impl DirectLogger {
    /// Create a logger for `output`, aborting the process if the sink cannot be opened
    ///
    /// A process that cannot log is not allowed to carry on silently. Use
    /// [`open`](Self::open) to handle the failure instead.
    pub fn new(debug: bool, info: bool, output: LogOutput) -> Self {
        match Self::open(debug, info, output) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("[LOGGER FATAL] {}", e);
                std::process::abort();
            }
        }
    }

    /// Create a logger for `output`; file output goes to [`DEFAULT_LOG_PATH`]
    pub fn open(debug: bool, info: bool, output: LogOutput) -> Result<Self> {
        match output {
            LogOutput::Console => Ok(Self::console(debug, info)),
            LogOutput::File => Self::open_path(debug, info, DEFAULT_LOG_PATH),
        }
    }

    pub fn console(debug: bool, info: bool) -> Self {
        Self::with_sink(debug, info, Sink::console())
    }

    /// Truncate and lock `path` and log to it
    ///
    /// Fails with [`LoggerError::FileLockError`] while another logger holds
    /// the same file.
    pub fn open_path(debug: bool, info: bool, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let logger = Self::with_sink(debug, info, Sink::open_file(path)?);
        crate::info!(logger, "logging to {}", path.display());
        Ok(logger)
    }

    /// Log to an arbitrary writer
    pub fn with_writer(debug: bool, info: bool, writer: impl Write + Send + 'static) -> Self {
        Self::with_sink(debug, info, Sink::writer(writer))
    }

    fn with_sink(debug: bool, info: bool, sink: Sink) -> Self {
        Self {
            debug,
            info,
            sink: Mutex::new(sink),
            poll_loggers: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Attach a logger whose buffered records [`poll`](Logger::poll) relays
    ///
    /// Loggers are drained in the order they were attached.
    pub fn add(&self, logger: SharedLogger) {
        self.poll_loggers.write().push(logger);
    }

    /// Number of attached loggers
    pub fn attached(&self) -> usize {
        self.poll_loggers.read().len()
    }

    pub fn flush(&self) -> Result<()> {
        let mut sink = self.sink.lock();
        sink.flush()
            .map_err(|e| LoggerError::io_operation("flushing log sink", sink.describe(), e))
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    fn render(&self, record: &LogRecord) {
        let line = format_line(record, &Utc::now());
        let mut sink = self.sink.lock();

        if let Err(e) = sink.write_line(&line, record.level().is_error()) {
            let failures = self.metrics.record_write_failure();
            // Alert on first failure and periodically thereafter
            if failures == 0 || (failures + 1) % 1000 == 0 {
                eprintln!(
                    "[LOGGER ERROR] Failed to write to {} ({} failures so far): {}",
                    sink.describe(),
                    failures + 1,
                    e
                );
            }
        }
    }
}

impl Logger for DirectLogger {
    fn log(&self, line: u32, file: &'static str, level: LogLevel, message: String) {
        self.metrics.record_logged();
        self.render(&LogRecord::new(line, file, level, message));
    }

    #[inline]
    fn enable_debug(&self) -> bool {
        self.debug
    }

    #[inline]
    fn enable_info(&self) -> bool {
        self.info
    }

    /// Relay every record buffered in the attached loggers
    fn poll(&self) {
        let loggers = self.poll_loggers.read();
        for logger in loggers.iter() {
            while let Some(record) = logger.remove() {
                self.metrics.record_relayed();
                self.render(&record);
            }
        }
    }

    fn name(&self) -> &str {
        "direct"
    }
}

/// Builder for constructing a DirectLogger with a fluent API
///
/// # Example
/// ```
/// use slogger::prelude::*;
/// use std::sync::Arc;
///
/// let rt_logger: Arc<ThreadedLogger> = Arc::new(ThreadedLogger::new(true, true));
///
/// let logger = DirectLogger::builder()
///     .debug(true)
///     .output(LogOutput::Console)
///     .poll_logger(rt_logger)
///     .build()
///     .unwrap();
/// assert_eq!(logger.attached(), 1);
/// ```
pub struct DirectLoggerBuilder {
    config: LoggerConfig,
    poll_loggers: Vec<SharedLogger>,
}

impl DirectLoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            poll_loggers: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.config.debug = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn info(mut self, enabled: bool) -> Self {
        self.config.info = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: LogOutput) -> Self {
        self.config.output = output;
        self
    }

    /// Log to `path`; implies file output
    #[must_use = "builder methods return a new value"]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = LogOutput::File;
        self.config.path = path.into();
        self
    }

    /// Attach a logger to be drained on every poll
    #[must_use = "builder methods return a new value"]
    pub fn poll_logger(mut self, logger: SharedLogger) -> Self {
        self.poll_loggers.push(logger);
        self
    }

    pub fn build(self) -> Result<DirectLogger> {
        let logger = self.config.build_direct()?;
        for sub in self.poll_loggers {
            logger.add(sub);
        }
        Ok(logger)
    }
}

impl Default for DirectLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectLogger {
    #[must_use]
    pub fn builder() -> DirectLoggerBuilder {
        DirectLoggerBuilder::new()
    }
}
