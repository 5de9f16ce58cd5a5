//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod ring;

pub use config::{LogOutput, LoggerConfig, DEFAULT_LOG_PATH};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, SharedLogger};
pub use metrics::LoggerMetrics;
pub use ring::{Ring, DEFAULT_RING_CAPACITY};
