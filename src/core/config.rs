//! Logger configuration
//!
//! The whole configuration surface is two level switches and a sink
//! selector. It can be built in code or read from JSON:
//!
//! ```
//! use slogger::{LogOutput, LoggerConfig};
//!
//! let config = LoggerConfig::from_json(r#"{ "debug": true, "output": "console" }"#).unwrap();
//! assert!(config.debug);
//! assert!(config.info);
//! assert_eq!(config.output, LogOutput::Console);
//! ```

use super::error::{LoggerError, Result};
use crate::loggers::{DirectLogger, ThreadedLogger};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File written by `LogOutput::File` unless a path is configured
pub const DEFAULT_LOG_PATH: &str = "/var/log/slogger.log";

/// Where a direct logger renders its lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Console,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Emit DEBUG records
    pub debug: bool,
    /// Emit INFO records
    pub info: bool,
    pub output: LogOutput,
    /// Log file used when `output` is `file`
    pub path: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            info: true,
            output: LogOutput::Console,
            path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                path.display().to_string(),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output == LogOutput::File && self.path.as_os_str().is_empty() {
            return Err(LoggerError::config(
                "LoggerConfig",
                "file output selected but path is empty",
            ));
        }
        Ok(())
    }

    /// Open a direct logger rendering to the configured sink
    pub fn build_direct(&self) -> Result<DirectLogger> {
        self.validate()?;
        match self.output {
            LogOutput::Console => Ok(DirectLogger::console(self.debug, self.info)),
            LogOutput::File => DirectLogger::open_path(self.debug, self.info, &self.path),
        }
    }

    /// Create a deferred logger with the configured level switches
    pub fn build_threaded<const N: usize>(&self) -> ThreadedLogger<N> {
        ThreadedLogger::new(self.debug, self.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert!(!config.debug);
        assert!(config.info);
        assert_eq!(config.output, LogOutput::Console);
        assert_eq!(config.path, PathBuf::from(DEFAULT_LOG_PATH));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = LoggerConfig::from_json(r#"{ "output": "file", "path": "/tmp/x.log" }"#)
            .expect("valid config");
        assert!(!config.debug);
        assert!(config.info);
        assert_eq!(config.output, LogOutput::File);
        assert_eq!(config.path, PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = LoggerConfig::from_json(r#"{ "colour": true }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_output() {
        assert!(LoggerConfig::from_json(r#"{ "output": "syslog" }"#).is_err());
    }

    #[test]
    fn test_empty_file_path_invalid() {
        let config = LoggerConfig {
            output: LogOutput::File,
            path: PathBuf::new(),
            ..LoggerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = LoggerConfig {
            debug: true,
            ..LoggerConfig::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("\"output\":\"console\""));
        assert_eq!(LoggerConfig::from_json(&json).expect("parse"), config);
    }

    #[test]
    fn test_build_threaded_uses_flags() {
        use crate::core::Logger;

        let config = LoggerConfig {
            debug: true,
            info: false,
            ..LoggerConfig::default()
        };
        let logger: ThreadedLogger<16> = config.build_threaded();
        assert!(logger.enable_debug());
        assert!(!logger.enable_info());
    }
}
