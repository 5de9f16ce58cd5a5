//! Logging macros for ergonomic log message formatting.
//!
//! The level check happens before the message is formatted, so a disabled
//! `debug!` or `info!` costs one boolean load and nothing else. Each call
//! records its own source line and file.
//!
//! # Examples
//!
//! ```
//! use slogger::prelude::*;
//! use slogger::{debug, error, info};
//!
//! let logger: ThreadedLogger = ThreadedLogger::new(false, true);
//!
//! debug!(logger, "not formatted at all: {}", expensive());
//! info!(logger, "Server listening on port {}", 8080);
//! error!(logger, "Error code: {}", 500);
//!
//! assert_eq!(logger.pending(), 2);
//! # fn expensive() -> u32 { unreachable!() }
//! ```

/// Shorten a `file!()` path to start at its first `src/` directory, or
/// failing that its first `tests/` or `benches/` directory
///
/// ```
/// assert_eq!(slogger::strip_prefix("crates/net/src/socket.rs"), "src/socket.rs");
/// assert_eq!(slogger::strip_prefix("src/proto/tests/frame.rs"), "src/proto/tests/frame.rs");
/// assert_eq!(slogger::strip_prefix("main.rs"), "main.rs");
/// ```
pub fn strip_prefix(path: &'static str) -> &'static str {
    ["src/", "tests/", "benches/"]
        .iter()
        .find_map(|dir| component_start(path, dir))
        .map_or(path, |start| &path[start..])
}

/// Byte offset of the first whole path component named `dir`
fn component_start(path: &str, dir: &str) -> Option<usize> {
    path.match_indices(dir)
        .map(|(i, _)| i)
        .find(|&i| i == 0 || path.as_bytes()[i - 1] == b'/')
}

/// Emit every this many passes through an [`error_slow!`](crate::error_slow) call site
pub const ERROR_SLOW_INTERVAL: usize = 1000;

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use slogger::prelude::*;
/// # let logger: ThreadedLogger = ThreadedLogger::new(true, true);
/// use slogger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(
                line!(),
                $crate::strip_prefix(file!()),
                level,
                format!($($arg)+),
            );
        }
    }};
}

/// Log a debug-level message; the arguments are not evaluated when debug is off.
///
/// # Examples
///
/// ```
/// # use slogger::prelude::*;
/// # let logger: ThreadedLogger = ThreadedLogger::new(true, true);
/// use slogger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        let logger = &$logger;
        if logger.enable_debug() {
            logger.debug_msg(line!(), $crate::strip_prefix(file!()), format!($($arg)+));
        }
    }};
}

/// Log an info-level message; the arguments are not evaluated when info is off.
///
/// # Examples
///
/// ```
/// # use slogger::prelude::*;
/// # let logger: ThreadedLogger = ThreadedLogger::new(true, true);
/// use slogger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        let logger = &$logger;
        if logger.enable_info() {
            logger.info_msg(line!(), $crate::strip_prefix(file!()), format!($($arg)+));
        }
    }};
}

/// Log an error-level message. Errors cannot be disabled.
///
/// # Examples
///
/// ```
/// # use slogger::prelude::*;
/// # let logger: ThreadedLogger = ThreadedLogger::new(false, false);
/// use slogger::error;
/// error!(logger, "Failed to open device");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        let logger = &$logger;
        logger.error_msg(line!(), $crate::strip_prefix(file!()), format!($($arg)+));
    }};
}

/// Log an info-level message the first time this call site runs with info enabled.
#[macro_export]
macro_rules! info_once {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        static DONE: ::std::sync::atomic::AtomicBool = ::std::sync::atomic::AtomicBool::new(false);
        let logger = &$logger;
        if logger.enable_info() && !DONE.swap(true, ::std::sync::atomic::Ordering::Relaxed) {
            logger.info_msg(line!(), $crate::strip_prefix(file!()), format!($($arg)+));
        }
    }};
}

/// Log an error-level message the first time this call site runs.
#[macro_export]
macro_rules! error_once {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        static DONE: ::std::sync::atomic::AtomicBool = ::std::sync::atomic::AtomicBool::new(false);
        let logger = &$logger;
        if !DONE.swap(true, ::std::sync::atomic::Ordering::Relaxed) {
            logger.error_msg(line!(), $crate::strip_prefix(file!()), format!($($arg)+));
        }
    }};
}

/// Log an error-level message on the first pass through this call site and
/// then once every [`ERROR_SLOW_INTERVAL`](crate::ERROR_SLOW_INTERVAL) passes.
///
/// The first occurrence is always emitted, so a one-off error is never
/// hidden. For errors inside tight loops, where logging every occurrence
/// would flood the ring.
#[macro_export]
macro_rules! error_slow {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        static PASSES: ::std::sync::atomic::AtomicUsize = ::std::sync::atomic::AtomicUsize::new(0);
        let logger = &$logger;
        let pass = PASSES.fetch_add(1, ::std::sync::atomic::Ordering::Relaxed);
        if pass % $crate::ERROR_SLOW_INTERVAL == 0 {
            logger.error_msg(line!(), $crate::strip_prefix(file!()), format!($($arg)+));
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::strip_prefix;
    use crate::core::{LogLevel, Logger};
    use crate::loggers::ThreadedLogger;
    use std::cell::Cell;

    fn drain(logger: &ThreadedLogger<2048>) -> Vec<String> {
        std::iter::from_fn(|| logger.remove())
            .map(|r| r.into_text())
            .collect()
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_prefix("/home/me/proj/src/core/ring.rs"), "src/core/ring.rs");
        assert_eq!(strip_prefix("tests/integration_tests.rs"), "tests/integration_tests.rs");
        assert_eq!(strip_prefix("/build/src/gen/tests/x.rs"), "src/gen/tests/x.rs");
        assert_eq!(strip_prefix("src/foo/tests/bar.rs"), "src/foo/tests/bar.rs");
        assert_eq!(strip_prefix("/ci/tests/src/a.rs"), "src/a.rs");
        assert_eq!(strip_prefix("benches/x.rs"), "benches/x.rs");
        assert_eq!(strip_prefix("mysrc/a.rs"), "mysrc/a.rs");
        assert_eq!(strip_prefix("/w/mytests/tests/t.rs"), "tests/t.rs");
        assert_eq!(strip_prefix("lib.rs"), "lib.rs");
        assert_eq!(strip_prefix(file!()), "src/macros.rs");
    }

    #[test]
    fn test_disabled_debug_skips_formatting() {
        let logger: ThreadedLogger<2048> = ThreadedLogger::new(false, true);
        let evaluated = Cell::new(0);
        let costly = || {
            evaluated.set(evaluated.get() + 1);
            42
        };

        debug!(logger, "value {}", costly());
        assert_eq!(evaluated.get(), 0);

        info!(logger, "value {}", costly());
        assert_eq!(evaluated.get(), 1);
        assert_eq!(drain(&logger), vec!["value 42"]);
    }

    #[test]
    fn test_disabled_info_skips_formatting() {
        let logger: ThreadedLogger<2048> = ThreadedLogger::new(true, false);
        let evaluated = Cell::new(false);
        info!(logger, "{}", {
            evaluated.set(true);
            1
        });
        assert!(!evaluated.get());
        assert!(logger.remove().is_none());
    }

    #[test]
    fn test_log_macro_checks_level() {
        let logger: ThreadedLogger<2048> = ThreadedLogger::new(false, false);
        log!(logger, LogLevel::Debug, "hidden");
        log!(logger, LogLevel::Error, "shown {}", 1);
        assert_eq!(drain(&logger), vec!["shown 1"]);
    }

    #[test]
    fn test_macros_accept_trait_objects() {
        let logger: ThreadedLogger<2048> = ThreadedLogger::new(true, true);
        let dynamic: &dyn Logger = &logger;
        info!(dynamic, "via dyn");
        error!(*dynamic, "via deref");
        assert_eq!(drain(&logger), vec!["via dyn", "via deref"]);
    }

    #[test]
    fn test_once_macros() {
        let logger: ThreadedLogger<2048> = ThreadedLogger::new(true, true);
        for i in 0..5 {
            info_once!(logger, "info {}", i);
            error_once!(logger, "error {}", i);
        }
        assert_eq!(drain(&logger), vec!["info 0", "error 0"]);
    }

    #[test]
    fn test_info_once_waits_until_enabled() {
        let disabled: ThreadedLogger<2048> = ThreadedLogger::new(true, false);
        let enabled: ThreadedLogger<2048> = ThreadedLogger::new(true, true);
        for logger in [&disabled, &enabled, &enabled] {
            info_once!(logger, "ready");
        }
        assert!(disabled.remove().is_none());
        assert_eq!(drain(&enabled), vec!["ready"]);
    }

    #[test]
    #[deny(unused_imports)]
    fn test_macros_with_logger_already_in_scope() {
        let logger: ThreadedLogger<2048> = ThreadedLogger::new(true, true);
        let dynamic: &dyn Logger = &logger;
        log!(logger, LogLevel::Info, "log");
        debug!(dynamic, "debug");
        info!(logger, "info");
        error!(dynamic, "error");
        info_once!(logger, "info once");
        error_once!(dynamic, "error once");
        error_slow!(logger, "error slow");
        assert!(logger.enabled(LogLevel::Debug));
        assert_eq!(drain(&logger).len(), 7);
    }

    #[test]
    fn test_error_slow() {
        let logger: ThreadedLogger<2048> = ThreadedLogger::new(false, false);
        for i in 0..2500 {
            error_slow!(logger, "pass {}", i);
        }
        assert_eq!(drain(&logger), vec!["pass 0", "pass 1000", "pass 2000"]);
    }
}
