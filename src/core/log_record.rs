//! Log record structure

use super::log_level::LogLevel;
use std::borrow::Cow;

/// One emitted log line, captured at the call site with its text already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    line: u32,
    file: &'static str,
    level: LogLevel,
    text: String,
}

impl LogRecord {
    #[inline]
    pub fn new(line: u32, file: &'static str, level: LogLevel, text: String) -> Self {
        Self {
            line,
            file,
            level,
            text,
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Text with newlines, carriage returns and tabs escaped
    ///
    /// Prevents a message from forging additional log lines when rendered.
    /// Borrows when there is nothing to escape, which is the common case.
    pub fn escaped_text(&self) -> Cow<'_, str> {
        if !self.text.contains(&['\n', '\r', '\t'][..]) {
            return Cow::Borrowed(&self.text);
        }
        Cow::Owned(
            self.text
                .replace('\n', "\\n")
                .replace('\r', "\\r")
                .replace('\t', "\\t"),
        )
    }
}
