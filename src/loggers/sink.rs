//! Output sinks for direct loggers
//!
//! A file sink is also the single-writer token for its path: the file is
//! locked exclusively for as long as the sink lives, and a second open of the
//! same path fails instead of interleaving two writers' lines.

use crate::core::{LoggerError, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub(crate) enum Sink {
    Console(io::Stdout),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    pub(crate) fn console() -> Self {
        Sink::Console(io::stdout())
    }

    /// Open `path` for writing, take the exclusive lock, then truncate
    ///
    /// Truncation happens only after the lock is held, so a rejected second
    /// writer leaves the first writer's file intact.
    pub(crate) fn open_file(path: &Path) -> Result<Self> {
        let display = path.display().to_string();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| LoggerError::sink_open(display.clone(), e))?;

        if let Err(e) = FileExt::try_lock_exclusive(&file) {
            if e.kind() == fs2::lock_contended_error().kind() {
                return Err(LoggerError::file_lock(display));
            }
            return Err(LoggerError::io_operation("locking log file", display, e));
        }

        file.set_len(0)
            .map_err(|e| LoggerError::io_operation("truncating log file", display, e))?;

        Ok(Sink::File {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    pub(crate) fn writer(writer: impl Write + Send + 'static) -> Self {
        Sink::Writer(Box::new(writer))
    }

    /// Write one rendered line, flushing straight away when `flush` is set
    pub(crate) fn write_line(&mut self, line: &str, flush: bool) -> io::Result<()> {
        match self {
            Sink::Console(stdout) => {
                let mut out = stdout.lock();
                out.write_all(line.as_bytes())?;
                if flush {
                    out.flush()?;
                }
            }
            Sink::File { writer, .. } => {
                writer.write_all(line.as_bytes())?;
                if flush {
                    writer.flush()?;
                }
            }
            Sink::Writer(writer) => {
                writer.write_all(line.as_bytes())?;
                if flush {
                    writer.flush()?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Console(stdout) => stdout.flush(),
            Sink::File { writer, .. } => writer.flush(),
            Sink::Writer(writer) => writer.flush(),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Sink::Console(_) => "console".to_string(),
            Sink::File { path, .. } => path.display().to_string(),
            Sink::Writer(_) => "writer".to_string(),
        }
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush {} on close: {}", self.describe(), e);
        }
        if let Sink::File { writer, .. } = self {
            let _ = FileExt::unlock(writer.get_ref());
        }
    }
}
