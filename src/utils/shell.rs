//! Running shell commands with their outcome logged

use crate::core::{Logger, LoggerError, Result};
use crate::{error, info};
use std::process::Command;

/// What [`run_cmd`] does when the command fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOpt {
    /// Log the failure at info level and return it
    LogErrorAsWarning,
    /// Log the failure at error level, render it, and abort the process
    AbortOnError,
}

/// Run `cmd` through `sh -c`, logging the command line first
///
/// A command counts as failed if it cannot be spawned or exits unsuccessfully.
pub fn run_cmd(cmd: &str, logger: &dyn Logger, opt: RunOpt) -> Result<()> {
    info!(logger, "run_cmd: {}", cmd);

    let failure = match Command::new("sh").arg("-c").arg(cmd).status() {
        Ok(status) if status.success() => return Ok(()),
        Ok(status) => LoggerError::command_failed(cmd, status),
        Err(e) => LoggerError::io_operation("spawning command", cmd, e),
    };

    match opt {
        RunOpt::AbortOnError => {
            error!(logger, "failed to run cmd: {}: {}", cmd, failure);
            logger.poll();
            std::process::abort();
        }
        RunOpt::LogErrorAsWarning => {
            info!(logger, "failed to run cmd: {}: {}", cmd, failure);
            Err(failure)
        }
    }
}
