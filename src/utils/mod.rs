//! Helpers shared by the programs that embed the logger

pub mod error_code;
pub mod shell;
pub mod strings;

pub use error_code::ErrorCode;
pub use shell::{run_cmd, RunOpt};
