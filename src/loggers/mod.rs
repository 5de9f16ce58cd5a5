//! Logger implementations

pub mod direct;
pub mod poller;
mod sink;
pub mod threaded;

pub use direct::{format_line, DirectLogger, DirectLoggerBuilder};
pub use poller::{Poller, DEFAULT_POLL_INTERVAL, DEFAULT_SHUTDOWN_TIMEOUT};
pub use threaded::ThreadedLogger;

// Re-export the capability for convenience
pub use crate::core::{Logger, SharedLogger};
