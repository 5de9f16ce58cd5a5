//! Clocks, deadlines and TAI timestamps

pub mod tai;
pub mod timeout;
pub mod timer;

pub use tai::{now as tai_now, TaiTime, TAI_UTC_OFFSET_SECS};
pub use timeout::Timeout;
#[cfg(unix)]
pub use timer::MonotonicRawTimer;
pub use timer::{ManualTimer, SteadyTimer, Timer, NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_SEC};
