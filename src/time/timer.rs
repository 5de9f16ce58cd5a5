//! Monotonic time sources

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

pub const NANOS_PER_MICRO: u64 = 1_000;
pub const NANOS_PER_MILLI: u64 = 1_000_000;
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// A monotonic clock read in nanoseconds from an arbitrary origin
///
/// Readings from one timer are comparable with each other, never with
/// readings from another timer.
pub trait Timer: Send + Sync {
    fn now_ns(&self) -> u64;

    fn now_us(&self) -> u64 {
        self.now_ns() / NANOS_PER_MICRO
    }

    fn now_ms(&self) -> u64 {
        self.now_ns() / NANOS_PER_MILLI
    }

    fn now_secs(&self) -> u64 {
        self.now_ns() / NANOS_PER_SEC
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
const RAW_CLOCK: libc::clockid_t = libc::CLOCK_MONOTONIC_RAW;
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
const RAW_CLOCK: libc::clockid_t = libc::CLOCK_MONOTONIC;

/// Hardware monotonic clock, not slewed by NTP (`CLOCK_MONOTONIC_RAW`)
///
/// Falls back to `CLOCK_MONOTONIC` where the raw clock does not exist.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicRawTimer;

#[cfg(unix)]
impl Timer for MonotonicRawTimer {
    fn now_ns(&self) -> u64 {
        // SAFETY: timespec is plain old data; all-zero is a valid value.
        let mut now: libc::timespec = unsafe { std::mem::zeroed() };
        // SAFETY: `now` is a valid, exclusively borrowed out-parameter.
        let rc = unsafe { libc::clock_gettime(RAW_CLOCK, &mut now) };
        debug_assert_eq!(rc, 0, "clock_gettime failed");
        (now.tv_sec as u64) * NANOS_PER_SEC + now.tv_nsec as u64
    }
}

/// The standard library's steady clock, counted from the timer's creation
#[derive(Debug, Clone, Copy)]
pub struct SteadyTimer {
    origin: Instant,
}

impl SteadyTimer {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SteadyTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for SteadyTimer {
    fn now_ns(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// A clock that only moves when told to, for deterministic tests
///
/// ```
/// use slogger::time::{ManualTimer, Timer};
/// use std::time::Duration;
///
/// let timer = ManualTimer::new(1_000);
/// timer.advance(Duration::from_micros(2));
/// assert_eq!(timer.now_ns(), 3_000);
/// ```
#[derive(Debug, Default)]
pub struct ManualTimer {
    now_ns: AtomicU64,
}

impl ManualTimer {
    pub fn new(start_ns: u64) -> Self {
        Self {
            now_ns: AtomicU64::new(start_ns),
        }
    }

    pub fn set(&self, now_ns: u64) {
        self.now_ns.store(now_ns, Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.now_ns.fetch_add(by, Ordering::SeqCst);
    }
}

impl Timer for ManualTimer {
    fn now_ns(&self) -> u64 {
        self.now_ns.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions_truncate() {
        let timer = ManualTimer::new(3 * NANOS_PER_SEC + 999_999_999);
        assert_eq!(timer.now_us(), 3_999_999);
        assert_eq!(timer.now_ms(), 3_999);
        assert_eq!(timer.now_secs(), 3);
    }

    #[test]
    fn test_steady_timer_is_monotonic() {
        let timer = SteadyTimer::new();
        let a = timer.now_ns();
        std::thread::sleep(Duration::from_millis(2));
        let b = timer.now_ns();
        assert!(b > a);
        assert!(b - a >= 2 * NANOS_PER_MILLI);
    }

    #[cfg(unix)]
    #[test]
    fn test_raw_timer_is_monotonic() {
        let timer = MonotonicRawTimer;
        let a = timer.now_ns();
        std::thread::sleep(Duration::from_millis(2));
        let b = timer.now_ns();
        assert!(a > 0);
        assert!(b > a);
    }

    #[test]
    fn test_timers_behind_trait_object() {
        let timers: Vec<Box<dyn Timer>> =
            vec![Box::new(SteadyTimer::new()), Box::new(ManualTimer::new(5))];
        for timer in &timers {
            let first = timer.now_ns();
            assert!(timer.now_ns() >= first);
        }
    }
}
