//! Deadlines measured against a [`Timer`]

use super::timer::Timer;
use std::time::Duration;

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// A deadline on a borrowed timer
///
/// ```
/// use slogger::time::{ManualTimer, Timeout};
/// use std::time::Duration;
///
/// let timer = ManualTimer::new(0);
/// let timeout = Timeout::new(&timer, Duration::from_micros(10));
/// assert!(!timeout.elapsed());
///
/// timer.advance(Duration::from_micros(15));
/// assert!(timeout.elapsed());
/// assert_eq!(timeout.time_left(), -5_000);
/// ```
#[derive(Debug)]
pub struct Timeout<'a, T: Timer + ?Sized> {
    timer: &'a T,
    deadline_ns: u64,
}

impl<'a, T: Timer + ?Sized> Timeout<'a, T> {
    pub fn new(timer: &'a T, duration: Duration) -> Self {
        let mut timeout = Self {
            timer,
            deadline_ns: 0,
        };
        timeout.reset(duration);
        timeout
    }

    /// Restart the countdown: the deadline becomes now + `duration`
    pub fn reset(&mut self, duration: Duration) {
        self.deadline_ns = self
            .timer
            .now_ns()
            .saturating_add(saturating_nanos(duration));
    }

    /// True once the timer has reached the deadline
    pub fn elapsed(&self) -> bool {
        self.timer.now_ns() >= self.deadline_ns
    }

    /// Nanoseconds until the deadline; zero or negative once it has passed
    pub fn time_left(&self) -> i64 {
        let left = i128::from(self.deadline_ns) - i128::from(self.timer.now_ns());
        left.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Time until the deadline, zero once it has passed
    pub fn remaining(&self) -> Duration {
        Duration::from_nanos(self.deadline_ns.saturating_sub(self.timer.now_ns()))
    }

    pub fn deadline_ns(&self) -> u64 {
        self.deadline_ns
    }
}
