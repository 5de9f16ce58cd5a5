//! International Atomic Time (TAI) timestamps
//!
//! A [`TaiTime`] is a count of seconds and nanoseconds on the TAI scale.
//! Its text form is `<seconds>:<nanoseconds>`, e.g. `1700000037:250`.

use super::timer::{NANOS_PER_MILLI, NANOS_PER_SEC};
use crate::core::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const MILLIS_PER_SEC: u64 = 1_000;

/// Seconds TAI runs ahead of UTC (fixed since 2017-01-01)
pub const TAI_UTC_OFFSET_SECS: u64 = 37;

/// A TAI instant or span; `nanos` is always below one second
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaiTime {
    secs: u64,
    nanos: u32,
}

impl TaiTime {
    pub const ZERO: TaiTime = TaiTime { secs: 0, nanos: 0 };

    /// Build from parts, carrying whole seconds out of `nanos`
    ///
    /// ```
    /// use slogger::time::TaiTime;
    ///
    /// let t = TaiTime::new(1, 2_500_000_000);
    /// assert_eq!((t.secs(), t.subsec_nanos()), (3, 500_000_000));
    /// ```
    pub fn new(secs: u64, nanos: u64) -> Self {
        Self {
            secs: secs.saturating_add(nanos / NANOS_PER_SEC),
            nanos: (nanos % NANOS_PER_SEC) as u32,
        }
    }

    pub fn from_nanos(nanos: u64) -> Self {
        Self::new(0, nanos)
    }

    pub fn secs(&self) -> u64 {
        self.secs
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    pub fn as_secs(&self) -> u64 {
        self.secs
    }

    pub fn as_millis(&self) -> u64 {
        self.secs
            .saturating_mul(MILLIS_PER_SEC)
            .saturating_add(u64::from(self.nanos) / NANOS_PER_MILLI)
    }

    pub fn as_nanos(&self) -> u128 {
        u128::from(self.secs) * u128::from(NANOS_PER_SEC) + u128::from(self.nanos)
    }

    /// Parse the `<seconds>:<nanoseconds>` form
    ///
    /// Both fields must be non-empty runs of ASCII digits. A nanosecond
    /// field of one second or more is carried into the seconds.
    pub fn parse(text: &str) -> Option<Self> {
        let (secs, nanos) = text.split_once(':')?;
        Some(Self::new(parse_digits(secs)?, parse_digits(nanos)?))
    }
}

fn parse_digits(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// The current TAI time, derived from the system clock
pub fn now() -> TaiTime {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO);
    TaiTime::from(since_epoch) + TaiTime::new(TAI_UTC_OFFSET_SECS, 0)
}

impl Add for TaiTime {
    type Output = TaiTime;

    fn add(self, rhs: TaiTime) -> TaiTime {
        // Both nanos are below 1e9, so their sum carries at most one second
        TaiTime::new(
            self.secs.saturating_add(rhs.secs),
            u64::from(self.nanos) + u64::from(rhs.nanos),
        )
    }
}

impl Add<Duration> for TaiTime {
    type Output = TaiTime;

    fn add(self, rhs: Duration) -> TaiTime {
        self + TaiTime::from(rhs)
    }
}

impl From<Duration> for TaiTime {
    fn from(duration: Duration) -> Self {
        Self {
            secs: duration.as_secs(),
            nanos: duration.subsec_nanos(),
        }
    }
}

impl From<TaiTime> for Duration {
    fn from(time: TaiTime) -> Self {
        Duration::new(time.secs, time.nanos)
    }
}

impl fmt::Display for TaiTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.secs, self.nanos)
    }
}

impl FromStr for TaiTime {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LoggerError::invalid_timestamp(s))
    }
}

impl Serialize for TaiTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaiTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
