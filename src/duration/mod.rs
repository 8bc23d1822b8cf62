mod format;
mod lexer;
mod parse;

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::serde_utils;

pub use self::format::{format_duration, format_duration_simplified, Simplified};
pub use self::parse::parse_duration;

/// Supported unit symbols, along with how many nanoseconds one unit is worth.
///
/// Days are always 24 hours and weeks are always 7 days.
pub const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000), // U+00B5 MICRO SIGN
    ("μs", 1_000), // U+03BC GREEK SMALL LETTER MU
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60_000_000_000),
    ("h", 3_600_000_000_000),
    ("d", 86_400_000_000_000),
    ("w", 604_800_000_000_000),
];

/// Returns the number of nanoseconds in one `symbol`, if it is a known unit.
pub fn unit_scale(symbol: &str) -> Option<u64> {
    UNITS
        .iter()
        .find(|(unit, _)| *unit == symbol)
        .map(|(_, scale)| *scale)
}

/// A signed span of time, with nanosecond precision.
///
/// Its textual form (see [`parse_duration`] and [`format_duration`]) is also what gets
/// serialized, rather than the raw nanosecond count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);
    pub const NANOSECOND: Duration = Duration(1);
    pub const MICROSECOND: Duration = Duration(1_000);
    pub const MILLISECOND: Duration = Duration(1_000_000);
    pub const SECOND: Duration = Duration(1_000_000_000);
    pub const MINUTE: Duration = Duration(60_000_000_000);
    pub const HOUR: Duration = Duration(3_600_000_000_000);
    pub const DAY: Duration = Duration(86_400_000_000_000);
    pub const WEEK: Duration = Duration(604_800_000_000_000);
    pub const MIN: Duration = Duration(i64::MIN);
    pub const MAX: Duration = Duration(i64::MAX);

    pub const fn from_nanos(nanos: i64) -> Duration {
        Duration(nanos)
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The magnitude of this duration in nanoseconds (never overflows, even for [`Duration::MIN`]).
    pub const fn unsigned_abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    pub fn checked_add(self, rhs: Duration) -> Option<Duration> {
        self.0.checked_add(rhs.0).map(Duration)
    }

    pub fn checked_sub(self, rhs: Duration) -> Option<Duration> {
        self.0.checked_sub(rhs.0).map(Duration)
    }

    pub fn checked_neg(self) -> Option<Duration> {
        self.0.checked_neg().map(Duration)
    }

    /// Returns a value displaying this duration using a single, coarse unit (eg. `3d 4h`, `12m`).
    pub fn simplified(self) -> Simplified {
        Simplified(self)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Duration {
        Duration(self.0 * rhs)
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration(-self.0)
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_canonical(f, *self)
    }
}

impl From<Duration> for chrono::Duration {
    fn from(value: Duration) -> Self {
        chrono::Duration::nanoseconds(value.0)
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = Error;

    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        i64::try_from(value.as_nanos())
            .map(Duration)
            .map_err(|_| Error::Overflow {
                input: format!("{value:?}"),
            })
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = std::num::TryFromIntError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        u64::try_from(value.0).map(std::time::Duration::from_nanos)
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde_utils::duration::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_utils::duration::deserialize(deserializer)
    }
}
