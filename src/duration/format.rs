use std::fmt;

use super::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;
const NANOS_PER_DAY: u64 = 24 * NANOS_PER_HOUR;

/// Formats a duration in its canonical form, such as `8d8h8m8s8ms8µs8ns`.
///
/// Units are written largest first, zero-valued units are left out, and a zero duration is
/// written as `0s`. Negative durations get a leading `-`, so the output can always be read
/// back with [`parse_duration`](super::parse_duration).
pub fn format_duration(duration: Duration) -> String {
    duration.to_string()
}

/// Formats a duration using a single coarse unit (or days and hours), truncating the rest.
///
/// Meant for display only: `1d 5h`, `3h`, `42m`, `59s`, `800ms`, `3µs`, `12ns`.
/// Negative durations are displayed as their magnitude with a leading `-` (eg. `-5m`), the same
/// way as the canonical form.
pub fn format_duration_simplified(duration: Duration) -> String {
    duration.simplified().to_string()
}

pub(super) fn write_canonical(f: &mut fmt::Formatter<'_>, duration: Duration) -> fmt::Result {
    let nanos = duration.unsigned_abs();
    if nanos == 0 {
        return f.write_str("0s");
    }
    if duration.is_negative() {
        f.write_str("-")?;
    }

    let secs = nanos / NANOS_PER_SEC;
    let subsec = nanos % NANOS_PER_SEC;
    let components = [
        (secs / 86_400, "d"),
        (secs / 3_600 % 24, "h"),
        (secs / 60 % 60, "m"),
        (secs % 60, "s"),
        (subsec / NANOS_PER_MILLI, "ms"),
        (subsec / NANOS_PER_MICRO % 1_000, "µs"),
        (subsec % 1_000, "ns"),
    ];

    for (value, unit) in components {
        if value != 0 {
            write!(f, "{value}{unit}")?;
        }
    }

    Ok(())
}

/// Displays a [`Duration`] using a single coarse unit, see [`Duration::simplified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simplified(pub(super) Duration);

impl fmt::Display for Simplified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0.unsigned_abs();
        if self.0.is_negative() {
            f.write_str("-")?;
        }

        match nanos {
            _ if nanos > NANOS_PER_DAY => write!(
                f,
                "{0}d {1}h",
                nanos / NANOS_PER_DAY,
                nanos % NANOS_PER_DAY / NANOS_PER_HOUR
            ),
            _ if nanos > NANOS_PER_HOUR => write!(f, "{0}h", nanos / NANOS_PER_HOUR),
            _ if nanos > NANOS_PER_MIN => write!(f, "{0}m", nanos / NANOS_PER_MIN),
            _ if nanos > NANOS_PER_SEC => write!(f, "{0}s", nanos / NANOS_PER_SEC),
            _ if nanos > NANOS_PER_MILLI => write!(f, "{0}ms", nanos / NANOS_PER_MILLI),
            _ if nanos > NANOS_PER_MICRO => write!(f, "{0}µs", nanos / NANOS_PER_MICRO),
            _ => write!(f, "{nanos}ns"),
        }
    }
}
