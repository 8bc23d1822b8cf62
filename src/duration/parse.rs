use super::lexer::{self, MAGNITUDE_LIMIT};
use super::{unit_scale, Duration};
use crate::error::Error;
use crate::Result;

/// Parses a duration string, such as `300ms`, `-1.5h` or `2h45m`.
///
/// The accepted format is (expressed as a regular expression): `^[-+]?([0-9]*(\.[0-9]*)?[^0-9.]+)+$`,
/// where each unit must be one of `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m`, `h`, `d` (24 hours) or
/// `w` (7 days). A lone `0` (optionally signed) needs no unit.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let invalid = || Error::InvalidDuration {
        input: input.to_owned(),
    };
    let overflow = || Error::Overflow {
        input: input.to_owned(),
    };

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total = 0_u64;
    while !rest.is_empty() {
        if !matches!(rest.as_bytes()[0], b'.' | b'0'..=b'9') {
            return Err(invalid());
        }

        let before = rest.len();
        let (value, after_int) = lexer::leading_int(rest).map_err(|_| overflow())?;
        let has_int = after_int.len() != before;
        rest = after_int;

        let mut fraction = None;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (parsed, after_fraction) = lexer::leading_fraction(after_dot);
            if after_fraction.len() != after_dot.len() {
                fraction = Some(parsed);
            }
            rest = after_fraction;
        }

        // Rejects things like ".s" or "-.s".
        if !has_int && fraction.is_none() {
            return Err(invalid());
        }

        let unit_len = rest
            .find(|ch: char| ch == '.' || ch.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(Error::MissingUnit {
                input: input.to_owned(),
            });
        }
        let (unit, after_unit) = rest.split_at(unit_len);
        rest = after_unit;

        let scale = unit_scale(unit).ok_or_else(|| Error::UnknownUnit {
            unit: unit.to_owned(),
            input: input.to_owned(),
        })?;

        if value > MAGNITUDE_LIMIT / scale {
            return Err(overflow());
        }
        let mut token = value * scale;

        if let Some(fraction) = fraction.filter(|it| it.numerator > 0) {
            // Integer math would lose the nanoseconds of fractional hours, so scale in floating point.
            // The added amount is below `scale`, which keeps `token` far from wrapping.
            token += (fraction.numerator as f64 * (scale as f64 / fraction.scale)) as u64;
            if token > MAGNITUDE_LIMIT {
                return Err(overflow());
            }
        }

        total = total
            .checked_add(token)
            .filter(|total| *total <= MAGNITUDE_LIMIT)
            .ok_or_else(overflow)?;
    }

    if negative {
        // `total` is at most 2^63, whose cast wraps to `i64::MIN`, which negates to itself.
        return Ok(Duration::from_nanos((total as i64).wrapping_neg()));
    }

    i64::try_from(total)
        .map(Duration::from_nanos)
        .map_err(|_| overflow())
}
