use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

use crate::duration::parse_duration;
use crate::error::Error;
use crate::Result;

const FORMAT_DATE: &str = "%Y-%m-%d";
const SHORT_DATE_LEN: usize = "01-02".len();
const DATE_LEN: usize = "2006-01-02".len();

/// Same as [`parse_expression`], using the current local time as the reference.
pub fn parse_expression_now(input: &str) -> Result<DateTime<Local>> {
    parse_expression(input, &Local::now())
}

/// Parses a time expression into the point in time it represents.
///
/// Relative expressions are resolved against `reference`, and the result is expressed in the
/// timezone of `reference`. The supported expressions are:
///
/// - `today`, `yesterday` and `tomorrow`: midnight on those days;
/// - `now`: the reference itself;
/// - `+duration` or `-duration` (eg. `-10d`): the reference shifted by that duration;
/// - `MM-DD` (eg. `11-14`): midnight on that day of the reference's year;
/// - `YYYY-MM-DD`: midnight on that date;
/// - anything else must be an RFC 3339 timestamp (eg. `2024-11-14T18:17:00+01:00`).
///
/// Surrounding whitespace is ignored.
pub fn parse_expression<Tz: TimeZone>(
    input: &str,
    reference: &DateTime<Tz>,
) -> Result<DateTime<Tz>> {
    let value = input.trim();
    if value.is_empty() {
        return Err(Error::NoTimeSpecified);
    }

    let out_of_range = || Error::OutOfRange {
        input: value.to_owned(),
    };
    let today = reference.date_naive();

    match value {
        "today" => return midnight(&reference.timezone(), today).ok_or_else(out_of_range),
        "yesterday" => {
            return (today.pred_opt())
                .and_then(|date| midnight(&reference.timezone(), date))
                .ok_or_else(out_of_range);
        }
        "tomorrow" => {
            return (today.succ_opt())
                .and_then(|date| midnight(&reference.timezone(), date))
                .ok_or_else(out_of_range);
        }
        "now" => return Ok(reference.clone()),
        _ => {}
    }

    if value.starts_with(['+', '-']) {
        let offset = parse_duration(value)?;
        return (reference.clone())
            .checked_add_signed(offset.into())
            .ok_or_else(out_of_range);
    }

    let date = match value.len() {
        // The year defaults to the reference's year.
        SHORT_DATE_LEN => Some(parse_date(
            &format!("{0:04}-{value}", reference.year()),
            value,
            &[2],
        )?),
        DATE_LEN => Some(parse_date(value, value, &[4, 7])?),
        _ => None,
    };

    if let Some(date) = date {
        return midnight(&reference.timezone(), date).ok_or_else(out_of_range);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&reference.timezone()))
        .map_err(|source| Error::InvalidDateOrTimestamp {
            input: value.to_owned(),
            source: Some(source),
        })
}

/// Parses `text` as a date, once `input` is known to be made of two-digit (four for the year)
/// fields separated by `-` at the `dashes` positions.
fn parse_date(text: &str, input: &str, dashes: &[usize]) -> Result<NaiveDate> {
    let well_formed = input.bytes().enumerate().all(|(idx, byte)| {
        if dashes.contains(&idx) {
            byte == b'-'
        } else {
            byte.is_ascii_digit()
        }
    });
    if !well_formed {
        return Err(Error::InvalidDateOrTimestamp {
            input: input.to_owned(),
            source: None,
        });
    }

    NaiveDate::parse_from_str(text, FORMAT_DATE).map_err(|source| Error::InvalidDateOrTimestamp {
        input: input.to_owned(),
        source: Some(source),
    })
}

/// The first instant of `date` in `tz`.
///
/// That is midnight, or its earliest occurrence when ambiguous. When midnight is skipped by a
/// DST transition, the day starts at the end of the gap.
fn midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    let start = date.and_hms_opt(0, 0, 0)?;
    (0..24 * 60)
        .filter_map(|minutes| start.checked_add_signed(chrono::Duration::minutes(minutes)))
        .take_while(|local| local.date() == date)
        .find_map(|local| tz.from_local_datetime(&local).earliest())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    use super::{parse_expression, parse_expression_now};
    use crate::error::ErrorKind;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 14, 18, 17, 0).unwrap()
    }

    fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
    }

    fn kind_of(input: &str) -> ErrorKind {
        match parse_expression(input, &reference()) {
            Ok(value) => panic!("expected {input:?} to fail, got {value}"),
            Err(err) => err.kind(),
        }
    }

    #[test]
    fn named_constants() {
        let reference = reference();
        assert_eq!(parse_expression("now", &reference), Ok(reference));
        assert_eq!(
            parse_expression("today", &reference),
            Ok(utc(2024, 11, 14, 0, 0))
        );
        assert_eq!(
            parse_expression("yesterday", &reference),
            Ok(utc(2024, 11, 13, 0, 0))
        );
        assert_eq!(
            parse_expression("tomorrow", &reference),
            Ok(utc(2024, 11, 15, 0, 0))
        );
    }

    #[test]
    fn constants_cross_month_and_year_boundaries() {
        let reference = utc(2024, 1, 1, 0, 30);
        assert_eq!(
            parse_expression("yesterday", &reference),
            Ok(utc(2023, 12, 31, 0, 0))
        );
        let reference = utc(2024, 2, 28, 23, 59);
        assert_eq!(
            parse_expression("tomorrow", &reference),
            Ok(utc(2024, 2, 29, 0, 0))
        );
    }

    #[test]
    fn relative_offsets() {
        let reference = reference();
        assert_eq!(
            parse_expression("-1h", &reference),
            Ok(utc(2024, 11, 14, 17, 17))
        );
        assert_eq!(
            parse_expression("+1d", &reference),
            Ok(utc(2024, 11, 15, 18, 17))
        );
        assert_eq!(
            parse_expression("-10d1.5h", &reference),
            Ok(utc(2024, 11, 4, 16, 47))
        );
        assert_eq!(parse_expression("+0", &reference), Ok(reference));
    }

    #[test]
    fn relative_offset_errors_come_from_the_duration_grammar() {
        assert_eq!(kind_of("-1x"), ErrorKind::UnknownUnit);
        assert_eq!(kind_of("+5"), ErrorKind::MissingUnit);
        assert_eq!(kind_of("-"), ErrorKind::InvalidDuration);
        assert_eq!(kind_of("+9223372036854775808ns"), ErrorKind::Overflow);
    }

    #[test]
    fn dates() {
        let reference = reference();
        assert_eq!(
            parse_expression("05-01", &reference),
            Ok(utc(2024, 5, 1, 0, 0))
        );
        assert_eq!(
            parse_expression("2021-05-01", &reference),
            Ok(utc(2021, 5, 1, 0, 0))
        );
        assert_eq!(
            parse_expression("02-29", &reference),
            Ok(utc(2024, 2, 29, 0, 0))
        );
    }

    #[test]
    fn invalid_dates() {
        assert_eq!(kind_of("13-01"), ErrorKind::InvalidDateOrTimestamp);
        assert_eq!(kind_of("2023-02-29"), ErrorKind::InvalidDateOrTimestamp);
        assert_eq!(kind_of("abcde"), ErrorKind::InvalidDateOrTimestamp);
        assert_eq!(kind_of("2021/05/01"), ErrorKind::InvalidDateOrTimestamp);
    }

    #[test]
    fn dates_need_zero_padded_fields() {
        assert_eq!(kind_of("2021- 5- 1"), ErrorKind::InvalidDateOrTimestamp);
        assert_eq!(kind_of("1- 01"), ErrorKind::InvalidDateOrTimestamp);
        assert_eq!(kind_of("5-1-1"), ErrorKind::InvalidDateOrTimestamp);
        assert_eq!(kind_of("+5-01"), ErrorKind::UnknownUnit);
        assert_eq!(kind_of("202-105-01"), ErrorKind::InvalidDateOrTimestamp);
        assert_eq!(kind_of("2021-05-1x"), ErrorKind::InvalidDateOrTimestamp);
        assert_eq!(kind_of("20210-5-01"), ErrorKind::InvalidDateOrTimestamp);

        let err = parse_expression("2021- 5- 1", &reference()).unwrap_err();
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(err.to_string(), r#"invalid date or timestamp "2021- 5- 1""#);
    }

    #[test]
    fn timestamps() {
        let reference = reference();
        assert_eq!(
            parse_expression("2021-05-01T10:30:00Z", &reference),
            Ok(utc(2021, 5, 1, 10, 30))
        );
        // Converted into the reference timezone, same instant.
        assert_eq!(
            parse_expression("2021-05-01T10:30:00+02:00", &reference),
            Ok(utc(2021, 5, 1, 8, 30))
        );
        assert_eq!(kind_of("???"), ErrorKind::InvalidDateOrTimestamp);
        assert_eq!(kind_of("2021-05-01 10:30"), ErrorKind::InvalidDateOrTimestamp);
    }

    #[test]
    fn blank_input() {
        assert_eq!(kind_of(""), ErrorKind::NoTimeSpecified);
        assert_eq!(kind_of("  \t\n"), ErrorKind::NoTimeSpecified);
    }

    #[test]
    fn input_is_trimmed() {
        let reference = reference();
        assert_eq!(parse_expression("  now \n", &reference), Ok(reference));
        assert_eq!(
            parse_expression(" 05-01 ", &reference),
            Ok(utc(2024, 5, 1, 0, 0))
        );
    }

    #[test]
    fn midnight_uses_the_reference_timezone() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        // 2024-11-14T18:17:00Z is already the 15th in UTC+9.
        let reference = reference().with_timezone(&tz);
        let today = parse_expression("today", &reference).unwrap();
        assert_eq!(today, tz.with_ymd_and_hms(2024, 11, 15, 0, 0, 0).unwrap());
        assert_eq!(today.offset(), &tz);

        let date = parse_expression("2021-05-01", &reference).unwrap();
        assert_eq!(date, tz.with_ymd_and_hms(2021, 5, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn out_of_range_results() {
        let reference = DateTime::<Utc>::MAX_UTC;
        assert_eq!(
            parse_expression("tomorrow", &reference).map_err(|err| err.kind()),
            Err(ErrorKind::OutOfRange)
        );
        assert_eq!(
            parse_expression("+1s", &reference).map_err(|err| err.kind()),
            Err(ErrorKind::OutOfRange)
        );
    }

    #[test]
    fn now_uses_the_wall_clock() {
        let before = chrono::Local::now();
        let now = parse_expression_now("now").unwrap();
        let after = chrono::Local::now();
        assert!(before <= now && now <= after);
    }
}
