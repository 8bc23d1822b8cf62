use std::fmt;

/// The stable classification of an [`Error`].
///
/// Error messages are meant for humans; match on the kind instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed token sequence, or no tokens at all.
    InvalidDuration,
    /// Digits with no unit following them.
    MissingUnit,
    /// A unit that isn't in the unit table.
    UnknownUnit,
    /// The value doesn't fit in a signed 64-bit nanosecond count.
    Overflow,
    /// The expression was empty or blank.
    NoTimeSpecified,
    /// The expression looked like a date or a timestamp but could not be parsed as one.
    InvalidDateOrTimestamp,
    /// The resolved instant cannot be represented in the reference timezone.
    OutOfRange,
}

/// An error from parsing a duration or resolving a time expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidDuration {
        input: String,
    },
    MissingUnit {
        input: String,
    },
    UnknownUnit {
        unit: String,
        input: String,
    },
    Overflow {
        input: String,
    },
    NoTimeSpecified,
    InvalidDateOrTimestamp {
        input: String,
        /// Absent when the input was rejected before reaching `chrono` (eg. a one-digit month).
        source: Option<chrono::ParseError>,
    },
    OutOfRange {
        input: String,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidDuration { .. } => ErrorKind::InvalidDuration,
            Error::MissingUnit { .. } => ErrorKind::MissingUnit,
            Error::UnknownUnit { .. } => ErrorKind::UnknownUnit,
            Error::Overflow { .. } => ErrorKind::Overflow,
            Error::NoTimeSpecified => ErrorKind::NoTimeSpecified,
            Error::InvalidDateOrTimestamp { .. } => ErrorKind::InvalidDateOrTimestamp,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDuration { input } => {
                write!(f, "invalid duration {0}", quote(input))
            }
            Error::MissingUnit { input } => {
                write!(f, "missing unit in duration {0}", quote(input))
            }
            Error::UnknownUnit { unit, input } => {
                write!(
                    f,
                    "unknown unit {0} in duration {1}",
                    quote(unit),
                    quote(input)
                )
            }
            Error::Overflow { input } => {
                write!(f, "duration {0} is out of range", quote(input))
            }
            Error::NoTimeSpecified => write!(f, "no time specified"),
            Error::InvalidDateOrTimestamp { input, source } => {
                write!(f, "invalid date or timestamp {0}", quote(input))?;
                match source {
                    Some(source) => write!(f, ": {source}"),
                    None => Ok(()),
                }
            }
            Error::OutOfRange { input } => {
                write!(f, "time expression {0} resolves out of range", quote(input))
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidDateOrTimestamp {
                source: Some(source),
                ..
            } => Some(source),
            _ => None,
        }
    }
}

/// Wraps the input in double quotes so it can be safely embedded in an error message.
///
/// Control characters and non-ASCII characters are written byte-per-byte as `\xHH`,
/// and `"` and `\` are backslash-escaped.
pub(crate) fn quote(input: &str) -> String {
    let mut quoted = String::with_capacity(input.len() + 2);
    quoted.push('"');
    for ch in input.chars() {
        match ch {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(ch);
            }
            ' '..='~' => quoted.push(ch),
            _ => {
                let mut buf = [0; 4];
                for byte in ch.encode_utf8(&mut buf).bytes() {
                    quoted.push_str(&format!("\\x{byte:02x}"));
                }
            }
        }
    }
    quoted.push('"');
    quoted
}
