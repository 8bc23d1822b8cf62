//! Human-readable durations and relative time expressions.
//!
//! Durations are signed nanosecond counts written as a sequence of magnitude and unit pairs,
//! such as `1h30m`, `-1.5d` or `8d8h8m8s8ms8µs8ns`. Time expressions (`now`, `yesterday`,
//! `-10d`, `05-01`, `2021-05-01`, or a full RFC 3339 timestamp) are resolved against a
//! reference instant.
//!
//! ```
//! use timeutil::{parse_duration, format_duration, Duration};
//!
//! let duration = parse_duration("1.5h").unwrap();
//! assert_eq!(duration, Duration::MINUTE * 90);
//! assert_eq!(format_duration(duration), "1h30m");
//! ```

pub mod duration;
pub mod error;
pub mod expr;
pub mod serde_utils;

pub use crate::duration::{format_duration, format_duration_simplified, parse_duration, Duration};
pub use crate::error::{Error, ErrorKind};
pub use crate::expr::{parse_expression, parse_expression_now};

pub type Result<T, E = Error> = std::result::Result<T, E>;
