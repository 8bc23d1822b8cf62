//! (De)serializes a [`Duration`](crate::Duration) as its human-readable canonical form.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use timeutil::Duration;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Retry {
//!     #[serde(serialize_with = "timeutil::serde_utils::duration::serialize_opt")]
//!     #[serde(deserialize_with = "timeutil::serde_utils::duration::deserialize_opt")]
//!     #[serde(default)]
//!     timeout: Option<Duration>,
//! }
//! ```

mod deserialize;
mod serialize;

pub use self::deserialize::*;
pub use self::serialize::*;
