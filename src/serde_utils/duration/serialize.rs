use serde::ser::Serializer;

use crate::Duration;

/// Serializes a [`Duration`] into its canonical string form (eg. `1h30m`).
pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Same as `serialize`, but serializes an `Option<Duration>` instead, allowing the field to be missing.
pub fn serialize_opt<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serialize(value, serializer),
        None => serializer.serialize_none(),
    }
}
