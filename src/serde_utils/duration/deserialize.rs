use std::fmt;

use serde::de::{self, Deserializer, Visitor};

use crate::Duration;

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a duration string (eg. `1h30m`), or an integer number of nanoseconds")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Duration::from_nanos(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let Ok(value) = i64::try_from(value) else {
            return Err(de::Error::invalid_value(de::Unexpected::Unsigned(value), &self));
        };
        self.visit_i64(value)
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_str(value.as_str())
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        crate::parse_duration(value).map_err(|err| {
            de::Error::invalid_value(de::Unexpected::Str(value), &err.to_string().as_str())
        })
    }
}

/// Deserializes either a duration string or an integer number of nanoseconds into a [`Duration`].
///
/// Strings follow the format accepted by [`parse_duration`](crate::parse_duration).
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DurationVisitor)
}

/// Same as `deserialize`, but parses into an `Option` instead, allowing the field to be missing.
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    struct DurationOptVisitor;

    impl<'de> Visitor<'de> for DurationOptVisitor {
        type Value = Option<Duration>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            DurationVisitor.expecting(formatter)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserialize(deserializer).map(Some)
        }
    }

    deserializer.deserialize_option(DurationOptVisitor)
}
