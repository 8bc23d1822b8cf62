//! Helpers for use with `#[serde(serialize_with = "...", deserialize_with = "...")]`.

pub mod duration;
