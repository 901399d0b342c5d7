//! Tri-state serde support for overwrite fields
//!
//! An update field typed `Option<Option<T>>` reads as:
//! - absent key → `None` (keep the current value)
//! - explicit `null` → `Some(None)` (clear the value)
//! - a value → `Some(Some(v))` (replace the value)
//!
//! Use as `#[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Deserialize a present key, mapping `null` to `Some(None)`
///
/// # Errors
/// Propagates the inner deserializer error.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Serialize `Some(None)` as `null`; `None` is expected to be skipped
///
/// # Errors
/// Propagates the inner serializer error.
#[allow(clippy::ref_option)]
pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_none(),
    }
}
