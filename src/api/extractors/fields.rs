//! Serde helpers for request fields.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Reads a field whose `null` or wrongly typed value counts as absent.
///
/// The field falls back to `T::default()`, so the `validator` length rule
/// reports it with the same message as a missing key.
pub fn or_missing<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
