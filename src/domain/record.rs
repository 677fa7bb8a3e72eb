//! Common shape of every stored record.

use serde::{de::DeserializeOwned, Serialize};

/// A record with a unique, stable string id.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Prefix prepended to generated ids
    const ID_PREFIX: &'static str;

    /// Human-readable entity name used in error messages
    const ENTITY: &'static str;

    fn id(&self) -> &str;
}
