//! Custom request extractors.

pub mod fields;
mod validated_json;

pub use validated_json::ValidatedJson;
