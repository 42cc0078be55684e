//! Definition data model
//!
//! Definitions are deserialized from one JSON document per entity kind, filled in by the
//! enrichment passes, and then serialized into template contexts. Fields marked
//! `skip_deserializing` are derived during enrichment and never read from input.

pub mod classes;
pub mod endpoints;
pub mod enums;

pub use classes::*;
pub use endpoints::*;
pub use enums::*;

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// True when an optional text field holds something other than whitespace.
pub(crate) fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}
