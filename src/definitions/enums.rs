//! Enumeration definitions

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// An enumeration exposed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Values may be combined as bit flags
    #[serde(default, rename = "flags", alias = "isFlags")]
    pub is_flags: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<EnumValueDef>,
}

/// One member of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueDef {
    /// Display name; derived from `json_name` when absent
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Name used on the wire
    pub json_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit numeric value
    #[serde(default)]
    pub value: Option<i64>,
}
