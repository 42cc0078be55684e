//! Data-model class definitions

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A model class returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Inheritance clause appended to the declaration; defaulted during enrichment
    #[serde(default)]
    pub suffix: Option<String>,
    /// Documentation link
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Vec<ClassPropertyDef>,
    #[serde(skip_deserializing)]
    pub has_description_or_url: bool,
}

/// A property of a model class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPropertyDef {
    /// Display name; derived from `json_name` when blank
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub json_name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Declared type names a known enumeration
    #[serde(skip_deserializing)]
    pub is_enum: bool,
}
