//! Endpoint group and method definitions

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A group of API methods generated into one endpoint class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointGroupDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub methods: Vec<MethodDef>,
}

/// A single API method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Route template, with `{name}` placeholders for path parameters
    pub path: String,
    #[serde(default)]
    pub url: Option<String>,
    pub return_type: String,
    #[serde(default, rename = "post", alias = "isPost")]
    pub is_post: bool,
    #[serde(default)]
    pub is_paged: bool,
    #[serde(default)]
    pub is_dated: bool,
    /// Network-wide methods take no `site` parameter
    #[serde(default)]
    pub is_network_method: bool,
    #[serde(default)]
    pub is_previewable: bool,
    /// Type of the `sort` parameter, when the method is sortable
    #[serde(default, rename = "sort", alias = "sortKeyType")]
    pub sort_key_type: Option<String>,
    #[serde(default, rename = "auth", alias = "requiresAuth")]
    pub requires_auth: bool,
    /// OAuth scopes the method needs
    #[serde(default, deserialize_with = "null_as_default")]
    pub scopes: Vec<String>,
    #[serde(
        default,
        rename = "paths",
        alias = "pathParams",
        deserialize_with = "null_as_default"
    )]
    pub path_params: Vec<MethodPathParam>,
    #[serde(
        default,
        rename = "queries",
        alias = "queryParams",
        deserialize_with = "null_as_default"
    )]
    pub query_params: Vec<MethodQueryParam>,

    #[serde(skip_deserializing)]
    pub has_description_or_url: bool,
    /// `"{type} {name}"` for path parameters, then query parameters without a default
    #[serde(skip_deserializing)]
    pub parameters_without_defaults: Vec<String>,
    /// `"{type} {name} = {default}"` for defaulted query parameters
    #[serde(skip_deserializing)]
    pub parameters_with_defaults: Vec<String>,
    /// Full signature order
    #[serde(skip_deserializing)]
    pub parameters: Vec<String>,
    /// Escaped names of the parameters that need a null check
    #[serde(skip_deserializing)]
    pub null_checked_parameters: Vec<String>,
    #[serde(skip_deserializing)]
    pub documented_parameters: Vec<ParameterDoc>,
}

/// A parameter substituted into the route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodPathParam {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_deserializing)]
    pub escaped_name: String,
    #[serde(skip_deserializing)]
    pub requires_null_check: bool,
}

/// A parameter sent in the query string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodQueryParam {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Literal default value; the parameter is optional when set
    #[serde(default)]
    pub default: Option<String>,
    #[serde(skip_deserializing)]
    pub escaped_name: String,
    #[serde(skip_deserializing)]
    pub requires_null_check: bool,
}

impl MethodQueryParam {
    /// Creates a query parameter with no description
    pub fn new(name: &str, type_name: impl Into<String>, default: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            type_name: type_name.into(),
            default: default.map(str::to_string),
            escaped_name: String::new(),
            requires_null_check: false,
        }
    }

    /// True when a non-blank default value is declared
    pub fn has_default(&self) -> bool {
        super::is_present(&self.default)
    }
}

/// Name and description of a documented parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDoc {
    pub name: String,
    pub description: String,
}
