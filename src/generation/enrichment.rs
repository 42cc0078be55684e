//! Enrichment passes
//!
//! Raw definitions are turned into fully specified ones by exactly one pass per kind.
//! Each pass consumes the raw definitions, so a set can never be enriched twice. The
//! enumeration pass produces an [`EnumCatalog`]; the class and endpoint passes take it as
//! an argument because they depend on the set of known enum names.

use std::collections::HashSet;

use tracing::debug;

use crate::core::utils::{escape_identifier, prettify};
use crate::definitions::{
    ClassDef, EndpointGroupDef, EnumDef, MethodDef, MethodPathParam, MethodQueryParam,
    ParameterDoc, is_present,
};

/// Inheritance clause given to classes that declare none
pub const DEFAULT_CLASS_SUFFIX: &str = ": IStackExchangeModel";

/// Literal used as the default of every synthesized optional parameter
pub const UNSET: &str = "null";

/// Built-in value types of the generated language, which can never hold null
const BUILTIN_VALUE_TYPES: &[&str] = &[
    "bool", "byte", "sbyte", "char", "short", "ushort", "int", "uint", "long", "ulong", "float",
    "double", "decimal", "DateTime", "DateTimeOffset", "TimeSpan", "Guid",
];

/// Type names whose parameters never need a null check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonNullableTypes(HashSet<String>);

impl NonNullableTypes {
    fn with_builtins() -> Self {
        Self(BUILTIN_VALUE_TYPES.iter().map(|s| s.to_string()).collect())
    }

    fn register(&mut self, type_name: &str) {
        self.0.insert(type_name.to_string());
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.0.contains(type_name)
    }
}

/// Enriched enumerations together with the lookup tables derived from them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCatalog {
    enums: Vec<EnumDef>,
    enum_names: HashSet<String>,
    non_nullable: NonNullableTypes,
}

impl EnumCatalog {
    pub fn enums(&self) -> &[EnumDef] {
        &self.enums
    }

    /// True when `type_name` names one of the enumerations
    pub fn is_enum(&self, type_name: &str) -> bool {
        self.enum_names.contains(type_name)
    }

    pub fn non_nullable_types(&self) -> &NonNullableTypes {
        &self.non_nullable
    }
}

/// Fills in enum value names and builds the catalog.
pub fn enrich_enums(mut enums: Vec<EnumDef>) -> EnumCatalog {
    let mut enum_names = HashSet::with_capacity(enums.len());
    let mut non_nullable = NonNullableTypes::with_builtins();

    for def in &mut enums {
        for value in &mut def.values {
            if value.name.is_empty() {
                value.name = prettify(&value.json_name);
            }
        }

        enum_names.insert(def.name.clone());
        non_nullable.register(&def.name);
    }

    debug!(count = enums.len(), "Enriched enums");
    EnumCatalog {
        enums,
        enum_names,
        non_nullable,
    }
}

/// Defaults class suffixes, derives property names and flags enum-typed properties.
pub fn enrich_classes(mut classes: Vec<ClassDef>, catalog: &EnumCatalog) -> Vec<ClassDef> {
    for class in &mut classes {
        if class.suffix.is_none() {
            class.suffix = Some(DEFAULT_CLASS_SUFFIX.to_string());
        }
        class.has_description_or_url = is_present(&class.description) || is_present(&class.url);

        for property in &mut class.properties {
            if property.name.trim().is_empty() {
                property.name = prettify(&property.json_name);
            }
            property.is_enum = catalog.is_enum(&property.type_name);
        }
    }

    debug!(count = classes.len(), "Enriched classes");
    classes
}

/// Synthesizes the standard query parameters of every method and derives its signature.
pub fn enrich_endpoints(
    mut groups: Vec<EndpointGroupDef>,
    catalog: &EnumCatalog,
) -> Vec<EndpointGroupDef> {
    let non_nullable = catalog.non_nullable_types();

    for group in &mut groups {
        for method in &mut group.methods {
            enrich_method(method, non_nullable);
        }
    }

    debug!(count = groups.len(), "Enriched endpoint groups");
    groups
}

fn enrich_method(method: &mut MethodDef, non_nullable: &NonNullableTypes) {
    if !method.requires_auth {
        method.requires_auth = !method.scopes.is_empty();
    }

    let synthesized = standard_query_params(method);
    method.query_params.extend(synthesized);

    for param in &mut method.path_params {
        annotate_path_param(param, non_nullable);
    }
    for param in &mut method.query_params {
        annotate_query_param(param, non_nullable);
    }

    method.has_description_or_url = is_present(&method.description) || is_present(&method.url);
    derive_signature(method);
}

/// Parameters appended to every method, in the order they appear in signatures.
/// `filter` is always last.
fn standard_query_params(method: &MethodDef) -> Vec<MethodQueryParam> {
    let mut params = Vec::new();

    if !method.is_network_method {
        params.push(MethodQueryParam::new("site", "string", None));
    }

    if method.is_paged {
        params.push(MethodQueryParam::new("page", "int?", Some(UNSET)));
        params.push(MethodQueryParam::new("pagesize", "int?", Some(UNSET)));
    }

    if method.is_dated {
        params.push(MethodQueryParam::new("fromdate", "DateTime?", Some(UNSET)));
        params.push(MethodQueryParam::new("todate", "DateTime?", Some(UNSET)));
    }

    if let Some(sort) = method.sort_key_type.as_deref().filter(|s| !s.trim().is_empty()) {
        params.push(MethodQueryParam::new("sort", format!("{sort}?"), Some(UNSET)));
        params.push(MethodQueryParam::new("order", "Order?", Some(UNSET)));
        params.push(MethodQueryParam::new("min", "object", Some(UNSET)));
        params.push(MethodQueryParam::new("max", "object", Some(UNSET)));
    }

    if method.is_previewable {
        params.push(MethodQueryParam::new("preview", "bool?", Some(UNSET)));
    }

    params.push(MethodQueryParam::new("filter", "string", Some(UNSET)));
    params
}

fn annotate_path_param(param: &mut MethodPathParam, non_nullable: &NonNullableTypes) {
    param.escaped_name = escape_identifier(&param.name);
    param.requires_null_check = !non_nullable.contains(&param.type_name);
}

fn annotate_query_param(param: &mut MethodQueryParam, non_nullable: &NonNullableTypes) {
    param.escaped_name = escape_identifier(&param.name);
    param.requires_null_check = !param.has_default() && !non_nullable.contains(&param.type_name);
}

fn derive_signature(method: &mut MethodDef) {
    let (defaulted, required): (Vec<&MethodQueryParam>, Vec<&MethodQueryParam>) =
        method.query_params.iter().partition(|q| q.has_default());

    method.parameters_without_defaults = method
        .path_params
        .iter()
        .map(|p| format!("{} {}", p.type_name, p.escaped_name))
        .chain(
            required
                .iter()
                .map(|q| format!("{} {}", q.type_name, q.escaped_name)),
        )
        .collect();

    method.parameters_with_defaults = defaulted
        .iter()
        .map(|q| {
            format!(
                "{} {} = {}",
                q.type_name,
                q.escaped_name,
                q.default.as_deref().unwrap_or(UNSET)
            )
        })
        .collect();

    method.parameters = method
        .parameters_without_defaults
        .iter()
        .chain(&method.parameters_with_defaults)
        .cloned()
        .collect();

    method.null_checked_parameters = method
        .path_params
        .iter()
        .filter(|p| p.requires_null_check)
        .map(|p| p.escaped_name.clone())
        .chain(
            method
                .query_params
                .iter()
                .filter(|q| q.requires_null_check)
                .map(|q| q.escaped_name.clone()),
        )
        .collect();

    let documented = |name: &str, description: &Option<String>| {
        description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| ParameterDoc {
                name: name.to_string(),
                description: d.to_string(),
            })
    };
    method.documented_parameters = method
        .path_params
        .iter()
        .filter_map(|p| documented(&p.name, &p.description))
        .chain(
            method
                .query_params
                .iter()
                .filter_map(|q| documented(&q.name, &q.description)),
        )
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{ClassPropertyDef, EnumValueDef};
    use serde_json::json;

    fn catalog() -> EnumCatalog {
        enrich_enums(vec![EnumDef {
            name: "BadgeRank".to_string(),
            description: None,
            is_flags: false,
            values: vec![
                EnumValueDef {
                    name: String::new(),
                    json_name: "gold_plated".to_string(),
                    description: None,
                    value: None,
                },
                EnumValueDef {
                    name: "Silver".to_string(),
                    json_name: "silver".to_string(),
                    description: None,
                    value: Some(2),
                },
            ],
        }])
    }

    fn method(raw: serde_json::Value) -> MethodDef {
        serde_json::from_value(raw).unwrap()
    }

    fn enrich_one(method: MethodDef) -> MethodDef {
        let groups = vec![EndpointGroupDef {
            name: "Badges".to_string(),
            description: None,
            methods: vec![method],
        }];
        enrich_endpoints(groups, &catalog())
            .remove(0)
            .methods
            .remove(0)
    }

    fn query_names(method: &MethodDef) -> Vec<&str> {
        method.query_params.iter().map(|q| q.name.as_str()).collect()
    }

    #[test]
    fn test_enum_values_get_derived_names() {
        let catalog = catalog();
        let values = &catalog.enums()[0].values;
        assert_eq!(values[0].name, "GoldPlated");
        assert_eq!(values[1].name, "Silver");
    }

    #[test]
    fn test_enum_names_are_non_nullable() {
        let catalog = catalog();
        assert!(catalog.is_enum("BadgeRank"));
        assert!(catalog.non_nullable_types().contains("BadgeRank"));
        assert!(catalog.non_nullable_types().contains("int"));
        assert!(!catalog.non_nullable_types().contains("string"));
        assert!(!catalog.non_nullable_types().contains("int?"));
    }

    #[test]
    fn test_class_enrichment() {
        let classes = vec![
            ClassDef {
                name: "Badge".to_string(),
                description: Some("A badge.".to_string()),
                suffix: None,
                url: None,
                properties: vec![
                    ClassPropertyDef {
                        name: String::new(),
                        description: None,
                        json_name: "badge_id".to_string(),
                        type_name: "int?".to_string(),
                        is_enum: false,
                    },
                    ClassPropertyDef {
                        name: "Rank".to_string(),
                        description: None,
                        json_name: "rank".to_string(),
                        type_name: "BadgeRank".to_string(),
                        is_enum: false,
                    },
                ],
                has_description_or_url: false,
            },
            ClassDef {
                name: "Wrapper<T>".to_string(),
                description: None,
                suffix: Some(String::new()),
                url: None,
                properties: vec![],
                has_description_or_url: false,
            },
        ];

        let enriched = enrich_classes(classes, &catalog());
        assert_eq!(enriched[0].suffix.as_deref(), Some(DEFAULT_CLASS_SUFFIX));
        assert!(enriched[0].has_description_or_url);
        assert_eq!(enriched[0].properties[0].name, "BadgeId");
        assert!(!enriched[0].properties[0].is_enum);
        assert!(enriched[0].properties[1].is_enum);
        // An explicitly empty suffix is kept
        assert_eq!(enriched[1].suffix.as_deref(), Some(""));
        assert!(!enriched[1].has_description_or_url);
    }

    #[test]
    fn test_paged_previewable_site_method() {
        let enriched = enrich_one(method(json!({
            "name": "GetAll",
            "path": "/badges",
            "returnType": "Badge",
            "isPaged": true,
            "isPreviewable": true
        })));

        assert_eq!(
            query_names(&enriched),
            vec!["site", "page", "pagesize", "preview", "filter"]
        );
    }

    #[test]
    fn test_every_synthesized_parameter_in_order() {
        let enriched = enrich_one(method(json!({
            "name": "GetAll",
            "path": "/badges",
            "returnType": "Badge",
            "isPaged": true,
            "isDated": true,
            "isPreviewable": true,
            "sort": "BadgeSort",
            "queries": [ { "name": "inname", "type": "string", "default": "null" } ]
        })));

        assert_eq!(
            query_names(&enriched),
            vec![
                "inname", "site", "page", "pagesize", "fromdate", "todate", "sort", "order",
                "min", "max", "preview", "filter"
            ]
        );
        let sort = &enriched.query_params[6];
        assert_eq!(sort.type_name, "BadgeSort?");
        assert_eq!(enriched.query_params[8].type_name, "object");
    }

    #[test]
    fn test_network_method_has_no_site() {
        let enriched = enrich_one(method(json!({
            "name": "GetSites",
            "path": "/sites",
            "returnType": "Site",
            "isNetworkMethod": true
        })));

        assert_eq!(query_names(&enriched), vec!["filter"]);
        assert_eq!(enriched.query_params[0].default.as_deref(), Some(UNSET));
    }

    #[test]
    fn test_blank_sort_key_is_ignored() {
        let enriched = enrich_one(method(json!({
            "name": "GetAll",
            "path": "/badges",
            "returnType": "Badge",
            "isNetworkMethod": true,
            "sort": "  "
        })));

        assert_eq!(query_names(&enriched), vec!["filter"]);
    }

    #[test]
    fn test_scopes_imply_auth() {
        let with_scopes = enrich_one(method(json!({
            "name": "GetInbox",
            "path": "/inbox",
            "returnType": "InboxItem",
            "scopes": ["read_inbox"]
        })));
        let without = enrich_one(method(json!({
            "name": "GetAll",
            "path": "/badges",
            "returnType": "Badge"
        })));
        let explicit = enrich_one(method(json!({
            "name": "GetMe",
            "path": "/me",
            "returnType": "User",
            "auth": true
        })));

        assert!(with_scopes.requires_auth);
        assert!(!without.requires_auth);
        assert!(explicit.requires_auth);
    }

    #[test]
    fn test_signature_and_null_checks() {
        let enriched = enrich_one(method(json!({
            "name": "GetByIds",
            "description": "Gets badges by id.",
            "path": "/badges/{ids}",
            "returnType": "Badge",
            "isPaged": true,
            "paths": [
                { "name": "ids", "type": "IEnumerable<int>", "description": "Badge ids." },
                { "name": "rank", "type": "BadgeRank" }
            ],
            "queries": [
                { "name": "params", "type": "string", "description": "Extra." }
            ]
        })));

        assert_eq!(
            enriched.parameters_without_defaults,
            vec![
                "IEnumerable<int> ids",
                "BadgeRank rank",
                "string @params",
                "string site"
            ]
        );
        assert_eq!(
            enriched.parameters_with_defaults,
            vec![
                "int? page = null",
                "int? pagesize = null",
                "string filter = null"
            ]
        );
        assert_eq!(enriched.parameters.len(), 7);
        assert_eq!(enriched.parameters[4], "int? page = null");
        assert_eq!(
            enriched.null_checked_parameters,
            vec!["ids", "@params", "site"]
        );
        assert_eq!(
            enriched
                .documented_parameters
                .iter()
                .map(|d| d.name.as_str())
                .collect::<Vec<_>>(),
            vec!["ids", "params"]
        );
        assert!(enriched.has_description_or_url);
    }

    #[test]
    fn test_filter_is_always_last() {
        let variants = [
            json!({ "isPaged": true }),
            json!({ "isDated": true, "isNetworkMethod": true }),
            json!({ "sort": "Sort", "isPreviewable": true }),
            json!({}),
        ];

        for flags in variants {
            let mut raw = json!({ "name": "M", "path": "/m", "returnType": "T" });
            raw.as_object_mut()
                .unwrap()
                .extend(flags.as_object().unwrap().clone());
            let enriched = enrich_one(method(raw));

            let last = enriched.query_params.last().unwrap();
            assert_eq!(last.name, "filter");
            if enriched.is_previewable {
                let before = &enriched.query_params[enriched.query_params.len() - 2];
                assert_eq!(before.name, "preview");
            }
        }
    }
}
