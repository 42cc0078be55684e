//! String transformation utilities for code generation

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Reserved words of the generated language that cannot be used as bare identifiers.
static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
        "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
        "void", "volatile", "while",
    ]
    .into_iter()
    .collect()
});

/// Converts an underscore-separated wire name into a display identifier.
///
/// The first character is uppercased, every underscore is dropped, and a lowercase character
/// that followed an underscore is uppercased. Characters that are already uppercase keep
/// their casing and nothing else is touched.
///
/// # Examples
/// ```
/// use seapi_codegen::core::utils::prettify;
///
/// assert_eq!(prettify("prettify"), "Prettify");
/// assert_eq!(prettify("prettify_this_string"), "PrettifyThisString");
/// assert_eq!(prettify("pReTtIfY"), "PReTtIfY");
/// ```
pub fn prettify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for ch in s.chars() {
        if ch == '_' {
            capitalize_next = true;
            continue;
        }

        if capitalize_next && ch.is_lowercase() {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        capitalize_next = false;
    }

    result
}

/// Escapes an identifier that collides with a reserved word by prefixing it with `@`.
///
/// # Examples
/// ```
/// use seapi_codegen::core::utils::escape_identifier;
///
/// assert_eq!(escape_identifier("order"), "order");
/// assert_eq!(escape_identifier("params"), "@params");
/// ```
pub fn escape_identifier(name: &str) -> String {
    if RESERVED_WORDS.contains(name) {
        format!("@{name}")
    } else {
        name.to_string()
    }
}

/// Makes an item identifier safe to use as a file name.
///
/// Generic type syntax is flattened: `<` becomes a backtick and `>` is removed, so
/// `Wrapper<T>` maps to ``Wrapper`T``.
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .filter_map(|ch| match ch {
            '<' => Some('`'),
            '>' => None,
            other => Some(other),
        })
        .collect()
}
