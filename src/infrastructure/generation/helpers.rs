//! Custom template helpers
//!
//! - `integer` tester: `{% if value.value is integer %}` branches on whether its single
//!   argument holds an integer. Any other argument count is a render error.
//! - `newline()` function: emits a bare line break.

use std::collections::HashMap;

use tera::{Error, Tera, Value};

/// Register every custom helper on `tera`
pub fn register_helpers(tera: &mut Tera) {
    tera.register_tester("integer", is_integer);
    tera.register_function("newline", newline);
}

fn is_integer(value: Option<&Value>, args: &[Value]) -> tera::Result<bool> {
    match (value, args) {
        (Some(value), []) => Ok(matches!(value, Value::Number(n) if n.is_i64() || n.is_u64())),
        // Undefined values are simply not integers
        (None, []) => Ok(false),
        _ => Err(Error::msg("The `integer` test takes exactly one argument.")),
    }
}

fn newline(args: &HashMap<String, Value>) -> tera::Result<Value> {
    if !args.is_empty() {
        return Err(Error::msg("The `newline` function takes no arguments."));
    }
    Ok(Value::String("\n".to_string()))
}
