//! Per-value coercion.
//!
//! Checks run in a fixed order: boolean literals, then numbers, then
//! bracketed JSON. The first check that produces a value wins. When none
//! does, the original text comes back untouched. Non-string values are
//! returned as they were given.

mod numeric;
mod structural;

use serde_json::Value;

use crate::CoerceOptions;

/// Coerce a single value under `options`.
///
/// `options` may be a complete [`CoerceOptions`] or anything that normalises
/// into one, such as a [`crate::PartialCoerceOptions`] or an `Option` of it.
///
/// # Examples
///
/// ```rust
/// use json_coerce::{CoerceOptions, PartialCoerceOptions, parse_value};
/// use serde_json::json;
///
/// assert_eq!(parse_value(json!("true"), CoerceOptions::DEFAULT), json!(true));
/// assert_eq!(parse_value(json!("45.66"), CoerceOptions::DEFAULT), json!(45.66));
/// assert_eq!(parse_value(json!("2e2"), CoerceOptions::DEFAULT), json!("2e2"));
///
/// let exp = PartialCoerceOptions::new().with_exponential(true);
/// assert_eq!(parse_value(json!("2e2"), exp), json!(200));
/// ```
#[must_use]
pub fn parse_value(value: Value, options: impl Into<CoerceOptions>) -> Value {
    coerce(value, &options.into())
}

pub(crate) fn coerce(value: Value, options: &CoerceOptions) -> Value {
    let Value::String(text) = value else {
        return value;
    };
    coerce_text(&text, options).unwrap_or(Value::String(text))
}

fn coerce_text(text: &str, options: &CoerceOptions) -> Option<Value> {
    if options.boolean()
        && let Some(flag) = boolean_literal(text)
    {
        return Some(Value::Bool(flag));
    }
    if options.float()
        && let Some(number) = numeric::coerce_number(text, options.exponential())
    {
        return Some(Value::Number(number));
    }
    if options.structural() {
        return structural::coerce_structure(text);
    }
    None
}

/// Exact, case-sensitive match against the two boolean literals.
fn boolean_literal(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
