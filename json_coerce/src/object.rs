//! Coercion over whole mappings.

use serde_json::{Map, Value};

use crate::CoerceOptions;
use crate::coerce::coerce;

/// Coerce every value in `data`, keeping its keys and their order.
///
/// ```rust
/// use json_coerce::{CoerceOptions, parse_object};
/// use serde_json::{json, Value};
///
/// let form = json!({"age": "42", "admin": "false", "name": "Ada"})
///     .as_object()
///     .cloned()
///     .unwrap_or_default();
/// let typed = parse_object(form, CoerceOptions::DEFAULT);
/// assert_eq!(
///     Value::Object(typed),
///     json!({"age": 42, "admin": false, "name": "Ada"})
/// );
/// ```
#[must_use]
pub fn parse_object(
    data: Map<String, Value>,
    options: impl Into<CoerceOptions>,
) -> Map<String, Value> {
    coerce_entries(data, &options.into())
}

/// Coerce key/value pairs from any source, such as a `HashMap<String, String>`
/// of decoded form fields.
///
/// Later duplicates of a key replace earlier ones.
#[must_use]
pub fn parse_pairs<I, K, V>(pairs: I, options: impl Into<CoerceOptions>) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    coerce_entries(pairs, &options.into())
}

pub(crate) fn coerce_entries<I, K, V>(pairs: I, options: &CoerceOptions) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), coerce(value.into(), options)))
        .collect()
}
