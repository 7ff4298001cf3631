//! Canonical payloads used across the behavioural suites.
//!
//! [`string_payload`] holds every value as text, the way a form post or a
//! flattened envelope delivers it. [`typed_payload`] holds values that are
//! already typed, alongside a few strings the defaults must not touch.

use serde_json::{Map, Value, json};

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// A payload whose values are all strings.
#[must_use]
pub fn string_payload() -> Map<String, Value> {
    into_map(json!({
        "foo": "true",
        "raz": "false",
        "bar": "123",
        "baz": "{\"hello\": \"world\"}",
        "qux": "[1, 2, 3]",
        "xul": "1.2.3",
        "zub": "45.66",
        "buz": "1e6",
        "fooString": "foo",
        "infinity": "240e1234",
        "exponential": "2e2",
        "notANumber": ".",
        "leadingDot": ".22",
        "endingDot": "22.",
        "positiveExponent": "2e+2",
        "negativeExponent": "2e-2",
        "negative": "-2",
        "negativeFloat": "-2.2",
        "negativeNumberWithExponent": "-2e2",
        "badNumberInExponent": "53.3.5e3",
        "exponentWithoutNumber": "e2",
        "unterminatedArray": "[1, 2, 3",
        "emptyString": "",
    }))
}

/// A payload whose values are already typed, plus strings the default
/// options leave alone.
#[must_use]
pub fn typed_payload() -> Map<String, Value> {
    into_map(json!({
        "foo": true,
        "raz": false,
        "bar": 123,
        "baz": {"hello": "world"},
        "qux": [1, 2, 3],
        "xul": "1.2.3",
        "zub": 45.66,
        "buz": "1e6",
        "fooString": "foo",
        "infinity": "240e1234",
        "exponential": "2e2",
        "negative": -2,
        "negativeFloat": -2.2,
        "badNumberInExponent": "53.3.5e3",
        "nothing": null,
        "emptyString": "",
    }))
}
