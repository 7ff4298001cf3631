//! Behavioural tests over whole payloads.
//!
//! Each scenario coerces the canonical string payload under one option set
//! and checks every entry, so a change in precedence or in a boundary case
//! shows up against the full table.

use rstest::{fixture, rstest};
use serde_json::{Map, Value, json};

use json_coerce::{
    CoerceOptions, Coercer, PartialCoerceOptions, create_bound_instance, parse_object, parse_value,
};
use test_helpers::payloads::{string_payload, typed_payload};

#[fixture]
fn strings() -> Map<String, Value> {
    string_payload()
}

fn boolean_and_float_off() -> PartialCoerceOptions {
    PartialCoerceOptions::new()
        .with_boolean(false)
        .with_float(false)
}

fn all_off() -> PartialCoerceOptions {
    boolean_and_float_off().with_array(false).with_object(false)
}

fn assert_entries(actual: &Map<String, Value>, expected: &Value) {
    let Value::Object(expected) = expected else {
        panic!("expected table must be an object");
    };
    for (key, want) in expected {
        assert_eq!(actual.get(key), Some(want), "entry `{key}`");
    }
}

#[rstest]
fn default_options_coerce_unambiguous_strings(strings: Map<String, Value>) {
    let typed = parse_object(strings, CoerceOptions::DEFAULT);
    assert_entries(
        &typed,
        &json!({
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
            "notANumber": ".",
            "leadingDot": 0.22,
            "endingDot": 22,
            "positiveExponent": "2e+2",
            "negativeExponent": "2e-2",
            "negative": -2,
            "negativeFloat": -2.2,
            "negativeNumberWithExponent": "-2e2",
            "badNumberInExponent": "53.3.5e3",
            "exponentWithoutNumber": "e2",
            "unterminatedArray": "[1, 2, 3",
            "emptyString": "",
        }),
    );
}

#[rstest]
fn everything_off_returns_the_input(strings: Map<String, Value>) {
    let typed = parse_object(strings.clone(), all_off());
    assert_eq!(typed, strings);
    assert_eq!(
        parse_object(string_payload(), CoerceOptions::DISABLED),
        strings
    );
}

#[rstest]
fn exponential_option_converts_scientific_notation(strings: Map<String, Value>) {
    let typed = parse_object(strings, PartialCoerceOptions::new().with_exponential(true));
    assert_entries(
        &typed,
        &json!({
            "buz": 1_000_000,
            "exponential": 200,
            "notANumber": ".",
            "leadingDot": 0.22,
            "endingDot": 22,
            "positiveExponent": 200,
            "negativeExponent": 0.02,
            "negative": -2,
            "negativeFloat": -2.2,
            "negativeNumberWithExponent": -200,
            "badNumberInExponent": "53.3.5e3",
            "exponentWithoutNumber": "e2",
            "infinity": "240e1234",
            "emptyString": "",
        }),
    );
}

#[rstest]
fn partial_options_keep_structures_only(strings: Map<String, Value>) {
    let typed = parse_object(strings.clone(), boolean_and_float_off());
    for (key, value) in &typed {
        match key.as_str() {
            "baz" => assert_eq!(value, &json!({"hello": "world"})),
            "qux" => assert_eq!(value, &json!([1, 2, 3])),
            _ => assert_eq!(Some(value), strings.get(key), "entry `{key}`"),
        }
    }
}

#[test]
fn typed_values_are_left_alone() {
    let typed = typed_payload();
    assert_eq!(parse_object(typed.clone(), CoerceOptions::DEFAULT), typed);
}

#[rstest]
#[case(None)]
#[case(Some(all_off()))]
#[case(Some(PartialCoerceOptions::new().with_exponential(true)))]
fn key_set_is_preserved(
    strings: Map<String, Value>,
    #[case] options: Option<PartialCoerceOptions>,
) {
    let before: Vec<String> = strings.keys().cloned().collect();
    let after: Vec<String> = parse_object(strings, options).keys().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn bound_instance_keeps_its_options() {
    let coercer = create_bound_instance(Some(boolean_and_float_off()));
    assert_eq!(coercer.parse_value(json!("false")), json!("false"));
    assert_eq!(coercer.parse_value(json!("true")), json!("true"));
    assert_eq!(coercer.parse_value(json!("1.2.3")), json!("1.2.3"));
    assert_eq!(coercer.parse_value(json!([1, 2, 3])), json!([1, 2, 3]));
    assert_eq!(coercer.parse_value(json!("[1, 2, 3]")), json!([1, 2, 3]));

    let typed = coercer.parse_object(string_payload());
    assert_eq!(
        typed,
        parse_object(string_payload(), boolean_and_float_off())
    );
}

#[rstest]
#[case(CoerceOptions::DEFAULT)]
#[case(CoerceOptions::DISABLED)]
#[case(PartialCoerceOptions::new().with_exponential(true).normalize())]
#[case(PartialCoerceOptions::new().with_boolean(false).with_object(false).normalize())]
fn bound_instance_matches_stateless_calls(
    strings: Map<String, Value>,
    #[case] options: CoerceOptions,
) {
    let coercer = Coercer::new(options);
    assert_eq!(coercer.options(), options);
    for value in strings.values().chain(typed_payload().values()) {
        assert_eq!(
            coercer.parse_value(value.clone()),
            parse_value(value.clone(), options),
            "value {value}"
        );
    }
}

#[test]
fn converting_options_matches_new() {
    let options = PartialCoerceOptions::new().with_array(false).normalize();
    let converted = Coercer::from(options);
    assert_eq!(converted, Coercer::new(options));
    assert_eq!(converted.options(), options);
}

#[test]
fn form_fields_feed_in_as_pairs() {
    let form = [("page", "2"), ("draft", "false"), ("q", "2e2")];
    let typed = Coercer::default().parse_pairs(form);
    assert_eq!(
        Value::Object(typed),
        json!({"page": 2, "draft": false, "q": "2e2"})
    );
}
