use std::hash::{BuildHasher, Hash};

use json_value::{Error, JsonValue};
use serde_json::json;
use test_case::test_case;

fn roundtrip(value: &JsonValue) -> JsonValue {
    let text = value.to_string();
    json_value::from_str(&text).expect("Encoded text is valid JSON")
}

fn object(pairs: Vec<(&str, JsonValue)>) -> JsonValue {
    JsonValue::object(pairs).expect("Keys are unique")
}

#[test_case(JsonValue::Null; "null")]
#[test_case(JsonValue::Bool(true); "bool")]
#[test_case(JsonValue::Int(i64::MIN); "min int")]
#[test_case(JsonValue::Int(i64::MAX); "max int")]
#[test_case(JsonValue::Double(0.1); "fractional double")]
#[test_case(JsonValue::Double(-0.001); "small double")]
#[test_case(JsonValue::Double(1.5e20); "huge double")]
#[test_case(JsonValue::from("unicode \u{1F600} \"quoted\""); "string")]
#[test_case(JsonValue::Array(Vec::new()); "empty array")]
#[test_case(
    object(vec![
        ("nested", object(vec![("list", JsonValue::from(vec![1.into(), "two".into(), JsonValue::Null]))])),
        ("flag", false.into()),
    ]);
    "nested object"
)]
fn preserves_value(value: JsonValue) {
    assert_eq!(roundtrip(&value), value);
}

#[test_case(42.0, 42; "positive")]
#[test_case(-0.0, 0; "negative zero")]
#[test_case(-9_223_372_036_854_775_808.0, i64::MIN; "minimum")]
fn integral_double_comes_back_as_int(input: f64, expected: i64) {
    let decoded = roundtrip(&JsonValue::Double(input));
    assert_eq!(decoded, JsonValue::Int(expected));
    // Accessors treat both representations alike
    assert_eq!(decoded.as_i64(), JsonValue::Double(input).as_i64());
}

#[test_case(f64::NAN; "nan")]
#[test_case(f64::INFINITY; "infinity")]
#[test_case(f64::NEG_INFINITY; "negative infinity")]
fn non_finite_double_comes_back_as_null(input: f64) {
    let value = JsonValue::Double(input);
    assert_eq!(value.to_string(), "null");
    assert_eq!(roundtrip(&value), JsonValue::Null);
    let nested = JsonValue::from(vec![value, JsonValue::Int(1)]);
    assert_eq!(
        roundtrip(&nested),
        JsonValue::from(vec![JsonValue::Null, JsonValue::Int(1)])
    );
}

#[test]
fn roundtrip_through_serde_json_value() {
    let value = object(vec![("ratio", 0.75.into()), ("count", 3.into())]);
    let encoded = serde_json::to_value(&value).expect("Encodes");
    assert_eq!(encoded, json!({"ratio": 0.75, "count": 3}));
    let decoded: JsonValue = serde_json::from_value(encoded).expect("Decodes");
    assert_eq!(decoded, value);
}

#[test]
fn bare_whole_number_is_int() {
    assert_eq!(json_value::from_str("42").expect("Valid"), JsonValue::Int(42));
    assert_eq!(json_value::from_slice(b"-7").expect("Valid"), JsonValue::Int(-7));
    assert_eq!(
        json_value::from_str("42.5").expect("Valid"),
        JsonValue::Double(42.5)
    );
}

#[test]
fn numbers_beyond_i64_become_doubles() {
    let value = json_value::from_str("18446744073709551615").expect("Valid");
    assert!(matches!(value, JsonValue::Double(_)));
    assert_eq!(value.as_i64(), None);
}

#[test]
fn invalid_text_is_a_syntax_error() {
    let error = json_value::from_str("{\"a\": }").expect_err("Invalid JSON");
    assert!(matches!(error, Error::Syntax(_)));
}

#[test]
fn object_order_does_not_matter() {
    let first = json_value::from_str(r#"{"a": 1, "b": [true, null], "c": {"x": "y", "z": 0.5}}"#)
        .expect("Valid");
    let second = json_value::from_str(r#"{"c": {"z": 0.5, "x": "y"}, "b": [true, null], "a": 1}"#)
        .expect("Valid");
    assert_eq!(first, second);

    let state = ahash::RandomState::with_seeds(7, 11, 13, 17);
    let hash = |value: &JsonValue| {
        let mut hasher = state.build_hasher();
        value.hash(&mut hasher);
        std::hash::Hasher::finish(&hasher)
    };
    assert_eq!(hash(&first), hash(&second));
}

#[test]
fn lookups_on_wrong_shapes_are_absent() {
    let value = json_value::from_str(r#"{"list": [1, 2], "text": "abc"}"#).expect("Valid");
    assert_eq!(value.get(0), None);
    assert_eq!(value.get("list").and_then(|list| list.get("a")), None);
    assert_eq!(value.get("list").and_then(|list| list.get(2)), None);
    assert_eq!(value.get("text").and_then(|text| text.get(0)), None);
    assert_eq!(value.get("missing"), None);
}

#[test]
fn duplicate_literal_keys_are_rejected() {
    let error = JsonValue::object([("id", JsonValue::Int(1)), ("id", JsonValue::Int(2))])
        .expect_err("Duplicate key");
    assert_eq!(error.key(), "id");
}
