use serde_json::{Map, Number, Value};

use super::{number_to_i64_exact, ValueDecoder};
use crate::{
    error::DecodeError,
    value::{f64_to_i64_exact, JsonValue},
};

/// Runs the decode cascade: whole numbers, including integral floats within the `i64` range,
/// become `Int`.
///
/// Fails only for numbers that have no `f64` form, which `serde_json` can produce with
/// `arbitrary_precision` enabled.
impl TryFrom<&Value> for JsonValue {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        JsonValue::decode(&ValueDecoder::new(value))
    }
}

impl TryFrom<Value> for JsonValue {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        JsonValue::try_from(&value)
    }
}

/// Non-finite doubles have no JSON representation and become `Null`.
impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Int(i) => Value::Number(i.into()),
            JsonValue::Double(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(old) => Value::Array(old.into_iter().map(Value::from).collect()),
            JsonValue::Object(old) => Value::Object(
                old.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Int(r)) => number_to_i64_exact(l) == Some(*r),
        (Value::Number(l), JsonValue::Double(r)) => compare_double(l, *r),
        (Value::String(l), JsonValue::String(r)) => l == r,
        (Value::Array(l), JsonValue::Array(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (l, r) in l.iter().zip(r.iter()) {
                if !eq(l, r) {
                    return false;
                }
            }
            true
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (key, lv) in l {
                match r.get(key.as_str()) {
                    Some(rv) if eq(lv, rv) => continue,
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}

/// Integral doubles compare as the integer they represent, the same way they decode.
#[inline]
fn compare_double(lhs: &Number, rhs: f64) -> bool {
    match f64_to_i64_exact(rhs) {
        Some(i) => number_to_i64_exact(lhs) == Some(i),
        #[allow(clippy::float_cmp)]
        None => lhs.as_f64().is_some_and(|v| v == rhs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn object(pairs: Vec<(&str, JsonValue)>) -> JsonValue {
        JsonValue::object(pairs).expect("Keys are unique")
    }

    #[test_case(json!(null), JsonValue::Null; "null")]
    #[test_case(json!(true), JsonValue::Bool(true); "bool")]
    #[test_case(json!(42u64), JsonValue::Int(42); "positive number")]
    #[test_case(json!(-42), JsonValue::Int(-42); "negative number")]
    #[test_case(json!(3.25), JsonValue::Double(3.25); "float number")]
    #[test_case(json!(7.0), JsonValue::Int(7); "integral float number")]
    #[test_case(json!("hello"), JsonValue::from("hello"); "string")]
    #[test_case(
        json!([1, 2, 3]),
        JsonValue::from(vec![1.into(), 2.into(), 3.into()]);
        "array"
    )]
    #[test_case(
        json!({
            "a": 1,
            "b": "test",
            "c": true
        }),
        object(vec![
            ("a", 1.into()),
            ("b", "test".into()),
            ("c", true.into())
        ]);
        "object"
    )]
    fn test_json_conversion(value: Value, expected: JsonValue) {
        assert_eq!(JsonValue::try_from(&value), crate::from_value(&value));
        assert_eq!(JsonValue::try_from(value), Ok(expected));
    }

    #[test_case(json!(u64::MAX); "above i64 range")]
    #[test_case(json!({"items": [1, 2.5, "two", null]}); "nested")]
    fn conversion_matches_cascade(value: Value) {
        assert_eq!(JsonValue::try_from(&value), crate::from_value(&value));
    }

    #[test]
    fn number_without_f64_form_is_rejected() {
        // Parses only when `arbitrary_precision` is enabled for serde_json
        if let Ok(value) = serde_json::from_str::<Value>("1e400") {
            let error = JsonValue::try_from(&value).expect_err("No f64 form");
            assert!(error.path().is_root());
        }
    }

    #[test_case(JsonValue::Null, json!(null); "null")]
    #[test_case(JsonValue::Int(i64::MIN), json!(i64::MIN); "int")]
    #[test_case(JsonValue::Double(0.5), json!(0.5); "double")]
    #[test_case(JsonValue::Double(f64::INFINITY), json!(null); "infinity")]
    #[test_case(
        object(vec![("list", JsonValue::from(vec!["x".into(), JsonValue::Null]))]),
        json!({"list": ["x", null]});
        "nested"
    )]
    fn into_serde_json(value: JsonValue, expected: Value) {
        assert_eq!(Value::from(value), expected);
    }

    #[test_case(json!(null), JsonValue::Null; "null equals")]
    #[test_case(json!(true), JsonValue::Bool(true); "bool equals")]
    #[test_case(json!(42), JsonValue::Int(42); "int equals")]
    #[test_case(json!(42.0), JsonValue::Int(42); "integral float equals int")]
    #[test_case(json!(42), JsonValue::Double(42.0); "int equals integral double")]
    #[test_case(json!(3.25), JsonValue::Double(3.25); "float number equals")]
    #[test_case(json!("hello"), JsonValue::from("hello"); "string equals")]
    #[test_case(
        json!([1, 2, 3]),
        JsonValue::from(vec![1.into(), 2.into(), 3.into()]);
        "array equals"
    )]
    #[test_case(
        json!({
            "b": "test",
            "a": 1,
            "c": true
        }),
        object(vec![
            ("a", 1.into()),
            ("b", "test".into()),
            ("c", true.into())
        ]);
        "object equals"
    )]
    fn test_comparison_eq(serde_value: Value, custom: JsonValue) {
        assert_eq!(serde_value, custom);
        assert_eq!(custom, serde_value);
    }

    #[test_case(json!(null), JsonValue::Bool(true); "null != bool")]
    #[test_case(json!(true), JsonValue::Bool(false); "bool not equal")]
    #[test_case(json!(42), JsonValue::Int(-42); "positive vs negative number not equal")]
    #[test_case(json!(42.5), JsonValue::Int(42); "fraction vs int not equal")]
    #[test_case(json!(3.25), JsonValue::Double(2.5); "different floats not equal")]
    #[test_case(json!("42"), JsonValue::Int(42); "string vs int not equal")]
    #[test_case(json!("hello"), JsonValue::from("world"); "different strings not equal")]
    #[test_case(
        json!([1, 2, 3]),
        JsonValue::from(vec![1.into(), 2.into(), 4.into()]);
        "different arrays not equal"
    )]
    #[test_case(
        json!([1, 2]),
        JsonValue::from(vec![1.into(), 2.into(), 3.into()]);
        "array length not equal"
    )]
    #[test_case(
        json!({"a": 1}),
        object(vec![("a", 2.into())]);
        "different object not equal"
    )]
    #[test_case(
        json!({"a": 1}),
        object(vec![("b", 1.into())]);
        "different keys not equal"
    )]
    fn test_comparison_neq(serde_value: Value, custom: JsonValue) {
        assert_ne!(serde_value, custom);
        assert_ne!(custom, serde_value);
    }
}
