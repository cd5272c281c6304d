use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

use crate::{
    error::{DecodeError, Error},
    impls::serde_json::ValueDecoder,
    path::CodingPath,
    value::{JsonValue, Object},
};

/// A structured container positioned at a single value, which can be asked to decode that value
/// as a particular shape.
///
/// Every method is an attempt: it returns `None` (or `false`) when the value has another shape
/// and must leave the decoder untouched, so that a later attempt is not biased by an earlier one.
pub trait SingleValueDecoder: Sized {
    /// Location of the current value.
    fn coding_path(&self) -> &CodingPath;
    /// Whether the current value is an explicit null.
    fn decode_nil(&self) -> bool;
    fn decode_bool(&self) -> Option<bool>;
    /// Must reject non-integral and out-of-range input rather than truncate it.
    fn decode_i64(&self) -> Option<i64>;
    fn decode_f64(&self) -> Option<f64>;
    fn decode_string(&self) -> Option<String>;
    /// Decoders positioned at each element, in order.
    fn decode_seq(&self) -> Option<Vec<Self>>;
    /// Keys paired with decoders positioned at the corresponding values.
    fn decode_map(&self) -> Option<Vec<(String, Self)>>;
}

type Attempt<D> = fn(&D) -> Option<JsonValue>;

impl JsonValue {
    /// Decodes the value `decoder` is positioned at.
    ///
    /// Shapes are tried in order: null, boolean, integer, floating point, string, array, object.
    /// The first one that succeeds wins, so `42` becomes `Int(42)` rather than `Double(42.0)`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch carrying the current path if every attempt fails. A nested value
    /// that cannot be decoded fails its enclosing array or object attempt.
    pub fn decode<D: SingleValueDecoder>(decoder: &D) -> Result<JsonValue, DecodeError> {
        attempt_all(decoder)
            .ok_or_else(|| DecodeError::type_mismatch(decoder.coding_path().clone()))
    }
}

fn attempt_all<D: SingleValueDecoder>(decoder: &D) -> Option<JsonValue> {
    let cascade: [Attempt<D>; 7] = [
        null::<D>,
        boolean::<D>,
        integer::<D>,
        double::<D>,
        string::<D>,
        array::<D>,
        object::<D>,
    ];
    cascade.iter().find_map(|attempt| attempt(decoder))
}

fn null<D: SingleValueDecoder>(decoder: &D) -> Option<JsonValue> {
    decoder.decode_nil().then_some(JsonValue::Null)
}

fn boolean<D: SingleValueDecoder>(decoder: &D) -> Option<JsonValue> {
    decoder.decode_bool().map(JsonValue::Bool)
}

fn integer<D: SingleValueDecoder>(decoder: &D) -> Option<JsonValue> {
    decoder.decode_i64().map(JsonValue::Int)
}

fn double<D: SingleValueDecoder>(decoder: &D) -> Option<JsonValue> {
    decoder.decode_f64().map(JsonValue::Double)
}

fn string<D: SingleValueDecoder>(decoder: &D) -> Option<JsonValue> {
    decoder.decode_string().map(JsonValue::String)
}

fn array<D: SingleValueDecoder>(decoder: &D) -> Option<JsonValue> {
    let items = decoder.decode_seq()?;
    items
        .iter()
        .map(attempt_all)
        .collect::<Option<Vec<_>>>()
        .map(JsonValue::Array)
}

fn object<D: SingleValueDecoder>(decoder: &D) -> Option<JsonValue> {
    let entries = decoder.decode_map()?;
    let mut object = Object::with_capacity(entries.len());
    for (key, value) in &entries {
        // Containers with repeated keys keep the last one
        object.insert(key.clone(), attempt_all(value)?);
    }
    Some(JsonValue::Object(object))
}

impl<'de> Deserialize<'de> for JsonValue {
    /// Buffers the input as a [`serde_json::Value`] and runs it through [`JsonValue::decode`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let buffered = serde_json::Value::deserialize(deserializer)?;
        JsonValue::decode(&ValueDecoder::new(&buffered)).map_err(de::Error::custom)
    }
}

impl FromStr for JsonValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::from_str(s)
    }
}
