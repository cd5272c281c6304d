mod from;
mod number;

use core::fmt;
use std::{
    collections::hash_map::Entry,
    hash::{Hash, Hasher},
};

use ahash::AHashMap;

use crate::error::DuplicateKeyError;
pub(crate) use number::{
    f64_to_i64_exact, f64_to_isize_exact, hash_f64, parse_float, parse_integer,
};

/// Members of a JSON object. Keys are unique, iteration order is unspecified.
pub type Object = AHashMap<String, JsonValue>;

/// An immutable JSON value.
///
/// Equality and hashing are structural. Objects compare and hash the same regardless of the
/// order their members were inserted in.
#[derive(Debug, Clone)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(Object),
}

/// The case of a [`JsonValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonValue {
    /// Builds an object from key/value pairs.
    ///
    /// # Errors
    ///
    /// Fails on the first key that appears more than once. Members are never overwritten.
    pub fn object<I, K, V>(pairs: I) -> Result<JsonValue, DuplicateKeyError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<JsonValue>,
    {
        let pairs = pairs.into_iter();
        let mut object = Object::with_capacity(pairs.size_hint().0);
        for (key, value) in pairs {
            match object.entry(key.into()) {
                Entry::Occupied(entry) => return Err(DuplicateKeyError::new(entry.key().clone())),
                Entry::Vacant(entry) => {
                    entry.insert(value.into());
                }
            }
        }
        Ok(JsonValue::Object(object))
    }

    #[must_use]
    pub fn kind(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Bool(_) => JsonType::Boolean,
            JsonValue::Int(_) => JsonType::Integer,
            JsonValue::Double(_) => JsonType::Number,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Bool(l), JsonValue::Bool(r)) => l == r,
            (JsonValue::Int(l), JsonValue::Int(r)) => l == r,
            (JsonValue::Double(l), JsonValue::Double(r)) => l == r,
            (JsonValue::String(l), JsonValue::String(r)) => l == r,
            (JsonValue::Array(l), JsonValue::Array(r)) => l == r,
            (JsonValue::Object(l), JsonValue::Object(r)) => {
                if l.len() != r.len() {
                    return false;
                }
                l.iter()
                    .all(|(key, lv)| r.get(key).is_some_and(|rv| lv == rv))
            }
            _ => false,
        }
    }
}

/// Doubles compare with IEEE `==`, so a value holding `NaN` is not equal to itself.
impl Eq for JsonValue {}

impl Hash for JsonValue {
    fn hash<H: Hasher>(&self, h: &mut H) {
        core::mem::discriminant(self).hash(h);
        match self {
            JsonValue::Null => {}
            JsonValue::Bool(value) => value.hash(h),
            JsonValue::Int(value) => value.hash(h),
            JsonValue::Double(value) => hash_f64(*value, h),
            JsonValue::String(value) => value.hash(h),
            JsonValue::Array(items) => items.hash(h),
            JsonValue::Object(object) => {
                // Hash members in key order, so the hash does not depend on insertion order
                let mut members: Vec<_> = object.iter().collect();
                members.sort_unstable_by(|(k1, _), (k2, _)| k1.cmp(k2));
                members.len().hash(h);
                for (key, value) in members {
                    key.hash(h);
                    value.hash(h);
                }
            }
        }
    }
}
