//! # json-value
//!
//! An immutable JSON value with loss-aware accessors.
//!
//! [`JsonValue`] is a closed tree of seven cases. It is decoded through an ordered cascade of
//! speculative attempts against a [`SingleValueDecoder`], encoded through any
//! [`serde::Serializer`], and read back through total accessors that return `None` instead of
//! silently truncating or wrapping numbers.
//!
//! ```rust
//! let value = json_value::from_str(r#"{"count": 42, "ratio": 42.0, "label": "7"}"#)?;
//!
//! assert_eq!(value.get("count").and_then(|v| v.as_i64()), Some(42));
//! // Whole numbers written as floats decode as integers
//! assert_eq!(value.get("ratio"), Some(&json_value::JsonValue::Int(42)));
//! assert_eq!(value.get("label").and_then(|v| v.as_int()), Some(7));
//! assert_eq!(value.get(0), None);
//! # Ok::<(), json_value::Error>(())
//! ```
mod access;
mod decode;
mod encode;
mod error;
mod impls;
mod path;
mod value;

pub use access::Index;
pub use decode::SingleValueDecoder;
pub use error::{DecodeError, DuplicateKeyError, Error};
pub use impls::serde_json::ValueDecoder;
pub use path::{CodingPath, Segment};
pub use value::{JsonType, JsonValue, Object};

/// Parse JSON text into a [`JsonValue`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the input is not valid JSON and [`Error::Decode`] if the parsed
/// document contains a value that does not match any case of [`JsonValue`].
pub fn from_str(input: &str) -> Result<JsonValue, Error> {
    let buffered: serde_json::Value = serde_json::from_str(input)?;
    Ok(from_value(&buffered)?)
}

/// Parse JSON bytes into a [`JsonValue`].
///
/// # Errors
///
/// Same as [`from_str`].
pub fn from_slice(input: &[u8]) -> Result<JsonValue, Error> {
    let buffered: serde_json::Value = serde_json::from_slice(input)?;
    Ok(from_value(&buffered)?)
}

/// Decode a borrowed [`serde_json::Value`] through the decode cascade.
///
/// # Errors
///
/// Returns [`DecodeError`] if no case of [`JsonValue`] matches.
pub fn from_value(value: &serde_json::Value) -> Result<JsonValue, DecodeError> {
    JsonValue::decode(&ValueDecoder::new(value))
}
