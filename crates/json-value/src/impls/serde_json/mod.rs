mod value;

use serde_json::{Number, Value};

use crate::{decode::SingleValueDecoder, path::CodingPath, value::f64_to_i64_exact};

/// A [`SingleValueDecoder`] over a borrowed [`serde_json::Value`].
///
/// Integer attempts accept floating point numbers only when they are exactly representable as
/// `i64`, so `42.0` decodes as `Int(42)` while `42.5` and `1e300` fall through to `Double`.
#[derive(Debug, Clone)]
pub struct ValueDecoder<'a> {
    value: &'a Value,
    path: CodingPath,
}

impl<'a> ValueDecoder<'a> {
    /// A decoder positioned at the root of `value`.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            path: CodingPath::new(),
        }
    }

    /// A decoder positioned at `value`, reachable from the root through `path`.
    #[must_use]
    pub fn with_path(value: &'a Value, path: CodingPath) -> Self {
        Self { value, path }
    }
}

impl SingleValueDecoder for ValueDecoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn decode_nil(&self) -> bool {
        self.value.is_null()
    }

    fn decode_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    fn decode_i64(&self) -> Option<i64> {
        match self.value {
            Value::Number(number) => number_to_i64_exact(number),
            _ => None,
        }
    }

    fn decode_f64(&self) -> Option<f64> {
        match self.value {
            Value::Number(number) => number.as_f64(),
            _ => None,
        }
    }

    fn decode_string(&self) -> Option<String> {
        self.value.as_str().map(str::to_owned)
    }

    fn decode_seq(&self) -> Option<Vec<Self>> {
        let items = self.value.as_array()?;
        Some(
            items
                .iter()
                .enumerate()
                .map(|(idx, item)| ValueDecoder::with_path(item, self.path.join(idx)))
                .collect(),
        )
    }

    fn decode_map(&self) -> Option<Vec<(String, Self)>> {
        let object = self.value.as_object()?;
        Some(
            object
                .iter()
                .map(|(key, value)| {
                    (
                        key.clone(),
                        ValueDecoder::with_path(value, self.path.join(key.as_str())),
                    )
                })
                .collect(),
        )
    }
}

#[inline]
pub(crate) fn number_to_i64_exact(number: &Number) -> Option<i64> {
    number
        .as_i64()
        .or_else(|| number.as_f64().and_then(f64_to_i64_exact))
}
