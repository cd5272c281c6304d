use std::borrow::Cow;

use super::{JsonValue, Object};
use crate::error::DuplicateKeyError;

macro_rules! from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(n: $ty) -> Self {
                    JsonValue::Int(i64::from(n))
                }
            }
        )*
    };
}

from_integer! {
    i8 i16 i32 i64
    u8 u16 u32
}

impl From<isize> for JsonValue {
    fn from(n: isize) -> Self {
        match i64::try_from(n) {
            Ok(n) => JsonValue::Int(n),
            #[allow(clippy::cast_precision_loss)]
            Err(_) => JsonValue::Double(n as f64),
        }
    }
}

impl From<f32> for JsonValue {
    fn from(f: f32) -> Self {
        JsonValue::Double(f64::from(f))
    }
}

impl From<f64> for JsonValue {
    fn from(f: f64) -> Self {
        JsonValue::Double(f)
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_owned())
    }
}

impl<'a> From<Cow<'a, str>> for JsonValue {
    fn from(s: Cow<'a, str>) -> Self {
        JsonValue::String(s.into_owned())
    }
}

impl From<()> for JsonValue {
    fn from((): ()) -> Self {
        JsonValue::Null
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(JsonValue::Null, Into::into)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(items: Vec<JsonValue>) -> Self {
        JsonValue::Array(items)
    }
}

impl From<Object> for JsonValue {
    fn from(object: Object) -> Self {
        JsonValue::Object(object)
    }
}

impl FromIterator<JsonValue> for JsonValue {
    fn from_iter<T: IntoIterator<Item = JsonValue>>(iter: T) -> Self {
        JsonValue::Array(iter.into_iter().collect())
    }
}

/// Same as [`JsonValue::object`].
impl TryFrom<Vec<(String, JsonValue)>> for JsonValue {
    type Error = DuplicateKeyError;

    fn try_from(pairs: Vec<(String, JsonValue)>) -> Result<Self, Self::Error> {
        JsonValue::object(pairs)
    }
}
