//! Read-only views over a [`JsonValue`].
//!
//! Every accessor is total: a case mismatch, a lossy conversion or an out-of-range lookup
//! yields `None`.
use crate::value::{
    f64_to_i64_exact, f64_to_isize_exact, parse_float, parse_integer, JsonValue, Object,
};

impl JsonValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            JsonValue::Object(object) => Some(object),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Native-width integer view.
    ///
    /// * `Int` converts when it fits `isize`, which always holds on 64-bit targets.
    /// * `Double` converts only if it is finite, has no fractional part and is exactly
    ///   representable. `Double(i64::MAX as f64)` is out of range, `Double(i64::MIN as f64)` is not.
    /// * `String` converts only if the whole string is an integer literal within range.
    #[must_use]
    pub fn as_int(&self) -> Option<isize> {
        match self {
            JsonValue::Int(value) => isize::try_from(*value).ok(),
            JsonValue::Double(value) => f64_to_isize_exact(*value),
            JsonValue::String(value) => parse_integer(value),
            _ => None,
        }
    }

    /// 64-bit integer view. Same rules as [`JsonValue::as_int`] against the `i64` range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Int(value) => Some(*value),
            JsonValue::Double(value) => f64_to_i64_exact(*value),
            JsonValue::String(value) => parse_integer(value),
            _ => None,
        }
    }

    /// Floating point view. Integers widen, strings must parse as a whole.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Int(value) => Some(*value as f64),
            JsonValue::Double(value) => Some(*value),
            JsonValue::String(value) => parse_float(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// `true` for both `Int` and `Double`.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Int(_) | JsonValue::Double(_))
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Number of elements or members. `None` for scalars.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            JsonValue::Array(items) => Some(items.len()),
            JsonValue::Object(object) => Some(object.len()),
            _ => None,
        }
    }

    /// Whether an array or object has no elements. `None` for scalars.
    #[must_use]
    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }

    /// Looks up an object member by key or an array element by position.
    ///
    /// ```rust
    /// use json_value::JsonValue;
    ///
    /// let value = JsonValue::object([("tags", JsonValue::from(vec!["a".into(), "b".into()]))])?;
    /// assert_eq!(value.get("tags").and_then(|tags| tags.get(1)), Some(&JsonValue::from("b")));
    /// assert_eq!(value.get("missing"), None);
    /// assert_eq!(value.get(0), None);
    /// # Ok::<(), json_value::DuplicateKeyError>(())
    /// ```
    #[must_use]
    pub fn get<I: Index>(&self, index: I) -> Option<&JsonValue> {
        index.index_into(self)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// A type that can be used to look up a child of a [`JsonValue`].
///
/// Implemented for `usize` (array positions) and `str`/`String` (object keys). Sealed.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue>;
}

impl Index for usize {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        match value {
            JsonValue::Array(items) => items.get(*self),
            _ => None,
        }
    }
}

impl Index for str {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        match value {
            JsonValue::Object(object) => object.get(self),
            _ => None,
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        self[..].index_into(value)
    }
}

impl<T> Index for &T
where
    T: ?Sized + Index,
{
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        (**self).index_into(value)
    }
}
