use core::fmt;

use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serialize, Serializer,
};

use crate::value::JsonValue;

impl JsonValue {
    /// Writes the value into `serializer`, one branch per case.
    ///
    /// Object members are written in key order, so the output is deterministic.
    ///
    /// # Errors
    ///
    /// Only errors reported by the serializer itself, returned unchanged.
    pub fn encode<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(value) => serializer.serialize_bool(*value),
            JsonValue::Int(value) => serializer.serialize_i64(*value),
            JsonValue::Double(value) => serializer.serialize_f64(*value),
            JsonValue::String(value) => serializer.serialize_str(value),
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(object) => {
                let mut members: Vec<_> = object.iter().collect();
                members.sort_unstable_by(|(k1, _), (k2, _)| k1.cmp(k2));
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (key, value) in members {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }

    /// Renders the value as indented JSON text.
    #[must_use]
    pub fn to_string_pretty(&self) -> String {
        // Writing into a `Vec` can not fail and every case is representable
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.encode(serializer)
    }
}

/// Compact JSON text, or indented JSON with `{:#}`. Non-finite doubles render as `null`.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = if f.alternate() {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
        .map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
