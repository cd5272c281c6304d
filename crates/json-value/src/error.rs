use core::fmt;
use std::borrow::Cow;

use crate::path::CodingPath;

/// The input did not match any case of [`JsonValue`](crate::JsonValue).
///
/// Raised once, after every attempt of the decode cascade failed. Individual failed attempts are
/// never reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    path: CodingPath,
    message: Cow<'static, str>,
}

impl DecodeError {
    pub(crate) fn type_mismatch(path: CodingPath) -> Self {
        Self {
            path,
            message: Cow::Borrowed("Unable to decode JsonValue"),
        }
    }

    /// Location of the value that could not be decoded.
    #[must_use]
    pub fn path(&self) -> &CodingPath {
        &self.path
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            f.write_str(&self.message)
        } else {
            write!(f, "{} at {}", self.message, self.path)
        }
    }
}

impl std::error::Error for DecodeError {}

/// An object literal listed the same key more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError {
    key: String,
}

impl DuplicateKeyError {
    pub(crate) fn new(key: String) -> Self {
        Self { key }
    }

    /// The repeated key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duplicate key '{}' in object literal", self.key)
    }
}

impl std::error::Error for DuplicateKeyError {}

/// Errors returned by the text entry points.
#[derive(Debug)]
pub enum Error {
    /// The input is not valid JSON.
    Syntax(serde_json::Error),
    /// The input is valid JSON but could not be decoded.
    Decode(DecodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(error) => write!(f, "Invalid JSON: {error}"),
            Error::Decode(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(error) => Some(error),
            Error::Decode(error) => Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Syntax(error)
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        Error::Decode(error)
    }
}
