//! Raw stored representation of a caller-supplied record.

use serde::de::DeserializeOwned;

use crate::error::{DomainError, DomainResult};

/// Serialized record exactly as it sits in the store.
///
/// Reads hand this back untouched; decoding is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord(String);

impl StoredRecord {
    /// Wrap already-serialized text
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw text
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Decode the stored text into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> DomainResult<T> {
        serde_json::from_str(&self.0).map_err(|e| DomainError::malformed(e.to_string()))
    }
}

impl From<String> for StoredRecord {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for StoredRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoredRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
