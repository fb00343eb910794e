//! Record identifiers of the form `<prefix>-<epochMillis>-<suffix>`.
//!
//! The suffix is a short random base-36 string, so two records created in
//! the same millisecond still get distinct identifiers.

use std::borrow::Borrow;
use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alphabet used for the random suffix.
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix.
pub const SUFFIX_LEN: usize = 9;

/// Identifier of a persisted notification or report history record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh identifier stamped with `at`.
    pub fn generate(prefix: &str, at: DateTime<Utc>) -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
            .collect();
        Self(format!("{prefix}-{}-{suffix}", at.timestamp_millis()))
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the leading prefix segment (e.g. `"rel"`).
    pub fn prefix(&self) -> Option<&str> {
        self.0.split('-').next().filter(|p| !p.is_empty())
    }

    /// Return the embedded millisecond timestamp, if the identifier is well formed.
    pub fn timestamp_millis(&self) -> Option<i64> {
        let mut parts = self.0.rsplitn(3, '-');
        let _suffix = parts.next()?;
        parts.next()?.parse().ok()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for RecordId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RecordId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
