//! Snapshot storage trait for pluggable durable key/value backends.

use crate::result::AppResult;

/// Durable string storage addressed by key, in the manner of browser
/// local storage.
///
/// Each store owns exactly one key and writes its whole serialized
/// snapshot there on every mutation. Implementations live in
/// `techdengue-store` (local directory, in-memory).
pub trait SnapshotStorage: std::fmt::Debug {
    /// Return the backend type name (e.g., "local", "memory").
    fn storage_type(&self) -> &str;

    /// Read the value under `key`. Returns `None` if nothing was stored.
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value under `key`.
    fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete the value under `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> AppResult<()>;
}
