//! Local directory snapshot storage.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use techdengue_core::error::{AppError, ErrorKind};
use techdengue_core::result::AppResult;
use techdengue_core::traits::SnapshotStorage;

/// Stores each key as `<root>/<key>.json`.
///
/// Writes go to a temporary sibling file first and are then renamed over
/// the target, so a crash mid-write never leaves a truncated snapshot.
#[derive(Debug, Clone)]
pub struct LocalSnapshotStorage {
    /// Directory holding the snapshot files.
    root: PathBuf,
}

impl LocalSnapshotStorage {
    /// Create a storage rooted at `root_path`, creating the directory if needed.
    pub fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Root directory of this storage.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a key to its snapshot file.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(AppError::validation(format!(
                "Invalid storage key '{key}': use letters, digits, '-', '_' or '.'"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl SnapshotStorage for LocalSnapshotStorage {
    fn storage_type(&self) -> &str {
        "local"
    }

    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.resolve(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read snapshot: {}", path.display()),
                e,
            )),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write snapshot: {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace snapshot: {}", path.display()),
                e,
            )
        })?;

        debug!(key, bytes = value.len(), "Snapshot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to remove snapshot: {}", path.display()),
                e,
            )),
        }
    }
}
