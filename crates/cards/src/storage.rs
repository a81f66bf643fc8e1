//! Storage backend seam for the card store.
//!
//! Rather than an ambient storage singleton, the store takes an explicit
//! [`Storage`] backend: get/set/remove on a namespaced key. Calls are
//! synchronous - blobs are small and both implementations complete in
//! microseconds to low milliseconds.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (file backend).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A concurrent writer panicked while holding the lock (memory backend).
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A namespaced key/value backend holding UTF-8 blobs.
pub trait Storage: Send + Sync {
    /// Read the blob at `key`, or `None` if nothing was ever stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read at all;
    /// missing data is not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the blob at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the blob at `key`. Returns whether a value was present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the delete fails.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

/// In-memory backend. The fake used by tests, and what the portal runs on in
/// demo mode (nothing survives a restart).
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.remove(key).is_some())
    }
}

/// File-backed backend: one `<key>.json` file per key under a base directory.
///
/// Writes go through a temporary file followed by a rename so a crashed
/// process never leaves a half-written blob behind.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a backend rooted at `base_dir`. The directory is created on
    /// first write, not here.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory this backend stores blobs in.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir)?;
        let path = self.path_for(key);
        let tmp = self.base_dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").expect("get"), None);

        storage.set("k", "v1").expect("set");
        assert_eq!(storage.get("k").expect("get").as_deref(), Some("v1"));

        storage.set("k", "v2").expect("overwrite");
        assert_eq!(storage.get("k").expect("get").as_deref(), Some("v2"));

        assert!(storage.remove("k").expect("remove"));
        assert!(!storage.remove("k").expect("second remove"));
        assert_eq!(storage.get("k").expect("get"), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = JsonFileStorage::new(dir.path());

        assert_eq!(storage.get("cards").expect("get"), None);
        storage.set("cards", "[]").expect("set");
        assert_eq!(storage.get("cards").expect("get").as_deref(), Some("[]"));

        // The blob lands as <key>.json with no temp file left behind
        assert!(dir.path().join("cards.json").exists());
        assert!(!dir.path().join(".cards.json.tmp").exists());

        assert!(storage.remove("cards").expect("remove"));
        assert!(!storage.remove("cards").expect("second remove"));
    }

    #[test]
    fn test_file_storage_separate_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = JsonFileStorage::new(dir.path());
        storage.set("a", "1").expect("set a");
        storage.set("b", "2").expect("set b");
        assert_eq!(storage.get("a").expect("get").as_deref(), Some("1"));
        assert_eq!(storage.get("b").expect("get").as_deref(), Some("2"));
    }
}
