//! # Key-Value Persistence
//!
//! The progress tracker persists through the [`KeyValueStore`] trait so the
//! backend can be swapped:
//!
//! - [`MemoryStore`]: in-process `HashMap`, for tests and embedders
//! - [`FileStore`]: one JSON file per key, atomic writes under an OS lock
//!
//! Keys are restricted to ASCII letters, digits, `_` and `-` so that a key
//! always maps to a single file name.
//!
//! ## Example
//!
//! ```rust
//! use study_core::storage::{KeyValueStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! store.put("study_progress", b"{}".to_vec())?;
//! assert_eq!(store.get("study_progress")?, Some(b"{}".to_vec()));
//! # Ok::<(), study_core::errors::StudyError>(())
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod file;

use std::collections::HashMap;

use crate::errors::{StudyError, StudyResult};

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

/// Byte-oriented persistence backend.
pub trait KeyValueStore {
    /// Read the record stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> StudyResult<Option<Vec<u8>>>;

    /// Overwrite the record stored under `key`.
    fn put(&mut self, key: &str, bytes: Vec<u8>) -> StudyResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StudyResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, bytes: Vec<u8>) -> StudyResult<()> {
        (**self).put(key, bytes)
    }
}

/// Reject keys that are empty or contain anything outside `[A-Za-z0-9_-]`.
pub fn validate_key(key: &str) -> StudyResult<()> {
    if key.is_empty() {
        return Err(StudyError::invalid_input("key", key, "Key cannot be empty"));
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(StudyError::invalid_input(
            "key",
            key,
            "Key may only contain ASCII letters, digits, '_' and '-'",
        ));
    }
    Ok(())
}

// ============================================================================
// In-memory backend
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StudyResult<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &str, bytes: Vec<u8>) -> StudyResult<()> {
        validate_key(key)?;
        self.records.insert(key.to_string(), bytes);
        Ok(())
    }
}
