//! File-backed store.
//!
//! Each key is stored as `<dir>/<key>.json`. Writes go to `<key>.json.tmp`,
//! are synced to disk and then renamed over the target, so a crash mid-write
//! leaves the previous record intact. Each write holds an exclusive OS lock on
//! `<dir>/.lock`, so two processes sharing a data directory never interleave
//! the bytes of one record. The lock covers a single `put` only: a caller that
//! reads, modifies and writes back can still overwrite another process's write.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use super::{validate_key, KeyValueStore};
use crate::errors::{StudyError, StudyResult};

const LOCK_FILE_NAME: &str = ".lock";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

/// Holds the directory lock; released when the file handle is dropped.
struct DirLock {
    _file: File,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StudyResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| StudyError::file_error("create directory", dir.display().to_string(), e.to_string()))?;
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the record for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn lock(&self) -> StudyResult<DirLock> {
        let lock_path = self.dir.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| StudyError::file_error("create lock", lock_path.display().to_string(), e.to_string()))?;

        file.lock_exclusive().map_err(|_| StudyError::FileLocked {
            path: lock_path.display().to_string(),
        })?;

        Ok(DirLock { _file: file })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StudyResult<Option<Vec<u8>>> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StudyError::file_error("read", path.display().to_string(), e.to_string())),
        }
    }

    fn put(&mut self, key: &str, bytes: Vec<u8>) -> StudyResult<()> {
        validate_key(key)?;
        let _lock = self.lock()?;

        let path = self.path_for(key);
        let tmp_path = self.dir.join(format!("{}.json.tmp", key));

        let mut tmp_file = File::create(&tmp_path).map_err(|e| {
            StudyError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.write_all(&bytes).map_err(|e| {
            StudyError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.sync_all().map_err(|e| {
            StudyError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
        })?;
        drop(tmp_file);

        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            StudyError::file_error("rename to final", path.display().to_string(), e.to_string())
        })?;

        debug!(key, path = %path.display(), bytes = bytes.len(), "Record written");
        Ok(())
    }
}
