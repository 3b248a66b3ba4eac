//! Key-value backends for persisted blobs.
//!
//! ## On-disk layout
//!
//! [`FileStore`] keeps one file per key:
//!
//! ```text
//! <base_dir>/
//! ├── saved_predictions.json
//! └── user_settings.json
//! ```
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crash mid-write leaves the previous value intact.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "taro";

/// Platform data directory for Taro, falling back to the working directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Synchronous byte-blob storage addressed by string keys.
pub trait KeyValueStore {
    /// Read the blob stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &[u8]) -> io::Result<()>;

    /// Delete the blob under `key`. Absent keys are not an error.
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Filesystem-backed store, one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    /// Use `base` as the storage directory. It is created on first write.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Storage directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        std::fs::create_dir_all(&self.base)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
