use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Result;

/// The persistent key-value substrate behind a [`crate::StudyStore`].
///
/// Consumers depend on this seam rather than on any ambient global state;
/// the store is handed a backend explicitly at construction.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`, `None` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Disk-backed storage: one JSON document per key under a data directory.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.entry_path(key), value)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral use.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend for execution contexts without persistent storage.
///
/// Reads see an empty store and writes are dropped, so read operations
/// degrade to empty sequences and mutations become silent no-ops rather
/// than errors.
pub struct DetachedBackend;

impl StorageBackend for DetachedBackend {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, key: &str, _value: &str) -> Result<()> {
        tracing::debug!(key, "no storage context, dropping write");
        Ok(())
    }
}
