//! Settings persistence: a trait over the raw document plus the file-backed
//! and in-memory implementations.

use std::path::{Path, PathBuf};
use std::{fs, io};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
    #[error("failed to read settings document: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write settings document: {0}")]
    Write(#[source] io::Error),
}

/// Key-value persistence for the settings document. Implementations hold one
/// opaque text blob; interpretation belongs to [`crate::Settings`].
pub trait SettingsStore {
    /// The persisted document, or `None` when nothing was ever saved.
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&mut self, document: &str) -> Result<(), StoreError>;
}

/// Settings document in a JSON file, parent directories created on demand.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/tintsmith/settings.json`.
    pub fn default_location() -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::new(dir.join("tintsmith").join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(doc) => Ok(Some(doc)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read(e)),
        }
    }

    fn write(&mut self, document: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }
        fs::write(&self.path, document).map_err(StoreError::Write)
    }
}

/// In-memory store for tests and previews. `failing()` builds one whose
/// writes always error, for exercising the fire-and-forget save path.
#[derive(Default)]
pub struct MemoryStore {
    document: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            document: None,
            fail_writes: true,
        }
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl SettingsStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.document.clone())
    }

    fn write(&mut self, document: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write(io::Error::other("write disabled")));
        }
        self.document = Some(document.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_store_reads_none_before_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("settings.json"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn file_store_round_trips_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("settings.json"));
        store.write("{\"enabled\":true}").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("{\"enabled\":true}"));

        store.write("{}").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert!(store.read().unwrap().is_none());
        store.write("doc").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("doc"));
    }

    #[test]
    fn failing_memory_store_rejects_writes() {
        let mut store = MemoryStore::failing();
        assert!(store.write("doc").is_err());
        assert!(store.read().unwrap().is_none());
    }
}
