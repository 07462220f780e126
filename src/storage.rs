//! Key-value persistence for stats and saved rounds
//!
//! The engine only talks to the [`Storage`] trait. Values are opaque strings
//! (JSON in practice) and each value is written in one call, so a record is
//! either fully stored or not stored at all.

use crate::game::Mode;
use directories::ProjectDirs;
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

/// Errors raised by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
}

/// Platform-neutral key-value store
pub trait Storage {
    /// Read the value stored under `key`, `None` if absent
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Logical keys used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// `stats:{len}`
    Stats { word_length: usize },
    /// `round:{len}:{mode}:{day}`
    Round {
        word_length: usize,
        mode: Mode,
        day: i64,
    },
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stats { word_length } => write!(f, "stats:{word_length}"),
            Self::Round {
                word_length,
                mode,
                day,
            } => write!(f, "round:{word_length}:{mode}:{day}"),
        }
    }
}

/// Volatile storage, for tests and practice sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON file per key inside a directory
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Use `root` as the storage directory, creating it if needed
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Platform data directory for the application
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "letreco").map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{file_name}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        trace!(key, path = %path.display(), "stored");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_formats() {
        assert_eq!(StorageKey::Stats { word_length: 5 }.to_string(), "stats:5");
        assert_eq!(
            StorageKey::Round {
                word_length: 6,
                mode: Mode::Daily,
                day: 657
            }
            .to_string(),
            "round:6:daily:657"
        );
    }

    #[test]
    fn memory_round_trip_and_overwrite() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read("stats:5").unwrap(), None);
        storage.write("stats:5", "{}").unwrap();
        storage.write("stats:5", "{\"v\":1}").unwrap();
        assert_eq!(storage.read("stats:5").unwrap().as_deref(), Some("{\"v\":1}"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path().join("nested")).unwrap();
        storage.write("round:5:daily:10", "[1,2]").unwrap();

        let reopened = FileStorage::open(dir.path().join("nested")).unwrap();
        assert_eq!(
            reopened.read("round:5:daily:10").unwrap().as_deref(),
            Some("[1,2]")
        );
        assert_eq!(reopened.read("stats:5").unwrap(), None);
    }

    #[test]
    fn file_storage_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();
        storage.write("stats:4", "{}").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["stats_4.json".to_string()]);
    }
}
