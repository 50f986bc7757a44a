//! File-backed storage: one JSON document per namespace key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::storage::{StateStorage, StorageError};

/// Stores each namespace as `<data_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `data_dir`. The directory is created
    /// lazily on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Creates a storage rooted at the configured data directory.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    /// Directory holding the namespace files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl StateStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
