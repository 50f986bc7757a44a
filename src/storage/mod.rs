//! Key/value blob persistence consumed by the guide store.
//!
//! Storage backends supply raw string blobs per namespace key; the
//! [`load`]/[`save`] helpers layer JSON (de)serialization on top and apply
//! the swallow-and-log fault policy: persistence faults never propagate to
//! the store or its caller.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod file;
pub mod memory;

/// Namespace key holding the guide collection.
pub const GUIDES_KEY: &str = "guides";
/// Namespace key holding the category collection.
pub const CATEGORIES_KEY: &str = "categories";

/// Errors reported by storage backends.
///
/// These surface only to the [`load`]/[`save`] helpers, which log and
/// swallow them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization failure: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Raw string-blob storage keyed by namespace.
pub trait StateStorage {
    /// Returns the blob stored under `key`, or `None` if nothing was ever
    /// written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persists `value` under `key`, replacing any previous blob.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Outcome of reading a namespace from storage.
///
/// `Absent` (never saved) and `Unreadable` (saved but unparseable) are
/// distinguished here even though hydration treats them identically; only
/// the unreadable case is worth a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Absent,
    Unreadable,
}

impl<T> LoadOutcome<T> {
    /// Collapses the two non-loaded outcomes into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Absent | Self::Unreadable => None,
        }
    }
}

/// Reads and parses the value persisted under `key`.
///
/// Backend and parse faults are logged and collapse into
/// [`LoadOutcome::Unreadable`]; they never propagate.
pub fn load<S, T>(storage: &S, key: &str) -> LoadOutcome<T>
where
    S: StateStorage + ?Sized,
    T: DeserializeOwned,
{
    match storage.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => LoadOutcome::Loaded(value),
            Err(e) => {
                log::warn!("could not parse state for namespace {key}: {e}");
                LoadOutcome::Unreadable
            }
        },
        Ok(None) => LoadOutcome::Absent,
        Err(e) => {
            log::warn!("could not load state for namespace {key}: {e}");
            LoadOutcome::Unreadable
        }
    }
}

/// Serializes and persists `value` under `key`, fire-and-forget.
///
/// Faults are logged and swallowed; the in-memory state stays the only copy
/// of truth until the next successful save.
pub fn save<S, T>(storage: &mut S, key: &str, value: &T)
where
    S: StateStorage + ?Sized,
    T: Serialize,
{
    let serialized = match serde_json::to_string(value) {
        Ok(serialized) => serialized,
        Err(e) => {
            log::error!("could not serialize state for namespace {key}: {e}");
            return;
        }
    };
    if let Err(e) = storage.write(key, &serialized) {
        log::error!("could not save state for namespace {key}: {e}");
    }
}
