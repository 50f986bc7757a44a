//! Helpers for integration tests.

use guideflow::storage::file::FileStorage;
use tempfile::TempDir;

/// Temporary data directory used in integration tests.
pub struct TestDir {
    tempdir: TempDir,
    storage: FileStorage,
}

impl TestDir {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let tempdir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::new(tempdir.path());
        TestDir { tempdir, storage }
    }

    pub fn storage(&self) -> FileStorage {
        self.storage.clone()
    }

    pub fn path(&self) -> &std::path::Path {
        self.tempdir.path()
    }
}
