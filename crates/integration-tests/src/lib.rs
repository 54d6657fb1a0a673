//! Integration tests for Slate.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p slate-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `ledger_lifecycle` - Mutations persisted through a real data directory
//! - `backup_round_trip` - Export/import through actual files
//!
//! Every test works against a throwaway temp directory, so the suite needs
//! no setup and leaves nothing behind.

use tempfile::TempDir;

use slate_ledger::{FileStore, Ledger};

/// A ledger bound to a throwaway on-disk data directory.
///
/// Keep the [`TestLedger`] alive for as long as the data should exist; call
/// [`TestLedger::open`] again to simulate a process restart over the same
/// directory.
pub struct TestLedger {
    dir: TempDir,
}

impl TestLedger {
    /// Create a fresh empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created - test setup only.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Open a `Ledger` over the data directory, as the CLI would at startup.
    ///
    /// # Panics
    ///
    /// Panics if the persisted data cannot be loaded.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn open(&self) -> Ledger {
        Ledger::open(Box::new(FileStore::new(self.dir.path()))).unwrap()
    }

    /// Path of the data directory, for tests that inspect the blobs.
    #[must_use]
    pub fn data_dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Default for TestLedger {
    fn default() -> Self {
        Self::new()
    }
}
