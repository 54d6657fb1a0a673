//! Flat key-value persistence.
//!
//! The ledger persists as two named JSON blobs: the customer collection and
//! the reminder template. [`KvStore`] is the seam between the ledger and
//! wherever those blobs live - [`FileStore`] keeps one file per key under a
//! data directory, [`MemoryStore`] backs tests.
//!
//! There is no partial-write or transaction concept: each value is read and
//! rewritten whole by a single writer. If multiple processes write the same
//! directory, last writer wins.

use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from the backing key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a blob failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A durable string-keyed blob store.
pub trait KvStore {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the read fails for any reason other
    /// than the key being absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the write fails.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
