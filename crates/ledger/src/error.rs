//! Ledger error types.
//!
//! Every fallible ledger operation returns [`LedgerError`]. The taxonomy
//! mirrors how errors are handled: validation and import-format errors are
//! reported to the user and abort the operation with no state change;
//! storage errors surface the underlying I/O failure; an unknown id on
//! adjust/delete is *not* an error (those operations report it through their
//! `Ok(bool)` return instead).

use slate_core::Phone;
use thiserror::Error;

use crate::kv::StorageError;

/// Errors from ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A required field was missing or empty on add.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the field (matches the draft field name).
        field: &'static str,
    },

    /// The amount input could not be parsed as a decimal.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// The initial credit on add was negative.
    #[error("initial credit cannot be negative: {0}")]
    NegativeInitialCredit(rust_decimal::Decimal),

    /// A customer with this phone number already exists.
    #[error("a customer with phone number {0} already exists")]
    DuplicatePhone(Phone),

    /// An import document did not have the expected shape.
    #[error("invalid import document: {0}")]
    ImportFormat(String),

    /// Persisted data could not be decoded.
    #[error("persisted data is corrupt: {0}")]
    DataCorruption(String),

    /// The backing key-value store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The collection could not be serialized for persistence or export.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
