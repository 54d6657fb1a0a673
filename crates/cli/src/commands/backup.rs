//! Backup commands: export and import of the whole collection.
//!
//! # Usage
//!
//! ```bash
//! slate export
//! slate export --out ~/backups/tabs.json
//! slate import credit-customers-backup.json
//! ```
//!
//! Import replaces the current collection wholesale; there is no merge.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use slate_ledger::{Ledger, LedgerError};

use super::confirm;

/// Errors that can occur during backup operations.
#[derive(Debug, Error)]
pub enum BackupError {
    /// Reading or writing the backup file failed.
    #[error("backup file error: {0}")]
    Io(#[from] std::io::Error),

    /// The ledger rejected the operation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Write the full collection to `out`.
///
/// # Errors
///
/// Returns [`BackupError::Io`] if the file cannot be written.
#[allow(clippy::print_stdout)]
pub fn export(ledger: &Ledger, out: &Path) -> Result<(), BackupError> {
    let document = ledger.export_all()?;
    fs::write(out, &document)?;
    println!("Exported {} customers to {}", ledger.len(), out.display());
    Ok(())
}

/// Replace the collection from a backup file, after confirmation.
///
/// # Errors
///
/// Returns [`BackupError::Io`] if the file cannot be read, or the ledger's
/// format error if the document is not an array of customer records.
#[allow(clippy::print_stdout)]
pub fn import(ledger: &mut Ledger, path: &Path, yes: bool) -> Result<(), BackupError> {
    let document = fs::read_to_string(path)?;

    // Count records up front so the prompt can say what is about to happen.
    // A document that is not an array skips the prompt; import_all reports
    // the format error.
    let incoming = serde_json::from_str::<serde_json::Value>(&document)
        .ok()
        .as_ref()
        .and_then(serde_json::Value::as_array)
        .map(Vec::len);

    if let Some(count) = incoming {
        let prompt =
            format!("Import {count} customers? This will replace your current data.");
        if !yes && !confirm(&prompt)? {
            warn!("Import cancelled; existing data untouched");
            return Ok(());
        }
    }

    let count = ledger.import_all(&document)?;
    println!("Imported {count} customers from {}", path.display());
    Ok(())
}
