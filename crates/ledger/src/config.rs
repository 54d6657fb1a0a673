//! Slate configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SLATE_DATA_DIR` - Directory holding the persisted ledger blobs
//!   (default: `.slate` under the current directory)
//! - `RUST_LOG` - Log filter for the CLI (read by the binary, not here)

use std::path::PathBuf;

/// Slate application configuration.
#[derive(Debug, Clone)]
pub struct SlateConfig {
    /// Directory where the key-value blobs live.
    pub data_dir: PathBuf,
}

impl SlateConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a default, so loading cannot fail.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("SLATE_DATA_DIR", ".slate"));

        Self { data_dir }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
