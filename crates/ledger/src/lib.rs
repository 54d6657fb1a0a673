//! Slate Ledger - the customer tab store.
//!
//! This crate owns everything between the domain types in `slate-core` and
//! whatever surface drives them (currently the CLI):
//!
//! - [`store`] - The [`Ledger`]: add/adjust/delete operations, search,
//!   and wholesale import/export of the collection
//! - [`kv`] - Flat key-value persistence of JSON blobs, with an on-disk
//!   store for production and an in-memory one for tests
//! - [`reminder`] - Hand-off of rendered reminder messages as `sms:` URIs
//! - [`config`] - Environment-based configuration
//!
//! # Design
//!
//! The ledger is an explicit object owned by the application root and passed
//! down by reference - there is no ambient global state. Every committed
//! mutation synchronously rewrites the backing blob; with a single writer
//! that makes each operation atomic from the caller's perspective.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod kv;
pub mod reminder;
pub mod store;

pub use config::SlateConfig;
pub use error::LedgerError;
pub use kv::{FileStore, KvStore, MemoryStore, StorageError};
pub use store::{CustomerDraft, Ledger};
