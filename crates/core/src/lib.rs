//! Slate Core - Shared types library.
//!
//! This crate provides common types used across all Slate components:
//! - `ledger` - The customer tab store, persistence, and import/export
//! - `cli` - Command-line surface for the shop owner
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! persistence, no clock access beyond what callers pass in. This keeps it
//! lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Customer records, transactions, validated phone numbers,
//!   and the reminder template renderer

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
