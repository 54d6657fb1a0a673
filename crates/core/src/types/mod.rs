//! Core types for Slate.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod amount;
pub mod customer;
pub mod id;
pub mod phone;
pub mod template;

pub use amount::format_amount;
pub use customer::{Customer, Transaction, TransactionKind};
pub use id::{CustomerId, CustomerIdError};
pub use phone::{Phone, PhoneError};
pub use template::ReminderTemplate;
