//! Customer records and their transaction history.
//!
//! These types define the wire format of the persisted collection and of
//! export documents (`credit-customers-backup.json`), so field names are
//! camelCase and the transaction kind serializes as `"type"`. Business rules
//! (non-empty name, unique phone, balance bookkeeping) are enforced by the
//! ledger store, not here - a deserialized record is taken as-is.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CustomerId, Phone};

/// The direction of a balance-changing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// The customer bought on credit; the balance went up.
    Credit,
    /// The customer paid something back; the balance went down.
    Payment,
}

/// One signed balance-changing event.
///
/// Transactions form an append-only audit trail, oldest first. The stored
/// `amount` is the signed delta that was applied to the customer's balance,
/// so summing a customer's transactions reproduces their outstanding amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the event happened.
    pub date: DateTime<Utc>,
    /// Signed delta applied to the balance.
    pub amount: Decimal,
    /// Whether this was a purchase on credit or a payment.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Human-readable note (e.g. "Initial credit", "Payment received").
    pub note: String,
}

/// A customer with a running tab.
///
/// ## Invariants (maintained by the ledger store)
///
/// - `transactions` is never empty once the customer exists; creation always
///   inserts an initial credit entry.
/// - `outstanding_amount` equals the sum of all transaction amounts. The
///   balance field is authoritative for display; the log is the audit trail,
///   updated in lockstep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Opaque unique identifier, immutable after creation.
    pub id: CustomerId,
    /// Display name, non-empty.
    pub name: String,
    /// Phone number; uniqueness key at creation time.
    pub phone: Phone,
    /// Optional street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Net balance owed; positive means the customer owes the shop.
    pub outstanding_amount: Decimal,
    /// Date of the most recent purchase (not payment).
    pub last_purchase_date: NaiveDate,
    /// Append-only audit trail, oldest first.
    pub transactions: Vec<Transaction>,
}

impl Customer {
    /// The sum of all transaction amounts.
    ///
    /// Always equal to [`outstanding_amount`](Self::outstanding_amount) for
    /// records produced by the ledger store; exposed so callers and tests
    /// can check the invariant on imported data.
    #[must_use]
    pub fn transaction_total(&self) -> Decimal {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// The most recent transaction, if any.
    #[must_use]
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Whether this customer matches a search term.
    ///
    /// Names match case-insensitively; phone numbers match as a
    /// case-sensitive substring. The empty term matches everything.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.phone.contains(term)
    }
}
