//! The customer tab store.
//!
//! [`Ledger`] owns the in-memory customer collection and the reminder
//! template, and rewrites the backing blobs after every committed mutation.
//! It is created once by the application root ([`Ledger::open`]) and passed
//! by reference to whatever needs read or mutate access.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use slate_core::{Customer, CustomerId, Phone, ReminderTemplate, Transaction, TransactionKind};

use crate::error::{LedgerError, Result};
use crate::kv::KvStore;

/// Storage key for the customer collection blob.
pub const CUSTOMERS_KEY: &str = "creditCustomers";

/// Storage key for the reminder template blob.
pub const TEMPLATE_KEY: &str = "reminderTemplate";

/// Input for [`Ledger::add_customer`].
///
/// Fields arrive as raw user input; validation and parsing happen in the
/// store so every caller gets the same rules.
#[derive(Debug, Clone, Default)]
pub struct CustomerDraft {
    /// Display name (required, non-empty).
    pub name: String,
    /// Phone number (required, unique across the collection).
    pub phone: String,
    /// Initial credit amount (required, non-negative decimal).
    pub amount: String,
    /// Optional street address.
    pub address: Option<String>,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Date of the last purchase; today when absent.
    pub last_purchase_date: Option<NaiveDate>,
}

/// The customer ledger.
///
/// Single-threaded and single-writer: operations are synchronous, and each
/// committed mutation persists the whole collection before returning.
pub struct Ledger {
    customers: Vec<Customer>,
    template: ReminderTemplate,
    store: Box<dyn KvStore>,
}

impl Ledger {
    /// Load the ledger from a key-value store.
    ///
    /// An absent customer blob means an empty collection; an absent template
    /// blob means the built-in default template.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Storage`] if the store cannot be read, or
    /// [`LedgerError::DataCorruption`] if the customer blob exists but does
    /// not decode.
    pub fn open(store: Box<dyn KvStore>) -> Result<Self> {
        let customers = match store.get(CUSTOMERS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                LedgerError::DataCorruption(format!("customer collection: {e}"))
            })?,
            None => Vec::new(),
        };

        let template = store
            .get(TEMPLATE_KEY)?
            .map_or_else(ReminderTemplate::default, ReminderTemplate::from);

        debug!(count = customers.len(), "Loaded ledger");

        Ok(Self {
            customers,
            template,
            store,
        })
    }

    /// Add a new customer with an initial credit.
    ///
    /// Assigns a fresh id, records a single `credit` transaction noted
    /// "Initial credit", and persists. Returns the created record.
    ///
    /// # Errors
    ///
    /// Fails without mutating anything when name, phone, or amount is
    /// missing, the amount does not parse or is negative, or another
    /// customer already has the same phone.
    pub fn add_customer(&mut self, draft: CustomerDraft) -> Result<Customer> {
        if draft.name.is_empty() {
            return Err(LedgerError::MissingField { field: "name" });
        }
        let phone = Phone::parse(&draft.phone)
            .map_err(|_| LedgerError::MissingField { field: "phone" })?;
        if draft.amount.is_empty() {
            return Err(LedgerError::MissingField { field: "amount" });
        }

        let amount: Decimal = draft
            .amount
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidAmount(draft.amount.clone()))?;
        if amount < Decimal::ZERO {
            return Err(LedgerError::NegativeInitialCredit(amount));
        }

        if self.customers.iter().any(|c| c.phone == phone) {
            return Err(LedgerError::DuplicatePhone(phone));
        }

        let now = Utc::now();
        let customer = Customer {
            id: CustomerId::new(),
            name: draft.name,
            phone,
            address: draft.address,
            notes: draft.notes,
            outstanding_amount: amount,
            last_purchase_date: draft.last_purchase_date.unwrap_or_else(|| now.date_naive()),
            transactions: vec![Transaction {
                date: now,
                amount,
                kind: TransactionKind::Credit,
                note: "Initial credit".to_string(),
            }],
        };

        self.customers.push(customer.clone());
        self.persist_customers()?;

        info!(customer = %customer.id, phone = %customer.phone, "Added customer");
        Ok(customer)
    }

    /// Apply a signed balance adjustment to a customer.
    ///
    /// A positive delta is a purchase on credit ("Additional purchase") and
    /// bumps the last-purchase date; anything else is a payment ("Payment
    /// received") and leaves the date alone. A zero delta is allowed and
    /// classified as a payment.
    ///
    /// Returns `Ok(false)` without touching anything when the id is unknown;
    /// adjusting an absent customer is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Storage`] or [`LedgerError::Serialization`] if
    /// persisting the updated collection fails.
    pub fn adjust_balance(&mut self, id: &CustomerId, delta: Decimal) -> Result<bool> {
        let kind = if delta > Decimal::ZERO {
            TransactionKind::Credit
        } else {
            TransactionKind::Payment
        };

        let Some(customer) = self.customers.iter_mut().find(|c| c.id == *id) else {
            debug!(customer = %id, "Balance adjustment for unknown id ignored");
            return Ok(false);
        };

        let now = Utc::now();
        customer.transactions.push(Transaction {
            date: now,
            amount: delta,
            kind,
            note: match kind {
                TransactionKind::Credit => "Additional purchase",
                TransactionKind::Payment => "Payment received",
            }
            .to_string(),
        });
        customer.outstanding_amount += delta;
        if delta > Decimal::ZERO {
            customer.last_purchase_date = now.date_naive();
        }
        let balance = customer.outstanding_amount;

        self.persist_customers()?;

        info!(customer = %id, %delta, %balance, "Adjusted balance");
        Ok(true)
    }

    /// Delete a customer by id.
    ///
    /// Removes the record outright - no tombstone, no cascade. Returns
    /// `Ok(false)` when the id is unknown (nothing to do, nothing persisted).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Storage`] or [`LedgerError::Serialization`] if
    /// persisting the updated collection fails.
    pub fn delete_customer(&mut self, id: &CustomerId) -> Result<bool> {
        let before = self.customers.len();
        self.customers.retain(|c| c.id != *id);

        if self.customers.len() == before {
            debug!(customer = %id, "Delete for unknown id ignored");
            return Ok(false);
        }

        self.persist_customers()?;
        info!(customer = %id, "Deleted customer");
        Ok(true)
    }

    /// Customers matching a search term, in insertion order.
    ///
    /// Names match case-insensitively, phone numbers as a case-sensitive
    /// substring. The empty term returns the whole collection.
    #[must_use]
    pub fn filter(&self, term: &str) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|c| c.matches_search(term))
            .collect()
    }

    /// The full collection, in insertion order.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Look up a customer by id.
    #[must_use]
    pub fn get(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == *id)
    }

    /// Number of customers in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Serialize the full collection as one JSON array document.
    ///
    /// The conventional filename for the result is
    /// `credit-customers-backup.json`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Serialization`] if encoding fails.
    pub fn export_all(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.customers)?)
    }

    /// Replace the whole collection from an exported document.
    ///
    /// The document must be a JSON array of customer records. On success the
    /// current collection is replaced wholesale and persisted; there is no
    /// merge and no duplicate-phone re-validation. Returns the number of
    /// records imported.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ImportFormat`] - leaving the existing
    /// collection untouched - when the document is not valid JSON, its
    /// top-level value is not an array, or a record does not match the
    /// customer shape.
    pub fn import_all(&mut self, document: &str) -> Result<usize> {
        let value: serde_json::Value = serde_json::from_str(document)
            .map_err(|e| LedgerError::ImportFormat(format!("not valid JSON: {e}")))?;

        if !value.is_array() {
            return Err(LedgerError::ImportFormat(
                "top-level value must be an array".to_string(),
            ));
        }

        let customers: Vec<Customer> = serde_json::from_value(value)
            .map_err(|e| LedgerError::ImportFormat(format!("bad customer record: {e}")))?;

        let count = customers.len();
        self.customers = customers;
        self.persist_customers()?;

        info!(count, "Imported customer collection");
        Ok(count)
    }

    /// The current reminder template.
    #[must_use]
    pub fn template(&self) -> &ReminderTemplate {
        &self.template
    }

    /// Replace the reminder template and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Storage`] if the write fails.
    pub fn set_template(&mut self, text: String) -> Result<()> {
        self.template = ReminderTemplate::from(text);
        self.store.put(TEMPLATE_KEY, self.template.as_str())?;
        info!("Updated reminder template");
        Ok(())
    }

    fn persist_customers(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.customers)?;
        self.store.put(CUSTOMERS_KEY, &blob)?;
        debug!(count = self.customers.len(), "Persisted customer collection");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use slate_core::template::DEFAULT_TEMPLATE;

    use crate::kv::MemoryStore;

    use super::*;

    fn empty_ledger() -> Ledger {
        Ledger::open(Box::new(MemoryStore::new())).unwrap()
    }

    fn draft(name: &str, phone: &str, amount: &str) -> CustomerDraft {
        CustomerDraft {
            name: name.to_string(),
            phone: phone.to_string(),
            amount: amount.to_string(),
            ..CustomerDraft::default()
        }
    }

    // ========== add_customer ==========

    #[test]
    fn test_add_creates_initial_credit_transaction() {
        let mut ledger = empty_ledger();
        let customer = ledger.add_customer(draft("John Doe", "5551234567", "100")).unwrap();

        assert_eq!(customer.outstanding_amount, Decimal::new(100, 0));
        assert_eq!(customer.transactions.len(), 1);
        assert_eq!(customer.transactions[0].kind, TransactionKind::Credit);
        assert_eq!(customer.transactions[0].note, "Initial credit");
        assert_eq!(customer.transaction_total(), customer.outstanding_amount);
    }

    #[test]
    fn test_add_missing_fields() {
        let mut ledger = empty_ledger();

        assert!(matches!(
            ledger.add_customer(draft("", "555", "10")),
            Err(LedgerError::MissingField { field: "name" })
        ));
        assert!(matches!(
            ledger.add_customer(draft("Jo", "", "10")),
            Err(LedgerError::MissingField { field: "phone" })
        ));
        assert!(matches!(
            ledger.add_customer(draft("Jo", "555", "")),
            Err(LedgerError::MissingField { field: "amount" })
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_accepts_any_non_empty_phone() {
        // Presence is the only phone rule on add, matching the duplicate
        // check's role as the real constraint.
        let mut ledger = empty_ledger();
        let customer = ledger.add_customer(draft("Jo", "555-CALL-NOW", "10")).unwrap();
        assert_eq!(customer.phone.as_str(), "555-CALL-NOW");
    }

    #[test]
    fn test_add_rejects_unparseable_amount() {
        let mut ledger = empty_ledger();
        assert!(matches!(
            ledger.add_customer(draft("Jo", "555", "ten dollars")),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_negative_initial_credit() {
        let mut ledger = empty_ledger();
        assert!(matches!(
            ledger.add_customer(draft("Jo", "555", "-5")),
            Err(LedgerError::NegativeInitialCredit(_))
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_zero_initial_credit_is_allowed() {
        let mut ledger = empty_ledger();
        let customer = ledger.add_customer(draft("Jo", "555", "0")).unwrap();
        assert_eq!(customer.outstanding_amount, Decimal::ZERO);
        assert_eq!(customer.transactions.len(), 1);
    }

    #[test]
    fn test_add_duplicate_phone_leaves_collection_unchanged() {
        let mut ledger = empty_ledger();
        ledger.add_customer(draft("Jo", "5551234567", "10")).unwrap();

        let result = ledger.add_customer(draft("Someone Else", "5551234567", "20"));
        assert!(matches!(result, Err(LedgerError::DuplicatePhone(_))));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.customers()[0].name, "Jo");
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut ledger = empty_ledger();
        let a = ledger.add_customer(draft("A", "111", "1")).unwrap();
        let b = ledger.add_customer(draft("B", "222", "1")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_add_defaults_last_purchase_date_to_today() {
        let mut ledger = empty_ledger();
        let customer = ledger.add_customer(draft("Jo", "555", "10")).unwrap();
        assert_eq!(customer.last_purchase_date, Utc::now().date_naive());
    }

    // ========== adjust_balance ==========

    #[test]
    fn test_adjust_positive_is_credit_and_bumps_purchase_date() {
        let mut ledger = empty_ledger();
        let mut customer = ledger.add_customer(draft("Jo", "555", "100")).unwrap();
        // Backdate so the bump is observable.
        let old_date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        if let Some(c) = ledger.customers.iter_mut().find(|c| c.id == customer.id) {
            c.last_purchase_date = old_date;
            customer = c.clone();
        }

        assert!(ledger.adjust_balance(&customer.id, Decimal::new(50, 0)).unwrap());

        let updated = ledger.get(&customer.id).unwrap();
        assert_eq!(updated.outstanding_amount, Decimal::new(150, 0));
        assert_eq!(updated.transactions.len(), 2);
        let last = updated.last_transaction().unwrap();
        assert_eq!(last.kind, TransactionKind::Credit);
        assert_eq!(last.note, "Additional purchase");
        assert_eq!(last.amount, Decimal::new(50, 0));
        assert_eq!(updated.last_purchase_date, Utc::now().date_naive());
        assert_eq!(updated.transaction_total(), updated.outstanding_amount);
    }

    #[test]
    fn test_adjust_negative_is_payment_and_keeps_purchase_date() {
        let mut ledger = empty_ledger();
        let customer = ledger.add_customer(draft("Jo", "555", "150")).unwrap();
        let original_date = customer.last_purchase_date;

        assert!(ledger.adjust_balance(&customer.id, Decimal::new(-30, 0)).unwrap());

        let updated = ledger.get(&customer.id).unwrap();
        assert_eq!(updated.outstanding_amount, Decimal::new(120, 0));
        let last = updated.last_transaction().unwrap();
        assert_eq!(last.kind, TransactionKind::Payment);
        assert_eq!(last.note, "Payment received");
        assert_eq!(updated.last_purchase_date, original_date);
    }

    #[test]
    fn test_adjust_zero_delta_is_classified_as_payment() {
        // The sign check only treats strictly-positive deltas as credit.
        let mut ledger = empty_ledger();
        let customer = ledger.add_customer(draft("Jo", "555", "100")).unwrap();

        assert!(ledger.adjust_balance(&customer.id, Decimal::ZERO).unwrap());

        let updated = ledger.get(&customer.id).unwrap();
        assert_eq!(updated.outstanding_amount, Decimal::new(100, 0));
        assert_eq!(
            updated.last_transaction().unwrap().kind,
            TransactionKind::Payment
        );
    }

    #[test]
    fn test_adjust_can_drive_balance_negative() {
        // Overpayment is allowed; the running balance just goes negative.
        let mut ledger = empty_ledger();
        let customer = ledger.add_customer(draft("Jo", "555", "10")).unwrap();

        ledger.adjust_balance(&customer.id, Decimal::new(-25, 0)).unwrap();

        let updated = ledger.get(&customer.id).unwrap();
        assert_eq!(updated.outstanding_amount, Decimal::new(-15, 0));
        assert_eq!(updated.transaction_total(), updated.outstanding_amount);
    }

    #[test]
    fn test_adjust_unknown_id_is_noop() {
        let mut ledger = empty_ledger();
        ledger.add_customer(draft("Jo", "555", "100")).unwrap();

        let applied = ledger.adjust_balance(&CustomerId::new(), Decimal::ONE).unwrap();
        assert!(!applied);
        assert_eq!(ledger.customers()[0].outstanding_amount, Decimal::new(100, 0));
        assert_eq!(ledger.customers()[0].transactions.len(), 1);
    }

    // ========== delete_customer ==========

    #[test]
    fn test_delete_removes_record() {
        let mut ledger = empty_ledger();
        let customer = ledger.add_customer(draft("Jo", "555", "10")).unwrap();

        assert!(ledger.delete_customer(&customer.id).unwrap());
        assert!(ledger.is_empty());
        assert!(ledger.get(&customer.id).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut ledger = empty_ledger();
        ledger.add_customer(draft("Jo", "555", "10")).unwrap();

        assert!(!ledger.delete_customer(&CustomerId::new()).unwrap());
        assert_eq!(ledger.len(), 1);
    }

    // ========== filter ==========

    fn searchable_ledger() -> Ledger {
        let mut ledger = empty_ledger();
        ledger.add_customer(draft("John Doe", "5551234567", "10")).unwrap();
        ledger.add_customer(draft("Mary Major", "5559876543", "20")).unwrap();
        ledger.add_customer(draft("Joan Jett", "1234567890", "30")).unwrap();
        ledger
    }

    #[test]
    fn test_filter_empty_term_returns_all_in_order() {
        let ledger = searchable_ledger();
        let all = ledger.filter("");
        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["John Doe", "Mary Major", "Joan Jett"]);
    }

    #[test]
    fn test_filter_matches_names_case_insensitively() {
        let ledger = searchable_ledger();
        let hits = ledger.filter("jo");
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["John Doe", "Joan Jett"]);
    }

    #[test]
    fn test_filter_matches_phone_substring() {
        let ledger = searchable_ledger();
        let hits = ledger.filter("98765");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Mary Major");
    }

    #[test]
    fn test_filter_no_matches() {
        let ledger = searchable_ledger();
        assert!(ledger.filter("zzz").is_empty());
    }

    // ========== import / export ==========

    #[test]
    fn test_export_import_round_trip() {
        let mut ledger = searchable_ledger();
        let document = ledger.export_all().unwrap();
        let original = ledger.customers().to_vec();

        let count = ledger.import_all(&document).unwrap();
        assert_eq!(count, 3);
        assert_eq!(ledger.customers(), original.as_slice());
    }

    #[test]
    fn test_import_does_not_revalidate_duplicate_phones() {
        let mut ledger = empty_ledger();
        let one = ledger.add_customer(draft("Jo", "555", "10")).unwrap();
        let mut twin = one.clone();
        twin.id = CustomerId::new();
        let document = serde_json::to_string(&[one, twin]).unwrap();

        // Bulk replace bypasses the uniqueness check.
        assert_eq!(ledger.import_all(&document).unwrap(), 2);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_import_keeps_timestamp_ids() {
        // The app this ledger replaces assigned millisecond-timestamp ids;
        // its backups import with the id carried through unchanged.
        let mut ledger = empty_ledger();
        let document = r#"[{
            "id": "1687273897453",
            "name": "Jane",
            "phone": "5550001111",
            "outstandingAmount": 100,
            "lastPurchaseDate": "2026-01-15",
            "transactions": [
                {"date": "2026-01-15T10:00:00Z", "amount": 100, "type": "credit", "note": "Initial credit"}
            ]
        }]"#;

        assert_eq!(ledger.import_all(document).unwrap(), 1);
        let id: CustomerId = "1687273897453".parse().unwrap();
        assert!(ledger.get(&id).is_some());
    }

    #[test]
    fn test_import_rejects_non_array_document() {
        let mut ledger = searchable_ledger();
        let result = ledger.import_all(r#"{"foo": 1}"#);
        assert!(matches!(result, Err(LedgerError::ImportFormat(_))));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        let mut ledger = searchable_ledger();
        let result = ledger.import_all("not json at all");
        assert!(matches!(result, Err(LedgerError::ImportFormat(_))));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_import_rejects_bad_record_shape() {
        let mut ledger = searchable_ledger();
        let result = ledger.import_all(r#"[{"name": "missing everything else"}]"#);
        assert!(matches!(result, Err(LedgerError::ImportFormat(_))));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_import_empty_array_clears_collection() {
        let mut ledger = searchable_ledger();
        assert_eq!(ledger.import_all("[]").unwrap(), 0);
        assert!(ledger.is_empty());
    }

    // ========== template ==========

    #[test]
    fn test_template_defaults_when_absent() {
        let ledger = empty_ledger();
        assert_eq!(ledger.template().as_str(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_template_loads_saved_value() {
        let store = MemoryStore::with_entries([(
            TEMPLATE_KEY.to_string(),
            "Oi {name}! ${amount}!".to_string(),
        )]);
        let ledger = Ledger::open(Box::new(store)).unwrap();
        assert_eq!(ledger.template().as_str(), "Oi {name}! ${amount}!");
    }

    #[test]
    fn test_set_template_takes_effect() {
        let mut ledger = empty_ledger();
        ledger.set_template("Dear {name}: {amount}".to_string()).unwrap();
        assert_eq!(ledger.template().as_str(), "Dear {name}: {amount}");
    }

    // ========== persistence ==========

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let open = || {
            Ledger::open(Box::new(crate::kv::FileStore::new(dir.path()))).unwrap()
        };

        let id = {
            let mut ledger = open();
            let customer = ledger.add_customer(draft("Jo", "555", "100")).unwrap();
            ledger.adjust_balance(&customer.id, Decimal::new(-40, 0)).unwrap();
            ledger.set_template("Hey {name}".to_string()).unwrap();
            customer.id
        };

        let reloaded = open();
        assert_eq!(reloaded.len(), 1);
        let customer = reloaded.get(&id).unwrap();
        assert_eq!(customer.outstanding_amount, Decimal::new(60, 0));
        assert_eq!(customer.transactions.len(), 2);
        assert_eq!(reloaded.template().as_str(), "Hey {name}");
    }

    #[test]
    fn test_open_rejects_corrupt_customer_blob() {
        let store = MemoryStore::with_entries([(
            CUSTOMERS_KEY.to_string(),
            "{definitely not an array".to_string(),
        )]);
        let result = Ledger::open(Box::new(store));
        assert!(matches!(result, Err(LedgerError::DataCorruption(_))));
    }
}
