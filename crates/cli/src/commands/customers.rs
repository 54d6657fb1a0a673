//! Customer management commands.
//!
//! # Usage
//!
//! ```bash
//! slate add --name "John Doe" --phone 5551234567 --amount 100
//! slate adjust 4f9d... 50
//! slate adjust 4f9d... -- -30
//! slate delete 4f9d... --yes
//! slate list jo
//! slate show 4f9d...
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use slate_core::{CustomerId, TransactionKind, format_amount};
use slate_ledger::{CustomerDraft, Ledger};

use super::confirm;

/// Add a new customer with an initial credit.
///
/// # Errors
///
/// Returns the ledger's validation error when a required field is missing,
/// the amount is bad, or the phone number is already taken.
#[allow(clippy::print_stdout)]
pub fn add(
    ledger: &mut Ledger,
    name: String,
    phone: String,
    amount: String,
    address: Option<String>,
    notes: Option<String>,
    last_purchase: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let customer = ledger.add_customer(CustomerDraft {
        name,
        phone,
        amount,
        address,
        notes,
        last_purchase_date: last_purchase,
    })?;

    println!(
        "Added {} ({}) with balance ${}",
        customer.name,
        customer.phone,
        format_amount(customer.outstanding_amount)
    );
    println!("id: {}", customer.id);
    Ok(())
}

/// Record a signed balance adjustment.
///
/// # Errors
///
/// Returns the ledger's error if persisting the change fails.
#[allow(clippy::print_stdout)]
pub fn adjust(
    ledger: &mut Ledger,
    id: CustomerId,
    delta: Decimal,
) -> Result<(), Box<dyn std::error::Error>> {
    if !ledger.adjust_balance(&id, delta)? {
        warn!(customer = %id, "No customer with this id; nothing recorded");
        return Ok(());
    }

    // adjust_balance returned true, so the customer exists
    if let Some(customer) = ledger.get(&id) {
        println!(
            "{} now owes ${}",
            customer.name,
            format_amount(customer.outstanding_amount)
        );
    }
    Ok(())
}

/// Delete a customer after confirmation.
///
/// # Errors
///
/// Returns an error if the confirmation prompt cannot be read or persisting
/// the removal fails.
#[allow(clippy::print_stdout)]
pub fn delete(
    ledger: &mut Ledger,
    id: CustomerId,
    yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(customer) = ledger.get(&id) else {
        warn!(customer = %id, "No customer with this id; nothing deleted");
        return Ok(());
    };

    let prompt = format!(
        "Delete {} ({}) and their transaction history?",
        customer.name, customer.phone
    );
    if !yes && !confirm(&prompt)? {
        println!("Cancelled.");
        return Ok(());
    }

    ledger.delete_customer(&id)?;
    println!("Deleted.");
    Ok(())
}

/// List customers matching a search term.
#[allow(clippy::print_stdout)]
pub fn list(ledger: &Ledger, term: &str) {
    let matches = ledger.filter(term);

    if matches.is_empty() {
        if term.is_empty() {
            println!("No customers added yet");
        } else {
            println!("No customers found");
        }
        return;
    }

    println!("{:<24} {:<16} {:>12}  last update", "name", "phone", "balance");
    for customer in matches {
        let last_update = customer
            .last_transaction()
            .map_or_else(String::new, |t| t.date.format("%Y-%m-%d").to_string());
        let balance = format!("${}", format_amount(customer.outstanding_amount));
        println!(
            "{:<24} {:<16} {balance:>12}  {last_update}",
            customer.name, customer.phone,
        );
        println!("  id: {}", customer.id);
    }
}

/// Show one customer's full record, transactions newest first.
#[allow(clippy::print_stdout)]
pub fn show(ledger: &Ledger, id: CustomerId) {
    let Some(customer) = ledger.get(&id) else {
        warn!(customer = %id, "No customer with this id");
        return;
    };

    println!("{} ({})", customer.name, customer.phone);
    println!("id:      {}", customer.id);
    if let Some(address) = &customer.address {
        println!("address: {address}");
    }
    if let Some(notes) = &customer.notes {
        println!("notes:   {notes}");
    }
    println!(
        "balance: ${}",
        format_amount(customer.outstanding_amount)
    );
    println!("last purchase: {}", customer.last_purchase_date);

    println!("\ntransactions:");
    for transaction in customer.transactions.iter().rev() {
        println!(
            "  {}  {}{}  {}",
            transaction.date.format("%Y-%m-%d"),
            display_sign(transaction.kind),
            format_amount(transaction.amount.abs()),
            transaction.note
        );
    }
}

/// Credit entries display as `+$x`, payments as `-$x`.
const fn display_sign(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Credit => "+$",
        TransactionKind::Payment => "-$",
    }
}
