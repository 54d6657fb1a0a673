//! Reminder and template commands.
//!
//! # Usage
//!
//! ```bash
//! slate remind 4f9d...
//! slate template show
//! slate template set "Hi {name}, please settle your balance of ${amount}."
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use slate_core::CustomerId;
use slate_ledger::reminder::build_reminder;
use slate_ledger::Ledger;

/// Print a customer's rendered reminder and its `sms:` URI.
///
/// The URI opens the native composer on platforms that handle `sms:` links;
/// elsewhere the message text is there to copy into whatever the shop owner
/// uses for messaging.
#[allow(clippy::print_stdout)]
pub fn remind(ledger: &Ledger, id: CustomerId) {
    let Some(customer) = ledger.get(&id) else {
        warn!(customer = %id, "No customer with this id");
        return;
    };

    let (message, uri) = build_reminder(ledger.template(), customer);
    println!("{message}");
    println!();
    println!("{uri}");
}

/// Print the current template with a sample rendering.
#[allow(clippy::print_stdout)]
pub fn template_show(ledger: &Ledger) {
    let template = ledger.template();
    println!("{template}");
    println!();
    println!("preview: {}", template.render_parts("John Doe", Decimal::new(100, 0)));
}

/// Replace the reminder template.
///
/// # Errors
///
/// Returns the ledger's error if persisting the template fails.
#[allow(clippy::print_stdout)]
pub fn template_set(
    ledger: &mut Ledger,
    text: String,
) -> Result<(), Box<dyn std::error::Error>> {
    ledger.set_template(text)?;
    println!(
        "Template saved. preview: {}",
        ledger.template().render_parts("John Doe", Decimal::new(100, 0))
    );
    Ok(())
}
