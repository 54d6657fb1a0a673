//! Reminder hand-off.
//!
//! The renderer knows nothing about delivery; this module turns a rendered
//! message into something the user's messaging surface can take. On phones
//! an `sms:` URI opens the native composer with the body pre-filled; on a
//! desktop the caller just shows the message text for manual sending.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use slate_core::{Customer, Phone, ReminderTemplate};

/// Characters escaped in the URI body.
///
/// Everything except alphanumerics and the marks `- _ . ! ~ * ' ( )`, the
/// set that messaging apps accept in practice for `sms:` bodies.
const BODY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build an `sms:` URI addressed to the customer with the body pre-filled.
///
/// ```
/// use slate_ledger::reminder::sms_uri;
/// use slate_core::Phone;
///
/// let phone = Phone::parse("5551234567").unwrap();
/// assert_eq!(
///     sms_uri(&phone, "You owe $5.00"),
///     "sms:5551234567?body=You%20owe%20%245.00"
/// );
/// ```
#[must_use]
pub fn sms_uri(phone: &Phone, body: &str) -> String {
    let encoded = utf8_percent_encode(body, BODY_ENCODE_SET);
    format!("sms:{phone}?body={encoded}")
}

/// Render a customer's reminder and pair it with its `sms:` URI.
#[must_use]
pub fn build_reminder(template: &ReminderTemplate, customer: &Customer) -> (String, String) {
    let message = template.render(customer);
    let uri = sms_uri(&customer.phone, &message);
    (message, uri)
}
