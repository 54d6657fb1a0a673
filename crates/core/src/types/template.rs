//! Reminder template rendering.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{Customer, format_amount};

/// Placeholder replaced by the customer's name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Placeholder replaced by the customer's outstanding balance.
pub const AMOUNT_PLACEHOLDER: &str = "{amount}";

/// The template used when the shop owner has not saved their own.
pub const DEFAULT_TEMPLATE: &str = "Hi {name}, this is a reminder that you have \
an outstanding balance of ${amount} at our shop. Please settle your account \
soon. Thank you!";

/// A user-editable message pattern for balance reminders.
///
/// Rendering substitutes the **first occurrence only** of `{name}` and
/// `{amount}` - a repeated placeholder stays literal from the second
/// occurrence on.
///
/// There is no escaping, no recursive substitution, and no check that either
/// placeholder is present. The amount renders with exactly two decimal
/// places.
///
/// ```
/// use rust_decimal::Decimal;
/// use slate_core::ReminderTemplate;
///
/// let template = ReminderTemplate::from("Hi {name}, you owe ${amount}".to_string());
/// assert_eq!(
///     template.render_parts("John Doe", Decimal::new(100, 0)),
///     "Hi John Doe, you owe $100.00"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderTemplate(String);

impl ReminderTemplate {
    /// Render a reminder for a customer.
    #[must_use]
    pub fn render(&self, customer: &Customer) -> String {
        self.render_parts(&customer.name, customer.outstanding_amount)
    }

    /// Render from a name and amount directly.
    ///
    /// Useful for previewing a template before saving it.
    #[must_use]
    pub fn render_parts(&self, name: &str, amount: rust_decimal::Decimal) -> String {
        self.0
            .replacen(NAME_PLACEHOLDER, name, 1)
            .replacen(AMOUNT_PLACEHOLDER, &format_amount(amount), 1)
    }

    /// Returns the template text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the template and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for ReminderTemplate {
    fn default() -> Self {
        Self(DEFAULT_TEMPLATE.to_string())
    }
}

impl From<String> for ReminderTemplate {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for ReminderTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
