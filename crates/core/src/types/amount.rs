//! Money formatting helpers.
//!
//! Balances are plain [`Decimal`] values; the ledger is single-currency, so
//! there is no currency code to carry around. Display must be consistent:
//! reminders and the CLI both show amounts with exactly two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with exactly two decimal places.
///
/// Rounds half away from zero, so `1.005` displays as `"1.01"` and `-1.005`
/// as `"-1.01"`.
///
/// ```
/// use rust_decimal::Decimal;
/// use slate_core::format_amount;
///
/// assert_eq!(format_amount(Decimal::new(100, 0)), "100.00");
/// assert_eq!(format_amount(Decimal::new(2550, 2)), "25.50");
/// ```
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
