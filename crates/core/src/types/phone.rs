//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`Phone`] from an empty string.
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
}

/// A customer phone number.
///
/// Phone numbers double as the uniqueness key when adding a customer, so the
/// parser accepts whatever non-empty string the shop owner writes down -
/// `555-CALL-NOW` is a perfectly good tab key even though it will never
/// dial.
///
/// Validation runs on the add path only. Deserialization is transparent, so
/// records restored from a backup are taken as-is - uniqueness is not
/// re-checked on import.
///
/// ## Examples
///
/// ```
/// use slate_core::Phone;
///
/// assert!(Phone::parse("+1 (555) 123-4567").is_ok());
/// assert!(Phone::parse("555-CALL-NOW").is_ok());
///
/// assert!(Phone::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the phone number contains `term` as a substring.
    ///
    /// Case-sensitive, matching the search behavior of the ledger: names
    /// match case-insensitively but phone numbers are compared verbatim.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
