//! Customer identifier.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when parsing a [`CustomerId`] from an empty string.
#[derive(thiserror::Error, Debug, Clone)]
pub enum CustomerIdError {
    /// The input string is empty.
    #[error("customer id cannot be empty")]
    Empty,
}

/// Unique identifier for a [`Customer`](crate::Customer).
///
/// Opaque on the wire: the id is whatever string the record carries, so
/// backups written by earlier versions of the tool (which assigned
/// timestamp ids) import unchanged. Fresh ids are random UUIDs, so two
/// records created in the same instant cannot collide. Assigned once at
/// creation and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Generate a fresh random ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CustomerId {
    type Err = CustomerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CustomerIdError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}
