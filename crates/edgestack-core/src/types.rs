//! Common identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// AWS Account ID (12-digit string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account ID from a string.
    ///
    /// # Errors
    /// Returns an error if the account ID is not a 12-digit numeric string.
    pub fn new(id: impl Into<String>) -> Result<Self, PlanError> {
        let id = id.into();
        if id.len() != 12 || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(PlanError::InvalidAccountId(id));
        }
        Ok(Self(id))
    }

    /// Get the account ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-check the invariant after deserialization.
    ///
    /// Serde constructs the newtype without going through [`AccountId::new`],
    /// so configs loaded from disk are validated here before planning.
    pub(crate) fn validate(&self) -> Result<(), PlanError> {
        if self.0.len() != 12 || !self.0.chars().all(|c| c.is_ascii_digit()) {
            return Err(PlanError::InvalidAccountId(self.0.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
