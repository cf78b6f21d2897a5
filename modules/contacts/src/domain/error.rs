//! Domain error types for the Contacts module.

use thiserror::Error;

/// Domain-level errors for the Contacts module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No contact carries the requested id.
    #[error("Contact not found: {id}")]
    NotFound { id: String },

    /// The request payload could not be decoded into a contact.
    #[error("Invalid contact payload: {reason}")]
    InvalidPayload { reason: String },
}

impl DomainError {
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    #[must_use]
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            reason: reason.into(),
        }
    }
}
