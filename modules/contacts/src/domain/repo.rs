//! Repository trait for contact storage.

use super::error::DomainError;
use super::model::{Contact, NewContact};

/// Storage interface used by the domain service.
///
/// Every method is one atomic step: implementations must not let another call
/// observe a half-applied mutation. Lookups match ids exactly and the first
/// contact in stored order wins.
pub trait ContactsRepository: Send + Sync {
    /// All contacts in stored (insertion) order.
    fn list(&self) -> Vec<Contact>;

    /// # Errors
    ///
    /// Returns `NotFound` if no contact has this id.
    fn get(&self, id: &str) -> Result<Contact, DomainError>;

    /// Assigns an id, appends the contact at the end and returns it.
    fn insert(&self, new_contact: NewContact) -> Contact;

    /// Overwrites every field but the id, keeping the contact's position.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no contact has this id.
    fn update(&self, id: &str, new_contact: NewContact) -> Result<Contact, DomainError>;

    /// Removes the contact; the ones after it shift down by one.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no contact has this id.
    fn delete(&self, id: &str) -> Result<Contact, DomainError>;

    /// Number of live contacts.
    fn len(&self) -> usize;
}
