//! Domain service for the Contacts module.

use std::sync::Arc;

use tracing::{debug, info};

use super::error::DomainError;
use super::model::{Contact, NewContact};
use super::repo::ContactsRepository;

/// Contact registry operations.
///
/// Owns no state of its own; every call is a single repository step, so the
/// service is safe to share across request handlers behind an `Arc`.
pub struct ContactsService {
    repo: Arc<dyn ContactsRepository>,
}

impl ContactsService {
    #[must_use]
    pub fn new(repo: Arc<dyn ContactsRepository>) -> Self {
        Self { repo }
    }

    /// Returns every contact in stored order.
    #[must_use]
    pub fn list(&self) -> Vec<Contact> {
        let contacts = self.repo.list();
        debug!(count = contacts.len(), "Listed contacts");
        contacts
    }

    /// Looks up a contact by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no contact has this id.
    pub fn get(&self, id: &str) -> Result<Contact, DomainError> {
        debug!(contact_id = %id, "Getting contact");
        self.repo.get(id)
    }

    /// Stores a new contact under a registry-assigned id.
    pub fn create(&self, new_contact: NewContact) -> Contact {
        let contact = self.repo.insert(new_contact);
        info!(contact_id = %contact.id, "Created contact");
        contact
    }

    /// Replaces the contact's fields; the id stays `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no contact has this id.
    pub fn update(&self, id: &str, new_contact: NewContact) -> Result<Contact, DomainError> {
        let contact = self.repo.update(id, new_contact)?;
        info!(contact_id = %id, "Updated contact");
        Ok(contact)
    }

    /// Removes a contact.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no contact has this id.
    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id)?;
        info!(contact_id = %id, "Deleted contact");
        Ok(())
    }

    /// Number of live contacts.
    #[must_use]
    pub fn count(&self) -> usize {
        self.repo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdStrategy;
    use crate::domain::model::demo_contacts;
    use crate::infra::InMemoryContactsRepository;

    fn create_service() -> ContactsService {
        let repo = Arc::new(InMemoryContactsRepository::new(
            demo_contacts(),
            IdStrategy::Sequential,
        ));
        ContactsService::new(repo)
    }

    fn sample() -> NewContact {
        NewContact {
            name: "A".to_owned(),
            phone: "1".to_owned(),
            email: "a@x.com".to_owned(),
        }
    }

    #[test]
    fn test_created_contact_is_retrievable() {
        let svc = create_service();
        let created = svc.create(sample());

        assert_ne!(created.id, "1");
        assert_ne!(created.id, "2");
        assert_eq!(svc.get(&created.id).unwrap(), created);
        assert_eq!(svc.count(), 3);
    }

    #[test]
    fn test_deleted_contact_is_gone() {
        let svc = create_service();
        svc.delete("1").unwrap();

        assert_eq!(svc.get("1").unwrap_err(), DomainError::not_found("1"));
        let remaining = svc.list();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "2");
    }

    #[test]
    fn test_repeated_delete_fails() {
        let svc = create_service();
        svc.delete("2").unwrap();
        for _ in 0..3 {
            assert!(matches!(
                svc.delete("2"),
                Err(DomainError::NotFound { .. })
            ));
        }
    }

    #[test]
    fn test_update_preserves_id_and_order() {
        let svc = create_service();
        let updated = svc.update("1", sample()).unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(updated.name, "A");

        let ids: Vec<String> = svc.list().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_update_missing_contact() {
        let svc = create_service();
        assert_eq!(
            svc.update("99", sample()).unwrap_err(),
            DomainError::not_found("99")
        );
    }
}
