//! In-memory contact storage.

use parking_lot::Mutex;

use crate::config::IdStrategy;
use crate::domain::error::DomainError;
use crate::domain::ids::IdAllocator;
use crate::domain::model::{Contact, NewContact};
use crate::domain::repo::ContactsRepository;

struct State {
    contacts: Vec<Contact>,
    ids: IdAllocator,
}

impl State {
    fn position(&self, id: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }
}

/// Ordered in-memory contact list behind a single lock.
///
/// The id allocator shares the lock with the list, so two concurrent creates
/// can never observe the same count or counter value.
pub struct InMemoryContactsRepository {
    state: Mutex<State>,
}

impl InMemoryContactsRepository {
    /// Creates a repository holding `seed` in the given order.
    #[must_use]
    pub fn new(seed: Vec<Contact>, strategy: IdStrategy) -> Self {
        let ids = IdAllocator::new(strategy, &seed);
        Self {
            state: Mutex::new(State {
                contacts: seed,
                ids,
            }),
        }
    }

    #[must_use]
    pub fn empty(strategy: IdStrategy) -> Self {
        Self::new(Vec::new(), strategy)
    }
}

impl ContactsRepository for InMemoryContactsRepository {
    fn list(&self) -> Vec<Contact> {
        self.state.lock().contacts.clone()
    }

    fn get(&self, id: &str) -> Result<Contact, DomainError> {
        let state = self.state.lock();
        state
            .contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(id))
    }

    fn insert(&self, new_contact: NewContact) -> Contact {
        let mut state = self.state.lock();
        let live = state.contacts.len();
        let id = state.ids.allocate(live);
        let contact = Contact::from_new(id, new_contact);
        state.contacts.push(contact.clone());
        contact
    }

    fn update(&self, id: &str, new_contact: NewContact) -> Result<Contact, DomainError> {
        let mut state = self.state.lock();
        let idx = state
            .position(id)
            .ok_or_else(|| DomainError::not_found(id))?;
        let slot = &mut state.contacts[idx];
        slot.apply(new_contact);
        Ok(slot.clone())
    }

    fn delete(&self, id: &str) -> Result<Contact, DomainError> {
        let mut state = self.state.lock();
        let idx = state
            .position(id)
            .ok_or_else(|| DomainError::not_found(id))?;
        Ok(state.contacts.remove(idx))
    }

    fn len(&self) -> usize {
        self.state.lock().contacts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::demo_contacts;

    fn seeded(strategy: IdStrategy) -> InMemoryContactsRepository {
        InMemoryContactsRepository::new(demo_contacts(), strategy)
    }

    fn new_contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_owned(),
            phone: "+70000000000".to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn ids(repo: &InMemoryContactsRepository) -> Vec<String> {
        repo.list().into_iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_list_returns_seed_order() {
        let repo = seeded(IdStrategy::Sequential);
        assert_eq!(ids(&repo), vec!["1", "2"]);
    }

    #[test]
    fn test_get_unknown_id() {
        let repo = seeded(IdStrategy::Sequential);
        let err = repo.get("99").unwrap_err();
        assert_eq!(err, DomainError::not_found("99"));
    }

    #[test]
    fn test_get_matches_exactly() {
        let repo = seeded(IdStrategy::Sequential);
        assert!(repo.get("1").is_ok());
        assert!(repo.get(" 1").is_err());
        assert!(repo.get("01").is_err());
    }

    #[test]
    fn test_insert_appends_at_end() {
        let repo = seeded(IdStrategy::Sequential);
        let created = repo.insert(new_contact("Anna"));

        assert_eq!(created.id, "3");
        assert_eq!(ids(&repo), vec!["1", "2", "3"]);
        assert_eq!(repo.get("3").unwrap(), created);
    }

    #[test]
    fn test_update_keeps_position() {
        let repo = seeded(IdStrategy::Sequential);
        repo.insert(new_contact("Anna"));

        let updated = repo.update("2", new_contact("Boris")).unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Boris");
        assert_eq!(ids(&repo), vec!["1", "2", "3"]);
        assert_eq!(repo.list()[1].name, "Boris");
    }

    #[test]
    fn test_update_unknown_id() {
        let repo = seeded(IdStrategy::Sequential);
        assert!(repo.update("99", new_contact("Anna")).is_err());
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_delete_shifts_left() {
        let repo = seeded(IdStrategy::Sequential);
        repo.insert(new_contact("Anna"));

        let removed = repo.delete("2").unwrap();

        assert_eq!(removed.id, "2");
        assert_eq!(ids(&repo), vec!["1", "3"]);
    }

    #[test]
    fn test_delete_twice_fails() {
        let repo = seeded(IdStrategy::Sequential);
        assert!(repo.delete("1").is_ok());
        assert_eq!(repo.delete("1").unwrap_err(), DomainError::not_found("1"));
    }

    #[test]
    fn test_first_match_wins_on_duplicate_ids() {
        let mut seed = demo_contacts();
        seed[1].id = "1".to_owned();
        let repo = InMemoryContactsRepository::new(seed, IdStrategy::Sequential);

        assert_eq!(repo.get("1").unwrap().phone, "+79161234567");

        repo.delete("1").unwrap();
        assert_eq!(repo.get("1").unwrap().phone, "+79169876543");
    }

    #[test]
    fn test_sequential_ids_survive_deletes() {
        let repo = seeded(IdStrategy::Sequential);
        repo.delete("1").unwrap();

        let created = repo.insert(new_contact("Anna"));

        assert_eq!(created.id, "3");
        assert_eq!(ids(&repo), vec!["2", "3"]);
    }

    #[test]
    fn test_legacy_ids_follow_live_count() {
        let repo = seeded(IdStrategy::Legacy);
        repo.delete("1").unwrap();

        let created = repo.insert(new_contact("Anna"));

        // count was 1, so the legacy scheme reissues "2"
        assert_eq!(created.id, "2");
        assert_eq!(ids(&repo), vec!["2", "2"]);
    }

    #[test]
    fn test_empty_repository() {
        let repo = InMemoryContactsRepository::empty(IdStrategy::Sequential);
        assert_eq!(repo.len(), 0);
        assert!(repo.list().is_empty());
        assert_eq!(repo.insert(new_contact("Anna")).id, "1");
    }

    #[test]
    fn test_concurrent_inserts_get_distinct_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let repo = Arc::new(InMemoryContactsRepository::empty(IdStrategy::Sequential));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|i| repo.insert(new_contact(&format!("T{t}N{i}"))).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let all: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let unique: HashSet<&String> = all.iter().collect();

        assert_eq!(all.len(), 200);
        assert_eq!(unique.len(), 200);
        assert_eq!(repo.len(), 200);
    }
}
