//! Id assignment for newly created contacts.

use crate::config::IdStrategy;

use super::model::Contact;

/// Hands out ids according to the configured [`IdStrategy`].
///
/// Not synchronized on its own: the repository keeps it under the same lock as
/// the contact list, so the live count it sees is always current.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    strategy: IdStrategy,
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator whose sequential counter starts past every numeric
    /// id already present in `existing`.
    #[must_use]
    pub fn new(strategy: IdStrategy, existing: &[Contact]) -> Self {
        let max_seen = existing
            .iter()
            .filter_map(|c| c.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            strategy,
            next: max_seen.saturating_add(1),
        }
    }

    /// Returns the id for the next contact, given how many contacts are live.
    pub fn allocate(&mut self, live_count: usize) -> String {
        match self.strategy {
            IdStrategy::Sequential => {
                let id = self.next;
                self.next = self.next.saturating_add(1);
                id.to_string()
            }
            IdStrategy::Legacy => legacy_id(live_count).to_string(),
        }
    }
}

/// `'0' + (count + 1)` as one character; invalid scalars become U+FFFD.
fn legacy_id(live_count: usize) -> char {
    u32::try_from(live_count)
        .ok()
        .and_then(|count| count.checked_add(u32::from('0') + 1))
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
