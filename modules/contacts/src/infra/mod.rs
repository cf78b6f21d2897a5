//! Infrastructure layer for the Contacts module.

pub mod storage;

pub use storage::InMemoryContactsRepository;
