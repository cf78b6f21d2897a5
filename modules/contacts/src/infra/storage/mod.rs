pub mod in_memory_repo;

pub use in_memory_repo::InMemoryContactsRepository;
