//! Storage implementations for the IP Registry module.

mod in_memory_repo;

pub use in_memory_repo::InMemoryArtworkRepository;
