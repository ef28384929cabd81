//! Domain layer for the IP Registry module.
//!
//! Contains business logic, validation rules, error types, ports, and the
//! repository trait.

pub mod error;
pub mod model;
pub mod ports;
pub mod repo;
pub mod service;
pub mod validation;


pub use error::DomainError;
pub use model::{ContentHash, RegistrySettings};
pub use ports::{EventPublisher, SettlementError, SettlementPort};
pub use repo::ArtworkRepository;
pub use service::IpRegistryService;
