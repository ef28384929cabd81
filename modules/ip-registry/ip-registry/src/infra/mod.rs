//! Infrastructure layer for the IP Registry module.
//!
//! Contains storage implementations and adapters for the domain ports.

pub mod events;
pub mod settlement;
pub mod storage;

pub use events::{BroadcastEventPublisher, InMemoryEventLog, TracingEventPublisher};
pub use settlement::{FeeTransfer, InMemoryLedger, RecordingSettlement};
pub use storage::InMemoryArtworkRepository;
