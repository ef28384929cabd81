#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

//! Shared fixtures for integration tests.

use std::sync::Arc;

use ip_registry::domain::ContentHash;
use ip_registry::infra::{InMemoryArtworkRepository, InMemoryEventLog, RecordingSettlement};
use ip_registry::{
    CallContext, Dimensions, IpRegistryConfig, IpRegistryLocalClient, IpRegistryService,
    NewArtwork, NewMetadata, Principal,
};

pub const AUTHORITY: &str = "SP1AUTHORITY";
pub const ARTIST: &str = "SP2ARTIST";
pub const COLLECTOR: &str = "SP3COLLECTOR";

pub struct TestRegistry {
    pub client: IpRegistryLocalClient,
    pub settlement: Arc<RecordingSettlement>,
    pub events: Arc<InMemoryEventLog>,
}

pub fn create_registry(config: &IpRegistryConfig) -> TestRegistry {
    let settlement = Arc::new(RecordingSettlement::new());
    let events = Arc::new(InMemoryEventLog::new());
    let service = IpRegistryService::new(
        config,
        Box::new(InMemoryArtworkRepository::new()),
        settlement.clone(),
        events.clone(),
    );
    TestRegistry {
        client: IpRegistryLocalClient::new(Arc::new(service)),
        settlement,
        events,
    }
}

pub fn ctx(caller: &str, height: u64) -> CallContext {
    CallContext::new(Principal::from(caller), height)
}

/// SHA-256 of the seed's decimal form.
pub fn content_hash(seed: u32) -> String {
    ContentHash::digest(seed.to_string().as_bytes()).into_inner()
}

pub fn sample_artwork(hash: &str) -> NewArtwork {
    NewArtwork {
        hash: hash.to_owned(),
        title: "My Art".to_owned(),
        description: "First piece".to_owned(),
        metadata: NewMetadata {
            category: "digital".to_owned(),
            created_at: 1,
            tags: vec!["genesis".to_owned()],
            medium: "pixels".to_owned(),
            dimensions: Some(Dimensions::new(800, 600)),
            file_type: "image/png".to_owned(),
            royalty_rate: 10,
        },
    }
}
