//! IP Registry Module Implementation
//!
//! Records ownership and provenance claims for creative works keyed by a
//! content hash. The public API is defined in `ip-registry-sdk` and
//! re-exported here.
//!
//! ## Architecture
//!
//! - **Single writer**: all state lives in one object behind one lock inside
//!   [`IpRegistryService`]; every operation runs to completion under it.
//! - **Ports**: fee settlement and event emission are external collaborators
//!   reached through [`domain::ports`].
//! - **Repository**: the primary store and its indexes sit behind
//!   [`domain::repo::ArtworkRepository`]; [`infra::storage`] ships the
//!   in-memory implementation.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use ip_registry_sdk::{
    Artwork, ArtworkId, ArtworkUpdate, BlockHeight, CallContext, Dimensions, FileType,
    IpRegistryClient, IpRegistryError, Metadata, NewArtwork, NewMetadata, Principal,
    RegistryEvent,
};

// === CONFIGURATION ===
pub mod config;
pub use config::IpRegistryConfig;

// === LOCAL CLIENT ===
pub mod local_client;
pub use local_client::IpRegistryLocalClient;

pub mod domain;
pub use domain::service::IpRegistryService;

pub mod infra;
