//! IP Registry SDK
//!
//! This crate provides the public API for the `ip-registry` module:
//!
//! - [`IpRegistryClient`] - Public API trait for consumers
//! - [`Artwork`], [`Metadata`], [`ArtworkUpdate`] - Domain models
//! - [`NewArtwork`], [`NewMetadata`] - Unvalidated registration input
//! - [`RegistryEvent`] - Notifications emitted on every committed mutation
//! - [`IpRegistryError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use ip_registry_sdk::{CallContext, IpRegistryClient, Principal};
//!
//! let ctx = CallContext::new(Principal::from("ST1TEST"), 12);
//! let id = registry.register_artwork(&ctx, new_artwork).await?;
//! let owned = registry.get_owner_artworks(&ctx, &ctx.caller).await?;
//! ```

pub mod api;
pub mod context;
pub mod error;
pub mod events;
pub mod models;

pub use api::IpRegistryClient;
pub use context::CallContext;
pub use error::IpRegistryError;
pub use events::RegistryEvent;
pub use models::{
    Artwork, ArtworkId, ArtworkUpdate, BlockHeight, Dimensions, FileType, Metadata, NewArtwork,
    NewMetadata, Principal, UnknownFileType,
};
