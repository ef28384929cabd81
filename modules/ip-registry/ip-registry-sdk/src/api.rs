//! Public API trait for the IP registry.

use async_trait::async_trait;

use crate::context::CallContext;
use crate::error::IpRegistryError;
use crate::models::{Artwork, ArtworkId, ArtworkUpdate, NewArtwork, Principal};

/// Public API trait for the IP registry.
///
/// Every call runs to completion against the registry state before the next
/// one is admitted. Mutating calls are atomic: on error nothing changed.
#[async_trait]
pub trait IpRegistryClient: Send + Sync {
    /// Sets the administrative principal. Succeeds exactly once.
    ///
    /// # Errors
    ///
    /// - `AlreadyConfigured` if the authority is already set
    async fn set_authority_contract(
        &self,
        ctx: &CallContext,
        principal: Principal,
    ) -> Result<bool, IpRegistryError>;

    /// # Errors
    ///
    /// - `NotAuthorized` if the authority is not set
    async fn set_registration_fee(
        &self,
        ctx: &CallContext,
        fee: u64,
    ) -> Result<bool, IpRegistryError>;

    /// # Errors
    ///
    /// - `NotAuthorized` if the authority is not set
    /// - `InvalidParameter` if `max <= 0`
    async fn set_max_artworks(&self, ctx: &CallContext, max: i64)
    -> Result<bool, IpRegistryError>;

    /// The administrative principal, `None` until configured.
    async fn get_authority_contract(
        &self,
        ctx: &CallContext,
    ) -> Result<Option<Principal>, IpRegistryError>;

    async fn get_registration_fee(&self, ctx: &CallContext) -> Result<u64, IpRegistryError>;

    async fn get_max_artworks(&self, ctx: &CallContext) -> Result<u64, IpRegistryError>;

    /// Registers a new artwork owned by the caller and returns its id.
    ///
    /// The caller pays the registration fee to the authority.
    ///
    /// # Errors
    ///
    /// The first failing check, in order: `CapacityExceeded`, `InvalidHash`,
    /// `InvalidTitle`, `InvalidDescription`, `InvalidCategory`,
    /// `InvalidCreatedAt`, `InvalidTag`, `InvalidMedium`, `InvalidDimensions`,
    /// `InvalidFileType`, `InvalidRoyaltyRate`, `AlreadyExists`,
    /// `NotAuthorized`. A rejected fee transfer yields `Settlement`.
    async fn register_artwork(
        &self,
        ctx: &CallContext,
        artwork: NewArtwork,
    ) -> Result<ArtworkId, IpRegistryError>;

    async fn get_artwork(
        &self,
        ctx: &CallContext,
        hash: &str,
    ) -> Result<Option<Artwork>, IpRegistryError>;

    async fn get_artwork_by_id(
        &self,
        ctx: &CallContext,
        id: ArtworkId,
    ) -> Result<Option<Artwork>, IpRegistryError>;

    /// Ids owned by `owner` in acquisition order; empty for unknown owners.
    async fn get_owner_artworks(
        &self,
        ctx: &CallContext,
        owner: &Principal,
    ) -> Result<Vec<ArtworkId>, IpRegistryError>;

    async fn get_artwork_count(&self, ctx: &CallContext) -> Result<u64, IpRegistryError>;

    async fn check_artwork_existence(
        &self,
        ctx: &CallContext,
        hash: &str,
    ) -> Result<bool, IpRegistryError>;

    /// Latest title/description edit of the artwork, if any.
    async fn get_artwork_update(
        &self,
        ctx: &CallContext,
        id: ArtworkId,
    ) -> Result<Option<ArtworkUpdate>, IpRegistryError>;

    /// Replaces title and description of an artwork owned by the caller.
    ///
    /// # Errors
    ///
    /// `NotFound`, `UpdateNotAuthorized`, `InvalidTitle`, `InvalidDescription`.
    async fn update_artwork(
        &self,
        ctx: &CallContext,
        hash: &str,
        title: String,
        description: String,
    ) -> Result<bool, IpRegistryError>;

    /// Moves an artwork owned by the caller to `recipient`.
    ///
    /// # Errors
    ///
    /// `NotFound`, `TransferNotAllowed`.
    async fn transfer_artwork_ownership(
        &self,
        ctx: &CallContext,
        hash: &str,
        recipient: Principal,
    ) -> Result<bool, IpRegistryError>;
}
