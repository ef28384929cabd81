//! Local client implementing the `IpRegistryClient` trait.

use std::sync::Arc;

use async_trait::async_trait;
use ip_registry_sdk::{
    Artwork, ArtworkId, ArtworkUpdate, CallContext, IpRegistryClient, IpRegistryError,
    NewArtwork, Principal,
};

use crate::domain::service::IpRegistryService;

/// Local client for the IP Registry module.
///
/// Implements the async `IpRegistryClient` trait by delegating to the
/// synchronous domain service.
#[derive(Clone)]
pub struct IpRegistryLocalClient {
    service: Arc<IpRegistryService>,
}

impl IpRegistryLocalClient {
    #[must_use]
    pub fn new(service: Arc<IpRegistryService>) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn service(&self) -> &Arc<IpRegistryService> {
        &self.service
    }
}

#[async_trait]
impl IpRegistryClient for IpRegistryLocalClient {
    async fn set_authority_contract(
        &self,
        ctx: &CallContext,
        principal: Principal,
    ) -> Result<bool, IpRegistryError> {
        self.service
            .set_authority_contract(ctx, principal)
            .map_err(IpRegistryError::from)
    }

    async fn set_registration_fee(
        &self,
        ctx: &CallContext,
        fee: u64,
    ) -> Result<bool, IpRegistryError> {
        self.service
            .set_registration_fee(ctx, fee)
            .map_err(IpRegistryError::from)
    }

    async fn set_max_artworks(
        &self,
        ctx: &CallContext,
        max: i64,
    ) -> Result<bool, IpRegistryError> {
        self.service
            .set_max_artworks(ctx, max)
            .map_err(IpRegistryError::from)
    }

    async fn get_authority_contract(
        &self,
        _ctx: &CallContext,
    ) -> Result<Option<Principal>, IpRegistryError> {
        Ok(self.service.get_authority_contract())
    }

    async fn get_registration_fee(&self, _ctx: &CallContext) -> Result<u64, IpRegistryError> {
        Ok(self.service.get_registration_fee())
    }

    async fn get_max_artworks(&self, _ctx: &CallContext) -> Result<u64, IpRegistryError> {
        Ok(self.service.get_max_artworks())
    }

    async fn register_artwork(
        &self,
        ctx: &CallContext,
        artwork: NewArtwork,
    ) -> Result<ArtworkId, IpRegistryError> {
        self.service
            .register_artwork(ctx, artwork)
            .map_err(IpRegistryError::from)
    }

    async fn get_artwork(
        &self,
        _ctx: &CallContext,
        hash: &str,
    ) -> Result<Option<Artwork>, IpRegistryError> {
        Ok(self.service.get_artwork(hash))
    }

    async fn get_artwork_by_id(
        &self,
        _ctx: &CallContext,
        id: ArtworkId,
    ) -> Result<Option<Artwork>, IpRegistryError> {
        Ok(self.service.get_artwork_by_id(id))
    }

    async fn get_owner_artworks(
        &self,
        _ctx: &CallContext,
        owner: &Principal,
    ) -> Result<Vec<ArtworkId>, IpRegistryError> {
        Ok(self.service.get_owner_artworks(owner))
    }

    async fn get_artwork_count(&self, _ctx: &CallContext) -> Result<u64, IpRegistryError> {
        Ok(self.service.get_artwork_count())
    }

    async fn check_artwork_existence(
        &self,
        _ctx: &CallContext,
        hash: &str,
    ) -> Result<bool, IpRegistryError> {
        Ok(self.service.check_artwork_existence(hash))
    }

    async fn get_artwork_update(
        &self,
        _ctx: &CallContext,
        id: ArtworkId,
    ) -> Result<Option<ArtworkUpdate>, IpRegistryError> {
        Ok(self.service.get_artwork_update(id))
    }

    async fn update_artwork(
        &self,
        ctx: &CallContext,
        hash: &str,
        title: String,
        description: String,
    ) -> Result<bool, IpRegistryError> {
        self.service
            .update_artwork(ctx, hash, title, description)
            .map_err(IpRegistryError::from)
    }

    async fn transfer_artwork_ownership(
        &self,
        ctx: &CallContext,
        hash: &str,
        recipient: Principal,
    ) -> Result<bool, IpRegistryError> {
        self.service
            .transfer_artwork_ownership(ctx, hash, recipient)
            .map_err(IpRegistryError::from)
    }
}
