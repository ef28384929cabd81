//! Domain service for the IP Registry module.

use std::sync::Arc;

use ip_registry_sdk::{
    Artwork, ArtworkId, ArtworkUpdate, CallContext, NewArtwork, Principal, RegistryEvent,
};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use super::error::DomainError;
use super::model::{ContentHash, RegistrySettings};
use super::ports::{EventPublisher, SettlementPort};
use super::repo::ArtworkRepository;
use super::validation::{validate_description, validate_metadata, validate_title};
use crate::config::IpRegistryConfig;

/// Everything guarded by the registry lock.
struct RegistryState {
    settings: RegistrySettings,
    repo: Box<dyn ArtworkRepository>,
}

/// Domain service with the registry's business rules.
///
/// Each operation takes the state lock on entry and keeps it until the
/// operation's event has been published, so operations never interleave.
/// A rejected operation leaves settings, store and indexes untouched.
pub struct IpRegistryService {
    state: Mutex<RegistryState>,
    settlement: Arc<dyn SettlementPort>,
    events: Arc<dyn EventPublisher<RegistryEvent>>,
}

fn log_rejection(operation: &'static str) -> impl Fn(&DomainError) {
    move |e| warn!(operation, error_kind = e.kind(), error = %e, "Registry call rejected")
}

impl IpRegistryService {
    #[must_use]
    pub fn new(
        config: &IpRegistryConfig,
        repo: Box<dyn ArtworkRepository>,
        settlement: Arc<dyn SettlementPort>,
        events: Arc<dyn EventPublisher<RegistryEvent>>,
    ) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                settings: RegistrySettings::from_config(config),
                repo,
            }),
            settlement,
            events,
        }
    }

    // === Administration ===

    /// Sets the administrative principal. Allowed once.
    ///
    /// # Errors
    ///
    /// `AlreadyConfigured` if an authority is already set.
    #[instrument(skip(self, ctx, principal), fields(caller = %ctx.caller, authority = %principal))]
    pub fn set_authority_contract(
        &self,
        ctx: &CallContext,
        principal: Principal,
    ) -> Result<bool, DomainError> {
        let mut state = self.state.lock();
        if state.settings.authority.is_some() {
            let err = DomainError::AlreadyConfigured;
            log_rejection("set_authority_contract")(&err);
            return Err(err);
        }
        state.settings.authority = Some(principal);
        info!("Authority contract configured");
        Ok(true)
    }

    /// # Errors
    ///
    /// `NotAuthorized` while no authority is set.
    #[instrument(skip(self, ctx), fields(caller = %ctx.caller))]
    pub fn set_registration_fee(&self, ctx: &CallContext, fee: u64) -> Result<bool, DomainError> {
        let mut state = self.state.lock();
        state
            .settings
            .require_authority()
            .inspect_err(log_rejection("set_registration_fee"))?;
        state.settings.registration_fee = fee;
        info!("Registration fee updated");
        Ok(true)
    }

    /// # Errors
    ///
    /// - `NotAuthorized` while no authority is set
    /// - `InvalidParameter` if `max` is not positive
    #[instrument(skip(self, ctx), fields(caller = %ctx.caller))]
    pub fn set_max_artworks(&self, ctx: &CallContext, max: i64) -> Result<bool, DomainError> {
        let mut state = self.state.lock();
        let result = state.settings.require_authority().and_then(|_| {
            u64::try_from(max)
                .ok()
                .filter(|m| *m > 0)
                .ok_or_else(|| DomainError::invalid_parameter("max-artworks must be positive"))
        });
        let max = result.inspect_err(log_rejection("set_max_artworks"))?;
        state.settings.max_artworks = max;
        info!("Artwork capacity updated");
        Ok(true)
    }

    #[must_use]
    pub fn get_authority_contract(&self) -> Option<Principal> {
        self.state.lock().settings.authority.clone()
    }

    #[must_use]
    pub fn get_registration_fee(&self) -> u64 {
        self.state.lock().settings.registration_fee
    }

    #[must_use]
    pub fn get_max_artworks(&self) -> u64 {
        self.state.lock().settings.max_artworks
    }

    // === Registration ===

    /// Registers an artwork owned by the caller and returns its id.
    ///
    /// Checks run in a fixed order and the first failure is returned. The
    /// fee is settled before anything is written.
    ///
    /// # Errors
    ///
    /// See [`ip_registry_sdk::IpRegistryClient::register_artwork`].
    #[instrument(
        skip(self, ctx, input),
        fields(caller = %ctx.caller, height = ctx.block_height, hash = %input.hash)
    )]
    pub fn register_artwork(
        &self,
        ctx: &CallContext,
        input: NewArtwork,
    ) -> Result<ArtworkId, DomainError> {
        let mut state = self.state.lock();
        let (id, hash) = self
            .register_locked(&mut state, ctx, input)
            .inspect_err(log_rejection("register_artwork"))?;

        info!(artwork_id = id, "Artwork registered");
        self.events.publish(&RegistryEvent::ArtworkRegistered {
            id,
            hash: hash.into_inner(),
        });
        Ok(id)
    }

    fn register_locked(
        &self,
        state: &mut RegistryState,
        ctx: &CallContext,
        input: NewArtwork,
    ) -> Result<(ArtworkId, ContentHash), DomainError> {
        let RegistryState { settings, repo } = state;

        let id = repo.next_id();
        if id >= settings.max_artworks {
            return Err(DomainError::CapacityExceeded {
                max: settings.max_artworks,
            });
        }

        let hash = ContentHash::parse(&input.hash)?;
        validate_title(&input.title)?;
        validate_description(&input.description)?;
        let metadata = validate_metadata(input.metadata, ctx.block_height)?;

        if repo.contains(hash.as_str()) {
            return Err(DomainError::already_exists(hash.into_inner()));
        }

        let authority = settings.require_authority()?;
        self.settlement
            .transfer(settings.registration_fee, &ctx.caller, authority)?;
        debug!(fee = settings.registration_fee, to = %authority, "Registration fee settled");

        let artwork = Artwork {
            id,
            owner: ctx.caller.clone(),
            title: input.title,
            description: input.description,
            metadata,
            timestamp: ctx.block_height,
            status: true,
        };
        let id = repo.insert(hash.clone(), artwork)?;
        Ok((id, hash))
    }

    // === Mutation ===

    /// Replaces title and description of an artwork owned by the caller and
    /// overwrites its audit record.
    ///
    /// # Errors
    ///
    /// `NotFound`, `UpdateNotAuthorized`, `InvalidTitle`, `InvalidDescription`.
    #[instrument(skip(self, ctx, title, description), fields(caller = %ctx.caller))]
    pub fn update_artwork(
        &self,
        ctx: &CallContext,
        hash: &str,
        title: String,
        description: String,
    ) -> Result<bool, DomainError> {
        let mut state = self.state.lock();
        let id = Self::update_locked(&mut state, ctx, hash, title, description)
            .inspect_err(log_rejection("update_artwork"))?;

        info!(artwork_id = id, "Artwork updated");
        self.events.publish(&RegistryEvent::ArtworkUpdated {
            id,
            hash: hash.to_owned(),
        });
        Ok(true)
    }

    fn update_locked(
        state: &mut RegistryState,
        ctx: &CallContext,
        hash: &str,
        title: String,
        description: String,
    ) -> Result<ArtworkId, DomainError> {
        let artwork = state
            .repo
            .get(hash)
            .ok_or_else(|| DomainError::not_found(hash))?;
        if artwork.owner != ctx.caller {
            return Err(DomainError::UpdateNotAuthorized);
        }
        validate_title(&title)?;
        validate_description(&description)?;

        let record = ArtworkUpdate {
            title: title.clone(),
            description: description.clone(),
            timestamp: ctx.block_height,
            updater: ctx.caller.clone(),
        };
        state
            .repo
            .update_content(hash, title, description, ctx.block_height)?;
        state.repo.record_update(artwork.id, record);
        Ok(artwork.id)
    }

    /// Moves an artwork owned by the caller to `recipient`.
    ///
    /// The recipient is not checked; transferring to the current owner
    /// re-appends the id at the end of its list.
    ///
    /// # Errors
    ///
    /// `NotFound`, `TransferNotAllowed`.
    #[instrument(skip(self, ctx, recipient), fields(caller = %ctx.caller, recipient = %recipient))]
    pub fn transfer_artwork_ownership(
        &self,
        ctx: &CallContext,
        hash: &str,
        recipient: Principal,
    ) -> Result<bool, DomainError> {
        let mut state = self.state.lock();
        let moved = Self::transfer_locked(&mut state, ctx, hash, recipient)
            .inspect_err(log_rejection("transfer_artwork_ownership"))?;

        info!(artwork_id = moved.id, "Artwork ownership transferred");
        self.events.publish(&RegistryEvent::ArtworkTransferred {
            id: moved.id,
            hash: hash.to_owned(),
            new_owner: moved.owner,
        });
        Ok(true)
    }

    fn transfer_locked(
        state: &mut RegistryState,
        ctx: &CallContext,
        hash: &str,
        recipient: Principal,
    ) -> Result<Artwork, DomainError> {
        let artwork = state
            .repo
            .get(hash)
            .ok_or_else(|| DomainError::not_found(hash))?;
        if artwork.owner != ctx.caller {
            return Err(DomainError::TransferNotAllowed);
        }
        state.repo.change_owner(hash, recipient)
    }

    // === Queries ===

    #[must_use]
    #[instrument(skip(self))]
    pub fn get_artwork(&self, hash: &str) -> Option<Artwork> {
        debug!("Looking up artwork by hash");
        self.state.lock().repo.get(hash)
    }

    #[must_use]
    #[instrument(skip(self))]
    pub fn get_artwork_by_id(&self, id: ArtworkId) -> Option<Artwork> {
        debug!("Looking up artwork by id");
        let state = self.state.lock();
        state
            .repo
            .hash_of(id)
            .and_then(|hash| state.repo.get(hash.as_str()))
    }

    #[must_use]
    pub fn get_owner_artworks(&self, owner: &Principal) -> Vec<ArtworkId> {
        self.state.lock().repo.owner_artworks(owner)
    }

    /// Number of registered artworks; also the next id to be assigned.
    #[must_use]
    pub fn get_artwork_count(&self) -> u64 {
        self.state.lock().repo.next_id()
    }

    #[must_use]
    pub fn check_artwork_existence(&self, hash: &str) -> bool {
        self.state.lock().repo.contains(hash)
    }

    #[must_use]
    pub fn get_artwork_update(&self, id: ArtworkId) -> Option<ArtworkUpdate> {
        self.state.lock().repo.latest_update(id)
    }

    /// Verifies that the indexes agree with the primary store.
    ///
    /// # Errors
    ///
    /// `Internal` listing every divergence found.
    pub fn check_consistency(&self) -> Result<(), DomainError> {
        self.state
            .lock()
            .repo
            .check_consistency()
            .map_err(|errors| DomainError::internal(errors.join("; ")))
    }
}
