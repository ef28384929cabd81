//! Repository trait for artwork storage.

use ip_registry_sdk::{Artwork, ArtworkId, ArtworkUpdate, BlockHeight, Principal};

use super::error::DomainError;
use super::model::ContentHash;

/// Storage for artworks and the indexes derived from them.
///
/// Implementations keep the primary store (hash -> artwork), the reverse
/// index (id -> hash) and the owner index (owner -> ids in acquisition order)
/// in lock-step. Callers serialize access; mutating methods take `&mut self`.
pub trait ArtworkRepository: Send {
    /// Retrieves an artwork by content hash.
    fn get(&self, hash: &str) -> Option<Artwork>;

    /// Resolves an id through the reverse index.
    fn hash_of(&self, id: ArtworkId) -> Option<ContentHash>;

    fn contains(&self, hash: &str) -> bool;

    /// Ids owned by `owner`, empty if the owner was never seen.
    fn owner_artworks(&self, owner: &Principal) -> Vec<ArtworkId>;

    /// The id the next insert receives; equals the number of stored artworks.
    fn next_id(&self) -> ArtworkId;

    /// Stores a new artwork and appends its id to its owner's list.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if the hash is taken
    /// - `Internal` if `artwork.id` is not [`Self::next_id`]
    fn insert(&mut self, hash: ContentHash, artwork: Artwork) -> Result<ArtworkId, DomainError>;

    /// Replaces title, description and timestamp in place.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no artwork is stored under `hash`.
    fn update_content(
        &mut self,
        hash: &str,
        title: String,
        description: String,
        timestamp: BlockHeight,
    ) -> Result<Artwork, DomainError>;

    /// Sets the owner and moves the id from the old owner's list to the end
    /// of the recipient's list.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no artwork is stored under `hash`.
    fn change_owner(&mut self, hash: &str, recipient: Principal) -> Result<Artwork, DomainError>;

    /// Overwrites the audit record of `id`.
    fn record_update(&mut self, id: ArtworkId, update: ArtworkUpdate);

    fn latest_update(&self, id: ArtworkId) -> Option<ArtworkUpdate>;

    /// Re-derives the indexes from the primary store and lists every
    /// divergence found.
    ///
    /// # Errors
    ///
    /// Returns one message per inconsistency.
    fn check_consistency(&self) -> Result<(), Vec<String>>;
}
