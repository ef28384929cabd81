//! In-memory artwork repository.

use std::collections::{HashMap, HashSet};

use ip_registry_sdk::{Artwork, ArtworkId, ArtworkUpdate, BlockHeight, Principal};

use crate::domain::error::DomainError;
use crate::domain::model::ContentHash;
use crate::domain::repo::ArtworkRepository;

/// In-memory storage for artworks.
///
/// Ids are dense, so the reverse index is a vector indexed by id and
/// `next_id` is its length.
#[derive(Debug, Default)]
pub struct InMemoryArtworkRepository {
    /// Primary store keyed by content hash.
    artworks: HashMap<ContentHash, Artwork>,
    /// Reverse index: position `i` holds the hash of artwork `i`.
    by_id: Vec<ContentHash>,
    /// Owner index in acquisition order.
    owners: HashMap<Principal, Vec<ArtworkId>>,
    /// Latest edit per artwork id.
    updates: HashMap<ArtworkId, ArtworkUpdate>,
}

impl InMemoryArtworkRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn get_mut(&mut self, hash: &str) -> Result<&mut Artwork, DomainError> {
        self.artworks
            .get_mut(hash)
            .ok_or_else(|| DomainError::not_found(hash))
    }
}

fn index_of(id: ArtworkId) -> Option<usize> {
    usize::try_from(id).ok()
}

impl ArtworkRepository for InMemoryArtworkRepository {
    fn get(&self, hash: &str) -> Option<Artwork> {
        self.artworks.get(hash).cloned()
    }

    fn hash_of(&self, id: ArtworkId) -> Option<ContentHash> {
        index_of(id).and_then(|i| self.by_id.get(i)).cloned()
    }

    fn contains(&self, hash: &str) -> bool {
        self.artworks.contains_key(hash)
    }

    fn owner_artworks(&self, owner: &Principal) -> Vec<ArtworkId> {
        self.owners.get(owner).cloned().unwrap_or_default()
    }

    fn next_id(&self) -> ArtworkId {
        self.by_id.len() as ArtworkId
    }

    fn insert(&mut self, hash: ContentHash, artwork: Artwork) -> Result<ArtworkId, DomainError> {
        if self.artworks.contains_key(&hash) {
            return Err(DomainError::already_exists(hash.into_inner()));
        }
        let id = self.next_id();
        if artwork.id != id {
            return Err(DomainError::internal(format!(
                "artwork id {} does not match next id {id}",
                artwork.id
            )));
        }

        self.owners
            .entry(artwork.owner.clone())
            .or_default()
            .push(id);
        self.by_id.push(hash.clone());
        self.artworks.insert(hash, artwork);
        Ok(id)
    }

    fn update_content(
        &mut self,
        hash: &str,
        title: String,
        description: String,
        timestamp: BlockHeight,
    ) -> Result<Artwork, DomainError> {
        let artwork = self.get_mut(hash)?;
        artwork.title = title;
        artwork.description = description;
        artwork.timestamp = timestamp;
        Ok(artwork.clone())
    }

    fn change_owner(&mut self, hash: &str, recipient: Principal) -> Result<Artwork, DomainError> {
        let artwork = self.get_mut(hash)?;
        let id = artwork.id;
        let previous = std::mem::replace(&mut artwork.owner, recipient.clone());
        let updated = artwork.clone();

        if let Some(ids) = self.owners.get_mut(&previous) {
            ids.retain(|owned| *owned != id);
        }
        self.owners.entry(recipient).or_default().push(id);
        Ok(updated)
    }

    fn record_update(&mut self, id: ArtworkId, update: ArtworkUpdate) {
        self.updates.insert(id, update);
    }

    fn latest_update(&self, id: ArtworkId) -> Option<ArtworkUpdate> {
        self.updates.get(&id).cloned()
    }

    fn check_consistency(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.by_id.len() != self.artworks.len() {
            errors.push(format!(
                "reverse index holds {} ids but store holds {} artworks",
                self.by_id.len(),
                self.artworks.len()
            ));
        }

        for (position, hash) in self.by_id.iter().enumerate() {
            match self.artworks.get(hash) {
                Some(artwork) if index_of(artwork.id) == Some(position) => {}
                Some(artwork) => errors.push(format!(
                    "{hash}: reverse index position {position} but artwork id {}",
                    artwork.id
                )),
                None => errors.push(format!("{hash}: in reverse index but not in store")),
            }
        }

        let mut seen = HashSet::new();
        for (owner, ids) in &self.owners {
            for id in ids {
                if !seen.insert(*id) {
                    errors.push(format!("id {id} listed more than once across owners"));
                }
                let owned_by = self
                    .hash_of(*id)
                    .and_then(|hash| self.artworks.get(&hash))
                    .map(|artwork| &artwork.owner);
                if owned_by != Some(owner) {
                    errors.push(format!("id {id} listed under {owner} but not owned by it"));
                }
            }
        }

        for (hash, artwork) in &self.artworks {
            if !seen.contains(&artwork.id) {
                errors.push(format!("{hash}: id {} missing from owner index", artwork.id));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
