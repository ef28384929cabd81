//! Notifications emitted by the registry.

use serde::{Deserialize, Serialize};

use crate::models::{ArtworkId, Principal};

/// Transport-agnostic registry event.
///
/// Exactly one event is emitted per successful mutating call, after the
/// state change is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum RegistryEvent {
    ArtworkRegistered {
        id: ArtworkId,
        hash: String,
    },
    ArtworkUpdated {
        id: ArtworkId,
        hash: String,
    },
    ArtworkTransferred {
        id: ArtworkId,
        hash: String,
        #[serde(rename = "newOwner")]
        new_owner: Principal,
    },
}

impl RegistryEvent {
    /// Wire name of the event, e.g. `artwork-registered`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ArtworkRegistered { .. } => "artwork-registered",
            Self::ArtworkUpdated { .. } => "artwork-updated",
            Self::ArtworkTransferred { .. } => "artwork-transferred",
        }
    }

    #[must_use]
    pub const fn id(&self) -> ArtworkId {
        match self {
            Self::ArtworkRegistered { id, .. }
            | Self::ArtworkUpdated { id, .. }
            | Self::ArtworkTransferred { id, .. } => *id,
        }
    }

    #[must_use]
    pub fn hash(&self) -> &str {
        match self {
            Self::ArtworkRegistered { hash, .. }
            | Self::ArtworkUpdated { hash, .. }
            | Self::ArtworkTransferred { hash, .. } => hash,
        }
    }
}
