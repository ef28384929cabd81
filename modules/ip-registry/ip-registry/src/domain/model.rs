//! Domain-only types: validated keys and the runtime settings record.

use std::borrow::Borrow;
use std::fmt;

use ip_registry_sdk::Principal;
use sha2::{Digest, Sha256};

use super::error::DomainError;
use crate::config::IpRegistryConfig;

/// Content hash that passed the length check.
///
/// The only way to build one is [`ContentHash::parse`], so every key in the
/// primary store is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Required length in characters.
    pub const LEN: usize = 64;

    /// # Errors
    ///
    /// Returns `InvalidHash` unless `raw` is exactly 64 characters long.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let len = raw.chars().count();
        if len != Self::LEN {
            return Err(DomainError::InvalidHash { len });
        }
        Ok(Self(raw.to_owned()))
    }

    /// Hex-encoded SHA-256 of `content`.
    #[must_use]
    pub fn digest(content: &[u8]) -> Self {
        Self(hex::encode(Sha256::digest(content)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Borrow<str> for ContentHash {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry-wide settings mutated by the administrative operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    /// Administrative principal; `None` until configured, then fixed.
    pub authority: Option<Principal>,
    pub registration_fee: u64,
    pub max_artworks: u64,
}

impl RegistrySettings {
    #[must_use]
    pub fn from_config(config: &IpRegistryConfig) -> Self {
        Self {
            authority: None,
            registration_fee: config.registration_fee,
            max_artworks: config.max_artworks,
        }
    }

    /// Returns the authority, or `NotAuthorized` while it is unset.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` if no authority has been configured.
    pub fn require_authority(&self) -> Result<&Principal, DomainError> {
        self.authority.as_ref().ok_or(DomainError::NotAuthorized)
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self::from_config(&IpRegistryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_requires_exactly_64_chars() {
        assert!(ContentHash::parse(&"a".repeat(64)).is_ok());
        assert_eq!(
            ContentHash::parse(&"a".repeat(63)),
            Err(DomainError::InvalidHash { len: 63 })
        );
        assert_eq!(
            ContentHash::parse(&"a".repeat(65)),
            Err(DomainError::InvalidHash { len: 65 })
        );
        assert_eq!(
            ContentHash::parse(""),
            Err(DomainError::InvalidHash { len: 0 })
        );
    }

    #[test]
    fn test_hash_length_counts_characters() {
        let hash = "\u{e9}".repeat(64);
        assert!(ContentHash::parse(&hash).is_ok());
    }

    #[test]
    fn test_digest_is_a_valid_hash() {
        let hash = ContentHash::digest(b"abc");
        assert_eq!(
            hash.as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(ContentHash::parse(hash.as_str()), Ok(hash));
    }

    #[test]
    fn test_settings_start_without_authority() {
        let settings = RegistrySettings::default();
        assert_eq!(settings.authority, None);
        assert_eq!(settings.registration_fee, 100);
        assert_eq!(settings.max_artworks, 1_000_000);
        assert_eq!(
            settings.require_authority(),
            Err(DomainError::NotAuthorized)
        );
    }
}
