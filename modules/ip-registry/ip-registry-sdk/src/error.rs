//! Public error types for the `ip-registry` module.
//!
//! These errors are safe to expose to other modules and consumers. Each
//! variant maps to exactly one failure kind; a failed call never changes
//! registry state.

use thiserror::Error;

/// Errors that can be returned by the `IpRegistryClient`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpRegistryError {
    /// Authority is not configured, or the caller may not act on the artwork.
    #[error("Not authorized")]
    NotAuthorized,

    /// The authority contract was already set.
    #[error("Authority contract already configured")]
    AlreadyConfigured,

    /// A configuration value was rejected.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The registry holds `max` artworks already.
    #[error("Artwork capacity exceeded: limit is {max}")]
    CapacityExceeded { max: u64 },

    #[error("Invalid content hash: expected 64 characters, got {len}")]
    InvalidHash { len: usize },

    #[error("Invalid title: length {len} outside 1..=100")]
    InvalidTitle { len: usize },

    #[error("Invalid description: length {len} exceeds 500")]
    InvalidDescription { len: usize },

    #[error("Invalid category: length {len} outside 1..=50")]
    InvalidCategory { len: usize },

    #[error("Invalid created-at: {created_at} is later than current height {current}")]
    InvalidCreatedAt { created_at: u64, current: u64 },

    #[error("Invalid tag: '{0}' exceeds 20 characters")]
    InvalidTag(String),

    #[error("Invalid medium: length {len} exceeds 50")]
    InvalidMedium { len: usize },

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("Invalid royalty rate: {0} exceeds 50")]
    InvalidRoyaltyRate(u32),

    /// An artwork with the same content hash already exists.
    #[error("Artwork already exists: {0}")]
    AlreadyExists(String),

    /// No artwork is registered under the hash.
    #[error("Artwork not found: {0}")]
    NotFound(String),

    /// Only the current owner may update an artwork.
    #[error("Update not authorized")]
    UpdateNotAuthorized,

    /// Only the current owner may transfer an artwork.
    #[error("Transfer not allowed")]
    TransferNotAllowed,

    /// The registration fee could not be settled.
    #[error("Fee settlement failed (code {code}): {message}")]
    Settlement { code: u32, message: String },

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IpRegistryError {
    /// Creates an `InvalidParameter` error.
    #[must_use]
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(hash: impl Into<String>) -> Self {
        Self::NotFound(hash.into())
    }

    /// Creates an `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(hash: impl Into<String>) -> Self {
        Self::AlreadyExists(hash.into())
    }

    /// Creates an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Numeric error code of the on-chain contract this registry mirrors.
    ///
    /// `AlreadyConfigured` shares code 100 with `NotAuthorized`. Settlement
    /// failures report the settlement layer's own code; `Internal` reports 0.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::NotAuthorized | Self::AlreadyConfigured => 100,
            Self::InvalidHash { .. } => 101,
            Self::InvalidTitle { .. } => 102,
            Self::InvalidDescription { .. } => 103,
            Self::AlreadyExists(_) => 105,
            Self::NotFound(_) => 106,
            Self::InvalidCategory { .. } => 107,
            Self::InvalidCreatedAt { .. } => 108,
            Self::TransferNotAllowed => 110,
            Self::UpdateNotAuthorized => 114,
            Self::CapacityExceeded { .. } => 112,
            Self::InvalidParameter(_) => 113,
            Self::InvalidTag(_) => 116,
            Self::InvalidMedium { .. } => 117,
            Self::InvalidDimensions { .. } => 118,
            Self::InvalidFileType(_) => 119,
            Self::InvalidRoyaltyRate(_) => 120,
            Self::Settlement { code, .. } => *code,
            Self::Internal(_) => 0,
        }
    }

    /// Returns `true` for the not-authorized class: `NotAuthorized` and
    /// `UpdateNotAuthorized` and `TransferNotAllowed`.
    #[must_use]
    pub const fn is_not_authorized(&self) -> bool {
        matches!(
            self,
            Self::NotAuthorized | Self::UpdateNotAuthorized | Self::TransferNotAllowed
        )
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` if this is an already exists error.
    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    /// Returns `true` if the input failed a format or range check.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_)
                | Self::InvalidHash { .. }
                | Self::InvalidTitle { .. }
                | Self::InvalidDescription { .. }
                | Self::InvalidCategory { .. }
                | Self::InvalidCreatedAt { .. }
                | Self::InvalidTag(_)
                | Self::InvalidMedium { .. }
                | Self::InvalidDimensions { .. }
                | Self::InvalidFileType(_)
                | Self::InvalidRoyaltyRate(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_follow_contract() {
        assert_eq!(IpRegistryError::NotAuthorized.code(), 100);
        assert_eq!(IpRegistryError::AlreadyConfigured.code(), 100);
        assert_eq!(IpRegistryError::InvalidHash { len: 5 }.code(), 101);
        assert_eq!(IpRegistryError::InvalidTitle { len: 0 }.code(), 102);
        assert_eq!(IpRegistryError::already_exists("h").code(), 105);
        assert_eq!(IpRegistryError::not_found("h").code(), 106);
        assert_eq!(IpRegistryError::TransferNotAllowed.code(), 110);
        assert_eq!(IpRegistryError::UpdateNotAuthorized.code(), 114);
        assert_eq!(IpRegistryError::CapacityExceeded { max: 5 }.code(), 112);
        assert_eq!(IpRegistryError::invalid_parameter("max").code(), 113);
        assert_eq!(IpRegistryError::InvalidRoyaltyRate(51).code(), 120);
        assert_eq!(
            IpRegistryError::Settlement {
                code: 1,
                message: "insufficient balance".to_owned()
            }
            .code(),
            1
        );
    }

    #[test]
    fn test_error_classes() {
        assert!(IpRegistryError::NotAuthorized.is_not_authorized());
        assert!(IpRegistryError::TransferNotAllowed.is_not_authorized());
        assert!(IpRegistryError::UpdateNotAuthorized.is_not_authorized());
        assert!(!IpRegistryError::AlreadyConfigured.is_not_authorized());

        assert!(IpRegistryError::not_found("h").is_not_found());
        assert!(IpRegistryError::already_exists("h").is_already_exists());

        assert!(IpRegistryError::InvalidTag("x".repeat(21)).is_validation());
        assert!(!IpRegistryError::CapacityExceeded { max: 1 }.is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = IpRegistryError::InvalidHash { len: 5 };
        assert_eq!(
            err.to_string(),
            "Invalid content hash: expected 64 characters, got 5"
        );

        let err = IpRegistryError::InvalidCreatedAt {
            created_at: 10,
            current: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid created-at: 10 is later than current height 4"
        );

        let err = IpRegistryError::AlreadyConfigured;
        assert_eq!(err.to_string(), "Authority contract already configured");
    }
}
