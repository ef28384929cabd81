//! Domain error types for the IP Registry module.

use ip_registry_sdk::IpRegistryError;
use thiserror::Error;

use super::ports::SettlementError;

/// Domain-level errors for the IP Registry module.
///
/// One variant per rejection reason; a returned error always means the
/// registry state is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not authorized")]
    NotAuthorized,

    #[error("Authority contract already configured")]
    AlreadyConfigured,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

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

    #[error("Artwork already exists: {0}")]
    AlreadyExists(String),

    #[error("Artwork not found: {0}")]
    NotFound(String),

    #[error("Update not authorized")]
    UpdateNotAuthorized,

    #[error("Transfer not allowed")]
    TransferNotAllowed,

    #[error("Fee settlement failed: {0}")]
    Settlement(#[from] SettlementError),

    /// A storage invariant was violated.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
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

    /// Short stable name of the error kind, used as a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotAuthorized => "not_authorized",
            Self::AlreadyConfigured => "already_configured",
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::InvalidHash { .. } => "invalid_hash",
            Self::InvalidTitle { .. } => "invalid_title",
            Self::InvalidDescription { .. } => "invalid_description",
            Self::InvalidCategory { .. } => "invalid_category",
            Self::InvalidCreatedAt { .. } => "invalid_created_at",
            Self::InvalidTag(_) => "invalid_tag",
            Self::InvalidMedium { .. } => "invalid_medium",
            Self::InvalidDimensions { .. } => "invalid_dimensions",
            Self::InvalidFileType(_) => "invalid_file_type",
            Self::InvalidRoyaltyRate(_) => "invalid_royalty_rate",
            Self::AlreadyExists(_) => "already_exists",
            Self::NotFound(_) => "not_found",
            Self::UpdateNotAuthorized => "update_not_authorized",
            Self::TransferNotAllowed => "transfer_not_allowed",
            Self::Settlement(_) => "settlement",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<DomainError> for IpRegistryError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotAuthorized => Self::NotAuthorized,
            DomainError::AlreadyConfigured => Self::AlreadyConfigured,
            DomainError::InvalidParameter(msg) => Self::InvalidParameter(msg),
            DomainError::CapacityExceeded { max } => Self::CapacityExceeded { max },
            DomainError::InvalidHash { len } => Self::InvalidHash { len },
            DomainError::InvalidTitle { len } => Self::InvalidTitle { len },
            DomainError::InvalidDescription { len } => Self::InvalidDescription { len },
            DomainError::InvalidCategory { len } => Self::InvalidCategory { len },
            DomainError::InvalidCreatedAt {
                created_at,
                current,
            } => Self::InvalidCreatedAt {
                created_at,
                current,
            },
            DomainError::InvalidTag(tag) => Self::InvalidTag(tag),
            DomainError::InvalidMedium { len } => Self::InvalidMedium { len },
            DomainError::InvalidDimensions { width, height } => {
                Self::InvalidDimensions { width, height }
            }
            DomainError::InvalidFileType(ft) => Self::InvalidFileType(ft),
            DomainError::InvalidRoyaltyRate(rate) => Self::InvalidRoyaltyRate(rate),
            DomainError::AlreadyExists(hash) => Self::AlreadyExists(hash),
            DomainError::NotFound(hash) => Self::NotFound(hash),
            DomainError::UpdateNotAuthorized => Self::UpdateNotAuthorized,
            DomainError::TransferNotAllowed => Self::TransferNotAllowed,
            DomainError::Settlement(err) => Self::Settlement {
                code: err.code(),
                message: err.to_string(),
            },
            DomainError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = DomainError::invalid_parameter("max-artworks must be positive");
        assert!(matches!(err, DomainError::InvalidParameter(_)));

        let err = DomainError::not_found("abc");
        assert!(matches!(err, DomainError::NotFound(_)));

        let err = DomainError::already_exists("abc");
        assert!(matches!(err, DomainError::AlreadyExists(_)));

        let err = DomainError::internal("index out of sync");
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[test]
    fn test_domain_to_sdk_error_conversion() {
        let sdk_err: IpRegistryError = DomainError::not_found("abc").into();
        assert!(sdk_err.is_not_found());

        let sdk_err: IpRegistryError = DomainError::already_exists("abc").into();
        assert!(sdk_err.is_already_exists());

        let sdk_err: IpRegistryError = DomainError::TransferNotAllowed.into();
        assert!(sdk_err.is_not_authorized());

        let sdk_err: IpRegistryError = DomainError::UpdateNotAuthorized.into();
        assert_eq!(sdk_err, IpRegistryError::UpdateNotAuthorized);
        assert_eq!(sdk_err.code(), 114);
        assert!(sdk_err.is_not_authorized());

        let sdk_err: IpRegistryError = DomainError::InvalidHash { len: 3 }.into();
        assert_eq!(sdk_err, IpRegistryError::InvalidHash { len: 3 });
    }

    #[test]
    fn test_settlement_error_keeps_ledger_code() {
        let domain_err: DomainError = SettlementError::InsufficientBalance {
            available: 10,
            required: 100,
        }
        .into();
        let sdk_err: IpRegistryError = domain_err.into();
        assert_eq!(sdk_err.code(), 1);
        assert!(matches!(sdk_err, IpRegistryError::Settlement { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::CapacityExceeded { max: 5 };
        assert_eq!(err.to_string(), "Artwork capacity exceeded: limit is 5");

        let err = DomainError::Settlement(SettlementError::SelfTransfer);
        assert_eq!(
            err.to_string(),
            "Fee settlement failed: sender and recipient are the same principal"
        );

        let err = DomainError::InvalidTag("x".repeat(21));
        assert_eq!(err.kind(), "invalid_tag");
    }
}
