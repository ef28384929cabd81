//! Outbound ports: collaborators the registry calls but does not own.

use ip_registry_sdk::Principal;
use thiserror::Error;

/// Failure reported by the settlement layer for a single transfer.
///
/// Codes follow the ledger's native transfer errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error("insufficient balance: {available} available, {required} required")]
    InsufficientBalance { available: u64, required: u64 },

    #[error("sender and recipient are the same principal")]
    SelfTransfer,

    #[error("transfer amount must be positive")]
    NonPositiveAmount,

    #[error("transfer rejected: {reason}")]
    Rejected { code: u32, reason: String },
}

impl SettlementError {
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::InsufficientBalance { .. } => 1,
            Self::SelfTransfer => 2,
            Self::NonPositiveAmount => 3,
            Self::Rejected { code, .. } => *code,
        }
    }
}

/// Value transfer capability of the hosting ledger.
///
/// Either the transfer is committed and `Ok` is returned, or nothing moved.
pub trait SettlementPort: Send + Sync {
    /// # Errors
    ///
    /// Returns the ledger's reason when the transfer is not committed.
    fn transfer(&self, amount: u64, from: &Principal, to: &Principal)
    -> Result<(), SettlementError>;
}

/// Fire-and-forget sink for domain events.
pub trait EventPublisher<E>: Send + Sync {
    fn publish(&self, event: &E);
}
