//! Per-call execution context.

use crate::models::{BlockHeight, Principal};

/// Identity and time under which a registry operation runs.
///
/// The runtime hosting the registry supplies one of these for every call.
/// `block_height` must never decrease between calls admitted against the
/// same registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    /// The invoking principal.
    pub caller: Principal,
    /// Current chain height, used for timestamps and `created_at` checks.
    pub block_height: BlockHeight,
}

impl CallContext {
    #[must_use]
    pub fn new(caller: impl Into<Principal>, block_height: BlockHeight) -> Self {
        Self {
            caller: caller.into(),
            block_height,
        }
    }

    /// Returns a copy of this context invoked by another principal.
    #[must_use]
    pub fn with_caller(&self, caller: impl Into<Principal>) -> Self {
        Self {
            caller: caller.into(),
            block_height: self.block_height,
        }
    }

    /// Returns a copy of this context at another height.
    #[must_use]
    pub fn at_height(&self, block_height: BlockHeight) -> Self {
        Self {
            caller: self.caller.clone(),
            block_height,
        }
    }
}
