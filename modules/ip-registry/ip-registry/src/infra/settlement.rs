//! Settlement adapters.

use std::collections::HashMap;

use ip_registry_sdk::Principal;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::ports::{SettlementError, SettlementPort};

/// A fee transfer accepted by [`RecordingSettlement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeTransfer {
    pub amount: u64,
    pub from: Principal,
    pub to: Principal,
}

/// Accepts every transfer and remembers it.
#[derive(Debug, Default)]
pub struct RecordingSettlement {
    transfers: Mutex<Vec<FeeTransfer>>,
}

impl RecordingSettlement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transfers accepted so far, oldest first.
    #[must_use]
    pub fn transfers(&self) -> Vec<FeeTransfer> {
        self.transfers.lock().clone()
    }
}

impl SettlementPort for RecordingSettlement {
    fn transfer(
        &self,
        amount: u64,
        from: &Principal,
        to: &Principal,
    ) -> Result<(), SettlementError> {
        self.transfers.lock().push(FeeTransfer {
            amount,
            from: from.clone(),
            to: to.clone(),
        });
        Ok(())
    }
}

/// Balance-checked ledger.
///
/// Rejects the same transfers the native token ledger does, checked in this
/// order: zero amount, sender equals recipient, insufficient balance.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: Mutex<HashMap<Principal, u64>>,
}

impl InMemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style initial balance.
    #[must_use]
    pub fn with_balance(self, principal: impl Into<Principal>, amount: u64) -> Self {
        self.credit(&principal.into(), amount);
        self
    }

    pub fn credit(&self, principal: &Principal, amount: u64) {
        let mut balances = self.balances.lock();
        let balance = balances.entry(principal.clone()).or_default();
        *balance = balance.saturating_add(amount);
    }

    #[must_use]
    pub fn balance_of(&self, principal: &Principal) -> u64 {
        self.balances.lock().get(principal).copied().unwrap_or(0)
    }
}

impl SettlementPort for InMemoryLedger {
    fn transfer(
        &self,
        amount: u64,
        from: &Principal,
        to: &Principal,
    ) -> Result<(), SettlementError> {
        if amount == 0 {
            return Err(SettlementError::NonPositiveAmount);
        }
        if from == to {
            return Err(SettlementError::SelfTransfer);
        }

        let mut balances = self.balances.lock();
        let available = balances.get(from).copied().unwrap_or(0);
        if available < amount {
            return Err(SettlementError::InsufficientBalance {
                available,
                required: amount,
            });
        }

        balances.insert(from.clone(), available - amount);
        let credited = balances.entry(to.clone()).or_default();
        *credited = credited.saturating_add(amount);
        debug!(amount, %from, %to, "Ledger transfer committed");
        Ok(())
    }
}
