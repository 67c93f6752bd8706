//! # Beacon Ledger
//!
//! Owns the one-per-account beacon identifier and its reverse owner map.
//!
//! ## Invariants Enforced
//!
//! - At most one beacon id is live per account at a time.
//! - A live beacon id maps to exactly one account.
//! - Minting is idempotent: resubmission never re-mints, and the original
//!   id is kept even if a later payload carries a different one.

use super::events::RegistryEvent;
use registry_types::{Address, U256};
use std::collections::HashMap;

/// Beacon ownership state. Burn-side eviction of trait state is composed
/// by the service, which owns both ledgers.
#[derive(Debug, Default)]
pub struct BeaconLedger {
    /// account → live beacon id.
    by_account: HashMap<Address, U256>,
    /// live beacon id → owning account.
    by_id: HashMap<U256, Address>,
}

impl BeaconLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints `beacon_id` for `account` if it has no live beacon, returning
    /// the quantity-1 mint event. Returns None (and changes nothing) if the
    /// account already holds a beacon.
    pub fn mint_if_absent(&mut self, account: Address, beacon_id: U256) -> Option<RegistryEvent> {
        if self.by_account.contains_key(&account) {
            return None;
        }

        self.by_account.insert(account, beacon_id);
        self.by_id.insert(beacon_id, account);
        Some(RegistryEvent::mint(account, beacon_id, U256::from(1)))
    }

    /// Removes the account's beacon record, returning the id that was live.
    /// Returns None if the account has no beacon.
    pub fn remove(&mut self, account: &Address) -> Option<U256> {
        let beacon_id = self.by_account.remove(account)?;
        self.by_id.remove(&beacon_id);
        Some(beacon_id)
    }

    /// The account that owns `beacon_id`, if it is live.
    #[must_use]
    pub fn owner_of(&self, beacon_id: U256) -> Option<Address> {
        self.by_id.get(&beacon_id).copied()
    }

    /// The account's live beacon id, if any.
    #[must_use]
    pub fn beacon_id_of(&self, account: &Address) -> Option<U256> {
        self.by_account.get(account).copied()
    }
}

// =============================================================================
// TESTS
// =============================================================================
