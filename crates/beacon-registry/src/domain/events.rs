//! # Registry Events
//!
//! Balance-change and lifecycle events derived by the ledgers. These are the
//! only way balances ever change: there is no transfer path, so the
//! soulbound invariant is structural rather than checked ad hoc.

use registry_types::{Address, Timestamp, U256};
use serde::{Deserialize, Serialize};

/// An event emitted by an accepted submission or a burn.
///
/// Mints move value from the zero address to an account; burns move value
/// from an account to the zero address. No event ever carries two non-zero
/// endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A single id's balance changed by `value`.
    TransferSingle {
        /// Source (zero address for mints).
        from: Address,
        /// Destination (zero address for burns).
        to: Address,
        /// Trait or beacon id.
        id: U256,
        /// Magnitude of the change.
        value: U256,
    },

    /// Several ids changed at once (beacon burn evicting all traits).
    TransferBatch {
        /// Source (zero address for mints).
        from: Address,
        /// Destination (zero address for burns).
        to: Address,
        /// Ids, index-aligned with `values`.
        ids: Vec<U256>,
        /// Magnitudes, index-aligned with `ids`.
        values: Vec<U256>,
    },

    /// A submission was accepted.
    SubmitTraits {
        /// Beacon id carried by the payload.
        beacon_id: U256,
        /// The payload's creation time, now the account's `updated_at`.
        created_at: Timestamp,
    },

    /// An account's beacon was burned.
    Burn {
        /// The burned beacon id.
        beacon_id: U256,
    },
}

impl RegistryEvent {
    /// Mint event: zero address → `to`.
    #[must_use]
    pub fn mint(to: Address, id: U256, value: U256) -> Self {
        Self::TransferSingle {
            from: Address::ZERO,
            to,
            id,
            value,
        }
    }

    /// Burn event: `from` → zero address.
    #[must_use]
    pub fn burn(from: Address, id: U256, value: U256) -> Self {
        Self::TransferSingle {
            from,
            to: Address::ZERO,
            id,
            value,
        }
    }

    /// Batch burn event: `from` → zero address for every id.
    #[must_use]
    pub fn burn_batch(from: Address, ids: Vec<U256>, values: Vec<U256>) -> Self {
        Self::TransferBatch {
            from,
            to: Address::ZERO,
            ids,
            values,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
