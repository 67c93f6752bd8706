//! # Trait Ledger
//!
//! Per-account trait storage with diff-based event derivation.
//!
//! ## Data Structures
//!
//! - `records`: account → insertion-ordered trait entries + `updated_at`
//!
//! ## Invariants Enforced
//!
//! - Every stored entry was written by an accepted submission whose
//!   `created_at` equals the record's `updated_at`.
//! - Ids absent from the most recent submission are pruned (their delta is
//!   a full burn to zero).
//! - Exactly one event per changed id, none for unchanged ids; event order
//!   is old-order ids first, then new-only ids.

use super::entities::{AccountTraits, TraitEntry};
use super::events::RegistryEvent;
use registry_types::{Address, Timestamp, U256};
use std::collections::HashMap;

/// An account's stored trait set.
#[derive(Clone, Debug, Default)]
struct TraitRecord {
    /// Non-zero entries, in submitted order.
    entries: Vec<TraitEntry>,
    /// Timestamp of the submission that wrote this record.
    updated_at: Timestamp,
}

/// Owns all per-account trait state. The only mutation paths are `apply`
/// (accepted submission) and `clear` (beacon burn).
#[derive(Debug, Default)]
pub struct TraitLedger {
    records: HashMap<Address, TraitRecord>,
}

impl TraitLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a submission's trait set and derives balance-change events.
    ///
    /// Computes the diff against the previous snapshot in O(|old| + |new|):
    /// one mint event per increased id, one burn event per decreased id,
    /// nothing for unchanged ids. Ids missing from `new_traits` are burned
    /// to zero. The stored snapshot is replaced by the incoming non-zero
    /// entries, and `updated_at` becomes `new_updated_at`.
    pub fn apply(
        &mut self,
        account: Address,
        new_traits: &[TraitEntry],
        new_updated_at: Timestamp,
    ) -> Vec<RegistryEvent> {
        let old_entries = self
            .records
            .get(&account)
            .map(|r| r.entries.clone())
            .unwrap_or_default();

        // Last write wins on duplicate ids; first occurrence fixes the order.
        let mut new_values: HashMap<U256, U256> = HashMap::with_capacity(new_traits.len());
        let mut new_order: Vec<U256> = Vec::with_capacity(new_traits.len());
        for entry in new_traits {
            if new_values.insert(entry.id, entry.value).is_none() {
                new_order.push(entry.id);
            }
        }

        let old_values: HashMap<U256, U256> =
            old_entries.iter().map(|e| (e.id, e.value)).collect();

        let mut events = Vec::new();

        // Old-order ids first.
        for entry in &old_entries {
            let new_value = new_values.get(&entry.id).copied().unwrap_or_default();
            if let Some(event) = diff_event(account, entry.id, entry.value, new_value) {
                events.push(event);
            }
        }

        // Then ids only present in the new set.
        for &id in &new_order {
            if old_values.contains_key(&id) {
                continue;
            }
            let new_value = new_values[&id];
            if let Some(event) = diff_event(account, id, U256::zero(), new_value) {
                events.push(event);
            }
        }

        let entries = new_order
            .into_iter()
            .filter_map(|id| {
                let value = new_values[&id];
                (!value.is_zero()).then_some(TraitEntry::new(id, value))
            })
            .collect();

        self.records.insert(
            account,
            TraitRecord {
                entries,
                updated_at: new_updated_at,
            },
        );

        events
    }

    /// Reads a trait value with an aging window.
    ///
    /// Returns zero if the account has no record, if the id is absent, or
    /// if `max_age` is non-zero and the record is older than `max_age`
    /// seconds at `now`.
    #[must_use]
    pub fn read(&self, account: &Address, id: U256, max_age: u64, now: Timestamp) -> U256 {
        let Some(record) = self.records.get(account) else {
            return U256::zero();
        };

        if max_age != 0 && now.saturating_sub(record.updated_at) > max_age {
            return U256::zero();
        }

        record
            .entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.value)
            .unwrap_or_default()
    }

    /// Returns the account's full trait snapshot in stored order. Empty
    /// (with `updated_at` zero) when the account has no record.
    #[must_use]
    pub fn all_traits(&self, account: &Address) -> AccountTraits {
        let Some(record) = self.records.get(account) else {
            return AccountTraits::default();
        };

        AccountTraits {
            trait_ids: record.entries.iter().map(|e| e.id).collect(),
            trait_values: record.entries.iter().map(|e| e.value).collect(),
            updated_at: record.updated_at,
        }
    }

    /// Returns the account's non-zero entries in stored order.
    #[must_use]
    pub fn entries(&self, account: &Address) -> Vec<TraitEntry> {
        self.records
            .get(account)
            .map(|r| r.entries.clone())
            .unwrap_or_default()
    }

    /// Timestamp of the account's last accepted submission (zero if none).
    #[must_use]
    pub fn updated_at(&self, account: &Address) -> Timestamp {
        self.records
            .get(account)
            .map(|r| r.updated_at)
            .unwrap_or_default()
    }

    /// Removes the account's record entirely. The burn path's eviction:
    /// afterwards every read returns zero and `updated_at` is zero.
    pub fn clear(&mut self, account: &Address) {
        self.records.remove(account);
    }
}

/// Single-transfer event for one id's change, or None if unchanged.
fn diff_event(
    account: Address,
    id: U256,
    old_value: U256,
    new_value: U256,
) -> Option<RegistryEvent> {
    if old_value == new_value {
        None
    } else if new_value > old_value {
        Some(RegistryEvent::mint(account, id, new_value - old_value))
    } else {
        Some(RegistryEvent::burn(account, id, old_value - new_value))
    }
}

// =============================================================================
// TESTS
// =============================================================================
