//! # In-Memory Fee Sink
//!
//! `FeeSink` adapter backed by a balance map. Used by tests and demos to
//! observe exactly how much the fee collector received, and to simulate a
//! destination that refuses transfers.

use crate::ports::outbound::{FeeSink, FeeSinkError};
use registry_types::{Address, U256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Fee sink that credits an in-memory balance per destination address.
#[derive(Debug, Default)]
pub struct InMemoryFeeSink {
    balances: Mutex<HashMap<Address, U256>>,
    failing: AtomicBool,
}

impl InMemoryFeeSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance credited to `address` so far.
    #[must_use]
    pub fn balance_of(&self, address: &Address) -> U256 {
        self.balances
            .lock()
            .expect("fee sink lock poisoned")
            .get(address)
            .copied()
            .unwrap_or_default()
    }

    /// Makes every subsequent `forward` fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl FeeSink for InMemoryFeeSink {
    fn forward(&self, to: Address, amount: U256) -> Result<(), FeeSinkError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(FeeSinkError::Rejected {
                reason: "destination refused transfer".to_string(),
            });
        }

        let mut balances = self.balances.lock().expect("fee sink lock poisoned");
        let entry = balances.entry(to).or_default();
        *entry = entry.saturating_add(amount);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
