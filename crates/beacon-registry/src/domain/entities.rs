//! # Domain Entities
//!
//! Payloads and records that flow through the registry. A
//! `SubmissionPayload` is ephemeral: only its effects (trait records,
//! beacon records, events) persist.

use registry_types::{Address, Timestamp, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// TRAITS
// =============================================================================

/// A single scored trait attributed to an account by the issuer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitEntry {
    /// Trait identifier (large unsigned integer, issuer-assigned).
    pub id: U256,
    /// Trait value. A value of zero is equivalent to the trait being absent.
    pub value: U256,
}

impl TraitEntry {
    /// Creates a new trait entry.
    #[must_use]
    pub const fn new(id: U256, value: U256) -> Self {
        Self { id, value }
    }
}

// =============================================================================
// SUBMISSION PAYLOAD
// =============================================================================

/// The issuer-signed payload carried by a trait submission.
///
/// Field order is load-bearing: the canonical digest encodes `account`,
/// `created_at`, `price`, `beacon_id`, then `traits` in submitted order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// The account the traits are attributed to.
    pub account: Address,
    /// Issuer-side creation time. Doubles as the replay nonce: it must be
    /// strictly greater than the account's last accepted submission.
    pub created_at: Timestamp,
    /// Price the submitter must attach, exactly.
    pub price: U256,
    /// Beacon id assigned by the issuer. Constant once minted.
    pub beacon_id: U256,
    /// Trait set, in issuer-chosen order.
    pub traits: Vec<TraitEntry>,
}

// =============================================================================
// ECDSA SIGNATURE
// =============================================================================

/// ECDSA signature (r, s, v) over the payload's signing digest.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// r component (32 bytes).
    pub r: [u8; 32],
    /// s component (32 bytes).
    pub s: [u8; 32],
    /// Recovery id (0 or 1, or 27/28 in legacy format).
    pub v: u8,
}

impl EcdsaSignature {
    /// Creates a new signature.
    #[must_use]
    pub const fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self { r, s, v }
    }
}

// =============================================================================
// QUERY RESULTS
// =============================================================================

/// Beacon state of an account: its beacon id and the timestamp of the most
/// recent accepted submission. Both are zero when the account holds no
/// beacon (never minted, or burned).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconData {
    /// The account's live beacon id, or zero.
    pub beacon_id: U256,
    /// Timestamp of the last accepted submission, or zero.
    pub updated_at: Timestamp,
}

/// Full trait snapshot of an account, in stored (submitted) order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTraits {
    /// Non-zero trait ids.
    pub trait_ids: Vec<U256>,
    /// Values, index-aligned with `trait_ids`.
    pub trait_values: Vec<U256>,
    /// Timestamp of the last accepted submission.
    pub updated_at: Timestamp,
}

// =============================================================================
// TESTS
// =============================================================================
