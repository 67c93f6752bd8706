//! # Canonical Payload Digest
//!
//! Deterministic encoding and hashing of `SubmissionPayload`. The issuer
//! signs the *signing digest*; the registry recomputes it from the submitted
//! payload and recovers the signer from the attached signature.
//!
//! ## Encoding
//!
//! Fixed-width 32-byte big-endian words, in this order:
//! `account` (left-padded), `created_at`, `price`, `beacon_id`,
//! `traits.len()`, then one `(id, value)` word pair per trait in submitted
//! order. Every field is fixed width, so two payloads differing in any
//! field produce different encodings.
//!
//! ## Signing digest
//!
//! `keccak256("\x19Ethereum Signed Message:\n32" || keccak256(encoding))`,
//! matching the issuer-side signer's signed-message convention.

use super::entities::SubmissionPayload;
use registry_types::{Hash, U256};
use sha3::{Digest, Keccak256};

/// Prefix applied to the payload digest before signing.
const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Keccak-256 hash function.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    Hash::new(hash)
}

/// Canonical fixed-width encoding of a submission payload.
#[must_use]
pub fn encode_payload(payload: &SubmissionPayload) -> Vec<u8> {
    let mut out = Vec::with_capacity(32 * (5 + payload.traits.len() * 2));

    // account, left-padded to 32 bytes
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(payload.account.as_bytes());
    out.extend_from_slice(&word);

    push_u256(&mut out, U256::from(payload.created_at));
    push_u256(&mut out, payload.price);
    push_u256(&mut out, payload.beacon_id);
    push_u256(&mut out, U256::from(payload.traits.len()));

    for entry in &payload.traits {
        push_u256(&mut out, entry.id);
        push_u256(&mut out, entry.value);
    }

    out
}

/// Keccak-256 digest of the canonical payload encoding.
#[must_use]
pub fn payload_digest(payload: &SubmissionPayload) -> Hash {
    keccak256(&encode_payload(payload))
}

/// The digest the issuer actually signs: the payload digest wrapped in the
/// signed-message prefix and hashed again.
#[must_use]
pub fn signing_digest(payload: &SubmissionPayload) -> Hash {
    let inner = payload_digest(payload);
    let mut message = Vec::with_capacity(SIGNED_MESSAGE_PREFIX.len() + 32);
    message.extend_from_slice(SIGNED_MESSAGE_PREFIX);
    message.extend_from_slice(inner.as_bytes());
    keccak256(&message)
}

fn push_u256(out: &mut Vec<u8>, value: U256) {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    out.extend_from_slice(&word);
}

// =============================================================================
// TESTS
// =============================================================================
