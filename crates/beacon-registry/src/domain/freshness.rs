//! # Freshness Guard
//!
//! Rejects stale and replayed submissions. There is no nonce: the payload's
//! `created_at` is the nonce, and it must be strictly increasing across an
//! account's accepted submissions.

use super::errors::RegistryError;
use registry_types::Timestamp;

/// Checks a submission's claimed creation time.
///
/// # Errors
/// - `SignatureExpired` if `now > created_at + ttl_seconds`.
/// - `InvalidData` if `created_at <= prior_updated_at` (exact replays and
///   out-of-order resubmissions, including resubmitting an already accepted
///   payload).
pub fn check_fresh(
    created_at: Timestamp,
    now: Timestamp,
    ttl_seconds: u64,
    prior_updated_at: Timestamp,
) -> Result<(), RegistryError> {
    if now > created_at.saturating_add(ttl_seconds) {
        return Err(RegistryError::SignatureExpired);
    }

    if created_at <= prior_updated_at {
        return Err(RegistryError::InvalidData);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
