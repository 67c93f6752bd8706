//! # Error Types
//!
//! All failures are synchronous and named; a failed call leaves registry
//! state untouched. `SignatureError` covers low-level ECDSA failures and is
//! collapsed into `RegistryError::InvalidSignature` at the service boundary.

use thiserror::Error;

// =============================================================================
// SIGNATURE ERRORS
// =============================================================================

/// Errors from signature recovery and validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature format is invalid (scalar out of range, bad encoding).
    #[error("invalid signature format")]
    InvalidFormat,

    /// Signature has a high S value (EIP-2 malleability protection).
    #[error("malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28).
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover a public key from the signature.
    #[error("failed to recover public key")]
    RecoveryFailed,
}

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors returned by registry entry points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not the registry owner.
    #[error("caller is not the owner")]
    NotOwner,

    /// The zero address is not a valid account for this operation.
    #[error("zero address is not a valid account")]
    ZeroAddress,

    /// `initialize` may only run once per instance.
    #[error("registry is already initialized")]
    AlreadyInitialized,

    /// The registry is paused; reads and writes are both gated.
    #[error("registry is paused")]
    Paused,

    /// The recovered signer does not match the trusted issuer, or the
    /// signature itself is malformed.
    #[error("invalid signature")]
    InvalidSignature,

    /// The submission's `created_at` is older than the configured TTL.
    #[error("signature expired")]
    SignatureExpired,

    /// The submission's `created_at` is not strictly newer than the
    /// account's last accepted submission (replay or out-of-order).
    #[error("invalid data")]
    InvalidData,

    /// Attached value does not exactly match the payload's declared price.
    #[error("wrong value sent")]
    WrongValue,

    /// Batch argument sequences have unequal lengths.
    #[error("argument length mismatch")]
    LengthMismatch,

    /// The account has no live beacon.
    #[error("address does not own a beacon")]
    NoBeacon,

    /// No live beacon exists for the given id.
    #[error("no beacon found")]
    NoSuchBeacon,

    /// Balances are soulbound; transfers and approvals are permanently
    /// disabled.
    #[error("soulbound: transfers and approvals are disabled")]
    SoulBound,

    /// Forwarding the attached value to the fee collector failed; the
    /// whole submission is aborted.
    #[error("fee transfer failed: {0}")]
    FeeTransferFailed(String),
}

impl From<SignatureError> for RegistryError {
    fn from(_: SignatureError) -> Self {
        RegistryError::InvalidSignature
    }
}

// =============================================================================
// TESTS
// =============================================================================
