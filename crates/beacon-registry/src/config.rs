//! # Registry Configuration
//!
//! Owner-mutable configuration owned by the registry instance. Zeroed until
//! `initialize` runs; mutated only through the owner-gated service
//! operations. No ambient or static state.

use registry_types::Address;

/// Process-wide registry configuration.
#[derive(Clone, Debug, Default)]
pub struct RegistryConfig {
    /// The only identity allowed to run admin operations.
    pub owner: Address,
    /// The only identity whose signatures submissions are accepted from.
    pub trusted_signer: Address,
    /// Destination for submission fees.
    pub fee_collector: Address,
    /// Maximum age of a submission's `created_at` at call time, in seconds.
    pub signature_ttl_seconds: u64,
    /// Prefix for trait metadata URIs.
    pub trait_uri: String,
    /// Prefix for beacon metadata URIs.
    pub beacon_uri: String,
    /// When true, every read and write entry point fails `Paused`.
    pub paused: bool,
}
