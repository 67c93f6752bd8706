//! # Beacon Registry
//!
//! Signature-authenticated attestation registry. A trusted off-chain issuer
//! scores accounts and signs trait payloads; the registry verifies each
//! signature and timestamp, stores the latest trait set per account, and
//! exposes the result through a soulbound multi-token query surface.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure logic, no I/O — digests, ECDSA
//!   recovery, freshness rules, the trait and beacon ledgers
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound
//!   interfaces
//! - **Adapters Layer** (`adapters/`): Clock and fee-sink implementations
//! - **Service Layer** (`service.rs`): [`BeaconRegistry`], the single entry
//!   point wiring domain logic to ports
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: Signatures with high S values are
//!   rejected before recovery
//! - **Replay Protection**: The payload timestamp doubles as a nonce; a
//!   submission is rejected unless strictly newer than the stored record
//! - **Atomicity**: Validation and fee forwarding complete before any state
//!   mutation, so a failed submission leaves nothing behind

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::RegistryConfig;
pub use domain::entities::{
    AccountTraits, BeaconData, EcdsaSignature, SubmissionPayload, TraitEntry,
};
pub use domain::errors::{RegistryError, SignatureError};
pub use domain::events::RegistryEvent;
pub use ports::inbound::RegistryReader;
pub use ports::outbound::{FeeSink, FeeSinkError, TimeSource};
pub use service::BeaconRegistry;
