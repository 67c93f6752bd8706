//! # Registry Types Crate
//!
//! Value objects shared across the registry workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address`, `Hash`, and the `U256` re-export
//!   are defined once here and consumed by every other crate.
//! - **Value Semantics**: these types are defined by their value, not their
//!   identity; all are `Copy` and comparable.

pub mod entities;

pub use entities::{Address, Hash, Timestamp, U256};
