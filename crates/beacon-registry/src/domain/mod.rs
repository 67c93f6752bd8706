//! # Domain Layer
//!
//! Pure registry logic: payload digesting, signature recovery, freshness
//! checks, and the two ledgers. No I/O, no clock — callers supply time.

pub mod beacon;
pub mod digest;
pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod events;
pub mod freshness;
pub mod ledger;
