//! # Ports Layer
//!
//! Trait definitions for the registry's inbound (driving) and outbound
//! (driven) interfaces.

pub mod inbound;
pub mod outbound;
