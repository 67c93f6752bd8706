//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod clock;
pub mod fee_sink;

pub use clock::{ManualClock, SystemClock};
pub use fee_sink::InMemoryFeeSink;
