//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies the registry needs from its environment: a destination for
//! collected fees and a source of call time.

use registry_types::{Address, Timestamp, U256};
use thiserror::Error;

/// Error from fee forwarding.
#[derive(Debug, Error)]
pub enum FeeSinkError {
    /// The transfer was rejected by the destination.
    #[error("fee transfer rejected: {reason}")]
    Rejected { reason: String },
}

/// Destination for submission fees.
///
/// Forwarding happens after all validation and before any state mutation:
/// if `forward` fails, the whole submission aborts with no partial effect.
pub trait FeeSink: Send + Sync {
    /// Forwards `amount` to the fee collector `to`.
    ///
    /// # Errors
    /// * `FeeSinkError::Rejected` - the destination refused the transfer
    fn forward(&self, to: Address, amount: U256) -> Result<(), FeeSinkError>;
}

/// Source of call time.
///
/// The registry never reads a wall clock directly; `now` is supplied by the
/// execution environment at call time and is not caller-controlled.
pub trait TimeSource: Send + Sync {
    /// Current time in Unix seconds.
    fn now(&self) -> Timestamp;
}

impl<T: FeeSink + ?Sized> FeeSink for std::sync::Arc<T> {
    fn forward(&self, to: Address, amount: U256) -> Result<(), FeeSinkError> {
        (**self).forward(to, amount)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
