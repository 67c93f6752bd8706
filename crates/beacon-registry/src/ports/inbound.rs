//! # Inbound Ports (Driving Ports / API)
//!
//! The registry's read surface as a trait, so tooling can depend on the
//! query layer without naming the concrete service type. Mutating entry
//! points (`submit_traits`, `burn`, admin operations) take `&mut self` and
//! live directly on the service.

use crate::domain::entities::{AccountTraits, BeaconData};
use crate::domain::errors::RegistryError;
use registry_types::{Address, U256};

/// Read-only registry queries.
///
/// Every method except the config accessors fails `Paused` while the
/// registry is paused; pausing freezes the whole surface during an
/// incident, reads included.
pub trait RegistryReader: Send + Sync {
    /// A trait value for `account`, aged out to zero when older than
    /// `max_age` seconds (`max_age` zero disables aging).
    ///
    /// # Errors
    /// * `ZeroAddress` - `account` is the null identity
    fn get_trait(&self, account: Address, id: U256, max_age: u64) -> Result<U256, RegistryError>;

    /// Per-element `get_trait` over three index-aligned sequences.
    ///
    /// # Errors
    /// * `LengthMismatch` - the sequences have unequal lengths
    fn get_trait_batch(
        &self,
        accounts: &[Address],
        ids: &[U256],
        max_ages: &[u64],
    ) -> Result<Vec<U256>, RegistryError>;

    /// Balance-style accessor: 1 if `id` is the account's live beacon id,
    /// otherwise the un-aged trait value.
    ///
    /// # Errors
    /// * `ZeroAddress` - `account` is the null identity
    fn balance_of(&self, account: Address, id: U256) -> Result<U256, RegistryError>;

    /// Per-element `balance_of` over two index-aligned sequences.
    ///
    /// # Errors
    /// * `LengthMismatch` - the sequences have unequal lengths
    fn balance_of_batch(
        &self,
        accounts: &[Address],
        ids: &[U256],
    ) -> Result<Vec<U256>, RegistryError>;

    /// All non-zero traits of an account, in stored order, plus its
    /// `updated_at`.
    ///
    /// # Errors
    /// * `ZeroAddress` - `account` is the null identity
    fn get_all_traits_of(&self, account: Address) -> Result<AccountTraits, RegistryError>;

    /// Metadata URI for an id: the beacon template for live beacon ids,
    /// the trait template otherwise.
    fn uri(&self, id: U256) -> Result<String, RegistryError>;

    /// Metadata URI for a live beacon id.
    ///
    /// # Errors
    /// * `NoBeacon` - no live beacon has this id
    fn get_beacon_uri(&self, beacon_id: U256) -> Result<String, RegistryError>;

    /// The account owning a live beacon id.
    ///
    /// # Errors
    /// * `NoSuchBeacon` - no live beacon has this id
    fn owner_of_beacon(&self, beacon_id: U256) -> Result<Address, RegistryError>;

    /// The account's beacon id and `updated_at` (both zero when it holds
    /// no beacon).
    ///
    /// # Errors
    /// * `ZeroAddress` - `account` is the null identity
    fn beacon_data_of(&self, account: Address) -> Result<BeaconData, RegistryError>;

    /// Approval query of the balance surface. Always false: no owner can
    /// ever delegate.
    fn is_approved_for_all(&self, account: Address, operator: Address) -> bool;
}
