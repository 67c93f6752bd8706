//! # Beacon Registry Service
//!
//! The single entry-point surface of the registry. Every external call runs
//! to completion as one atomic step: validation stages run first, the fee is
//! forwarded, and only then is state mutated, so a failure at any stage
//! leaves nothing behind.
//!
//! ## Submission pipeline
//!
//! pause gate → exact-value check → signature recovery → freshness →
//! fee forwarding → beacon mint-if-absent → trait diff → commit.

use crate::config::RegistryConfig;
use crate::domain::beacon::BeaconLedger;
use crate::domain::digest::signing_digest;
use crate::domain::ecdsa::recover_signer;
use crate::domain::entities::{
    AccountTraits, BeaconData, EcdsaSignature, SubmissionPayload,
};
use crate::domain::errors::RegistryError;
use crate::domain::events::RegistryEvent;
use crate::domain::freshness::check_fresh;
use crate::domain::ledger::TraitLedger;
use crate::ports::inbound::RegistryReader;
use crate::ports::outbound::{FeeSink, TimeSource};
use registry_types::{Address, U256};
use tracing::{info, warn};

/// The attestation registry.
///
/// Owns both ledgers and the configuration; generic over the fee
/// destination and the time source so the surrounding environment supplies
/// both.
pub struct BeaconRegistry<F: FeeSink, C: TimeSource> {
    config: RegistryConfig,
    initialized: bool,
    traits: TraitLedger,
    beacons: BeaconLedger,
    fee_sink: F,
    clock: C,
}

impl<F: FeeSink, C: TimeSource> BeaconRegistry<F, C> {
    /// Creates an uninitialized registry. Until `initialize` runs, the
    /// configuration is zeroed: the owner is the zero address, so every
    /// admin operation fails `NotOwner`, and no signature can verify
    /// against the zero signer.
    pub fn new(fee_sink: F, clock: C) -> Self {
        Self {
            config: RegistryConfig::default(),
            initialized: false,
            traits: TraitLedger::new(),
            beacons: BeaconLedger::new(),
            fee_sink,
            clock,
        }
    }

    // =========================================================================
    // INITIALIZATION & ADMIN (AccessControl)
    // =========================================================================

    /// One-time initialization of the registry configuration.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - a second invocation
    /// * `ZeroAddress` - owner, signer, or fee collector is the null identity
    pub fn initialize(
        &mut self,
        owner: Address,
        signer: Address,
        fee_collector: Address,
        ttl_seconds: u64,
        trait_uri: String,
        beacon_uri: String,
    ) -> Result<(), RegistryError> {
        if self.initialized {
            return Err(RegistryError::AlreadyInitialized);
        }
        if owner.is_zero() || signer.is_zero() || fee_collector.is_zero() {
            return Err(RegistryError::ZeroAddress);
        }

        self.config = RegistryConfig {
            owner,
            trusted_signer: signer,
            fee_collector,
            signature_ttl_seconds: ttl_seconds,
            trait_uri,
            beacon_uri,
            paused: false,
        };
        self.initialized = true;

        info!(owner = %owner, signer = %signer, ttl_seconds, "registry initialized");
        Ok(())
    }

    /// Replaces the trusted signer. Owner only.
    pub fn set_signer(&mut self, caller: Address, new_signer: Address) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        if new_signer.is_zero() {
            return Err(RegistryError::ZeroAddress);
        }
        self.config.trusted_signer = new_signer;
        info!(signer = %new_signer, "trusted signer updated");
        Ok(())
    }

    /// Replaces the fee collector. Owner only.
    pub fn set_fee_collector(
        &mut self,
        caller: Address,
        new_collector: Address,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        if new_collector.is_zero() {
            return Err(RegistryError::ZeroAddress);
        }
        self.config.fee_collector = new_collector;
        info!(fee_collector = %new_collector, "fee collector updated");
        Ok(())
    }

    /// Sets the signature TTL. Owner only. Extreme values (zero included)
    /// are accepted configuration, not validated.
    pub fn set_signature_ttl(&mut self, caller: Address, seconds: u64) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        self.config.signature_ttl_seconds = seconds;
        info!(ttl_seconds = seconds, "signature TTL updated");
        Ok(())
    }

    /// Sets the trait metadata URI template. Owner only.
    pub fn set_primary_trait_uri(
        &mut self,
        caller: Address,
        uri: String,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        self.config.trait_uri = uri;
        Ok(())
    }

    /// Sets the beacon metadata URI template. Owner only.
    pub fn set_beacon_uri(&mut self, caller: Address, uri: String) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        self.config.beacon_uri = uri;
        Ok(())
    }

    /// Freezes the registry: every read and write entry point fails
    /// `Paused` until `unpause`. Owner only.
    pub fn pause(&mut self, caller: Address) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        self.config.paused = true;
        warn!("registry paused");
        Ok(())
    }

    /// Unfreezes the registry. Owner only.
    pub fn unpause(&mut self, caller: Address) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        self.config.paused = false;
        info!("registry unpaused");
        Ok(())
    }

    // =========================================================================
    // CONFIG ACCESSORS (not pause-gated: incident diagnostics)
    // =========================================================================

    /// The trusted signer.
    #[must_use]
    pub fn signer(&self) -> Address {
        self.config.trusted_signer
    }

    /// The fee collector.
    #[must_use]
    pub fn fee_collector(&self) -> Address {
        self.config.fee_collector
    }

    /// The signature TTL in seconds.
    #[must_use]
    pub fn signature_ttl(&self) -> u64 {
        self.config.signature_ttl_seconds
    }

    /// Whether the registry is paused.
    #[must_use]
    pub fn paused(&self) -> bool {
        self.config.paused
    }

    // =========================================================================
    // SUBMISSION & BURN
    // =========================================================================

    /// Accepts an issuer-signed trait submission.
    ///
    /// On success: mints the account's beacon if absent, applies the trait
    /// diff, forwards `attached_value` to the fee collector, and returns
    /// the derived events (beacon mint first, then trait transfers, then
    /// `SubmitTraits`).
    ///
    /// # Errors
    /// * `Paused`, `ZeroAddress`, `WrongValue`, `InvalidSignature`,
    ///   `SignatureExpired`, `InvalidData`, `FeeTransferFailed`
    pub fn submit_traits(
        &mut self,
        payload: SubmissionPayload,
        signature: EcdsaSignature,
        attached_value: U256,
    ) -> Result<Vec<RegistryEvent>, RegistryError> {
        let account = payload.account;
        let result = self.submit_traits_inner(payload, signature, attached_value);

        match &result {
            Ok(events) => {
                info!(account = %account, events = events.len(), "submission accepted");
            }
            Err(err) => {
                warn!(account = %account, error = %err, "submission rejected");
            }
        }

        result
    }

    fn submit_traits_inner(
        &mut self,
        payload: SubmissionPayload,
        signature: EcdsaSignature,
        attached_value: U256,
    ) -> Result<Vec<RegistryEvent>, RegistryError> {
        self.ensure_not_paused()?;

        if payload.account.is_zero() {
            return Err(RegistryError::ZeroAddress);
        }

        if attached_value != payload.price {
            return Err(RegistryError::WrongValue);
        }

        let digest = signing_digest(&payload);
        let recovered = recover_signer(&digest, &signature)?;
        if recovered != self.config.trusted_signer {
            return Err(RegistryError::InvalidSignature);
        }

        let now = self.clock.now();
        check_fresh(
            payload.created_at,
            now,
            self.config.signature_ttl_seconds,
            self.traits.updated_at(&payload.account),
        )?;

        // All validation passed. Forward the fee before touching state so a
        // rejected transfer aborts the submission with no partial effect.
        if !payload.price.is_zero() {
            self.fee_sink
                .forward(self.config.fee_collector, payload.price)
                .map_err(|e| RegistryError::FeeTransferFailed(e.to_string()))?;
        }

        let mut events = Vec::new();
        if let Some(mint) = self
            .beacons
            .mint_if_absent(payload.account, payload.beacon_id)
        {
            events.push(mint);
        }
        events.extend(
            self.traits
                .apply(payload.account, &payload.traits, payload.created_at),
        );
        events.push(RegistryEvent::SubmitTraits {
            beacon_id: payload.beacon_id,
            created_at: payload.created_at,
        });

        Ok(events)
    }

    /// Burns the caller's beacon, evicting all of its state: the beacon
    /// record, every trait entry, and the `updated_at` timestamp.
    ///
    /// Returns, in order: the `Burn` marker, a quantity-1 burn of the
    /// beacon id, and a batch burn of every non-zero trait with its full
    /// value.
    ///
    /// # Errors
    /// * `Paused` - the registry is paused
    /// * `NoBeacon` - the caller holds no live beacon
    pub fn burn(&mut self, caller: Address) -> Result<Vec<RegistryEvent>, RegistryError> {
        self.ensure_not_paused()?;

        let beacon_id = self
            .beacons
            .remove(&caller)
            .ok_or(RegistryError::NoBeacon)?;

        let entries = self.traits.entries(&caller);
        let ids = entries.iter().map(|e| e.id).collect();
        let values = entries.iter().map(|e| e.value).collect();
        self.traits.clear(&caller);

        info!(account = %caller, "beacon burned");

        Ok(vec![
            RegistryEvent::Burn { beacon_id },
            RegistryEvent::burn(caller, beacon_id, U256::from(1)),
            RegistryEvent::burn_batch(caller, ids, values),
        ])
    }

    // =========================================================================
    // SOULBOUND SURFACE
    // =========================================================================

    /// Approval setting is permanently disabled.
    ///
    /// # Errors
    /// Always `SoulBound`.
    pub fn set_approval_for_all(
        &mut self,
        _caller: Address,
        _operator: Address,
        _approved: bool,
    ) -> Result<(), RegistryError> {
        Err(RegistryError::SoulBound)
    }

    /// Transfers are permanently disabled.
    ///
    /// # Errors
    /// Always `SoulBound`.
    pub fn safe_transfer_from(
        &mut self,
        _caller: Address,
        _from: Address,
        _to: Address,
        _id: U256,
        _value: U256,
    ) -> Result<(), RegistryError> {
        Err(RegistryError::SoulBound)
    }

    /// Batch transfers are permanently disabled.
    ///
    /// # Errors
    /// Always `SoulBound`.
    pub fn safe_batch_transfer_from(
        &mut self,
        _caller: Address,
        _from: Address,
        _to: Address,
        _ids: &[U256],
        _values: &[U256],
    ) -> Result<(), RegistryError> {
        Err(RegistryError::SoulBound)
    }

    // =========================================================================
    // INTERNAL GATES
    // =========================================================================

    fn ensure_not_paused(&self) -> Result<(), RegistryError> {
        if self.config.paused {
            return Err(RegistryError::Paused);
        }
        Ok(())
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), RegistryError> {
        if caller != self.config.owner || caller.is_zero() {
            return Err(RegistryError::NotOwner);
        }
        Ok(())
    }

    fn trait_uri_for(&self, id: U256) -> String {
        format!("{}{}.json", self.config.trait_uri, id)
    }

    fn beacon_uri_for(&self, owner: Address) -> String {
        format!("{}{}.json", self.config.beacon_uri, owner.to_lowercase_hex())
    }
}

// =============================================================================
// QUERY LAYER
// =============================================================================

impl<F: FeeSink, C: TimeSource> RegistryReader for BeaconRegistry<F, C> {
    fn get_trait(&self, account: Address, id: U256, max_age: u64) -> Result<U256, RegistryError> {
        self.ensure_not_paused()?;
        if account.is_zero() {
            return Err(RegistryError::ZeroAddress);
        }
        Ok(self.traits.read(&account, id, max_age, self.clock.now()))
    }

    fn get_trait_batch(
        &self,
        accounts: &[Address],
        ids: &[U256],
        max_ages: &[u64],
    ) -> Result<Vec<U256>, RegistryError> {
        self.ensure_not_paused()?;
        if accounts.len() != ids.len() || accounts.len() != max_ages.len() {
            return Err(RegistryError::LengthMismatch);
        }

        accounts
            .iter()
            .zip(ids)
            .zip(max_ages)
            .map(|((&account, &id), &max_age)| self.get_trait(account, id, max_age))
            .collect()
    }

    fn balance_of(&self, account: Address, id: U256) -> Result<U256, RegistryError> {
        self.ensure_not_paused()?;
        if account.is_zero() {
            return Err(RegistryError::ZeroAddress);
        }

        if self.beacons.beacon_id_of(&account) == Some(id) {
            return Ok(U256::from(1));
        }
        Ok(self.traits.read(&account, id, 0, self.clock.now()))
    }

    fn balance_of_batch(
        &self,
        accounts: &[Address],
        ids: &[U256],
    ) -> Result<Vec<U256>, RegistryError> {
        self.ensure_not_paused()?;
        if accounts.len() != ids.len() {
            return Err(RegistryError::LengthMismatch);
        }

        accounts
            .iter()
            .zip(ids)
            .map(|(&account, &id)| self.balance_of(account, id))
            .collect()
    }

    fn get_all_traits_of(&self, account: Address) -> Result<AccountTraits, RegistryError> {
        self.ensure_not_paused()?;
        if account.is_zero() {
            return Err(RegistryError::ZeroAddress);
        }
        Ok(self.traits.all_traits(&account))
    }

    fn uri(&self, id: U256) -> Result<String, RegistryError> {
        self.ensure_not_paused()?;

        match self.beacons.owner_of(id) {
            Some(owner) => Ok(self.beacon_uri_for(owner)),
            None => Ok(self.trait_uri_for(id)),
        }
    }

    fn get_beacon_uri(&self, beacon_id: U256) -> Result<String, RegistryError> {
        self.ensure_not_paused()?;

        let owner = self
            .beacons
            .owner_of(beacon_id)
            .ok_or(RegistryError::NoBeacon)?;
        Ok(self.beacon_uri_for(owner))
    }

    fn owner_of_beacon(&self, beacon_id: U256) -> Result<Address, RegistryError> {
        self.ensure_not_paused()?;
        self.beacons
            .owner_of(beacon_id)
            .ok_or(RegistryError::NoSuchBeacon)
    }

    fn beacon_data_of(&self, account: Address) -> Result<BeaconData, RegistryError> {
        self.ensure_not_paused()?;
        if account.is_zero() {
            return Err(RegistryError::ZeroAddress);
        }

        Ok(BeaconData {
            beacon_id: self.beacons.beacon_id_of(&account).unwrap_or_default(),
            updated_at: self.traits.updated_at(&account),
        })
    }

    fn is_approved_for_all(&self, _account: Address, _operator: Address) -> bool {
        false
    }
}

// =============================================================================
// TESTS
// =============================================================================
