//! # Admin Integration Tests
//!
//! Initialization, ownership gating, configuration updates, and pausing.

#[cfg(test)]
mod tests {
    use crate::integration::{
        account, entry, payload_for, Harness, BEACON_URI, T0, TRAIT_URI, TTL_SECONDS,
    };
    use beacon_registry::adapters::{InMemoryFeeSink, ManualClock};
    use beacon_registry::{BeaconRegistry, RegistryError, RegistryReader};
    use registry_types::{Address, U256};

    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    #[test]
    fn test_initialize_rejects_second_call() {
        let mut h = Harness::new();
        let owner = h.owner;
        assert_eq!(
            h.registry.initialize(
                owner,
                owner,
                owner,
                TTL_SECONDS,
                TRAIT_URI.to_string(),
                BEACON_URI.to_string(),
            ),
            Err(RegistryError::AlreadyInitialized)
        );
    }

    #[test]
    fn test_initialize_rejects_zero_addresses() {
        let mut registry =
            BeaconRegistry::new(InMemoryFeeSink::new(), ManualClock::new(T0));
        let someone = account(1);

        for (owner, signer, collector) in [
            (Address::ZERO, someone, someone),
            (someone, Address::ZERO, someone),
            (someone, someone, Address::ZERO),
        ] {
            assert_eq!(
                registry.initialize(
                    owner,
                    signer,
                    collector,
                    TTL_SECONDS,
                    String::new(),
                    String::new()
                ),
                Err(RegistryError::ZeroAddress)
            );
        }

        // A failed initialization does not consume the one-shot.
        assert!(registry
            .initialize(
                someone,
                someone,
                someone,
                TTL_SECONDS,
                String::new(),
                String::new()
            )
            .is_ok());
    }

    // =========================================================================
    // OWNERSHIP GATING
    // =========================================================================

    #[test]
    fn test_every_admin_operation_is_owner_only() {
        let mut h = Harness::new();
        let outsider = account(0x99);
        let target = account(0x11);

        assert_eq!(
            h.registry.set_signer(outsider, target),
            Err(RegistryError::NotOwner)
        );
        assert_eq!(
            h.registry.set_fee_collector(outsider, target),
            Err(RegistryError::NotOwner)
        );
        assert_eq!(
            h.registry.set_signature_ttl(outsider, 60),
            Err(RegistryError::NotOwner)
        );
        assert_eq!(
            h.registry.set_primary_trait_uri(outsider, "x".to_string()),
            Err(RegistryError::NotOwner)
        );
        assert_eq!(
            h.registry.set_beacon_uri(outsider, "x".to_string()),
            Err(RegistryError::NotOwner)
        );
        assert_eq!(h.registry.pause(outsider), Err(RegistryError::NotOwner));
        assert_eq!(h.registry.unpause(outsider), Err(RegistryError::NotOwner));

        // Nothing changed.
        assert_eq!(h.registry.signature_ttl(), TTL_SECONDS);
        assert!(!h.registry.paused());
    }

    // =========================================================================
    // CONFIGURATION UPDATES
    // =========================================================================

    #[test]
    fn test_ttl_update_applies_to_subsequent_submissions() {
        let mut h = Harness::new();
        let owner = h.owner;
        let user = account(1);

        h.registry.set_signature_ttl(owner, 60).unwrap();
        assert_eq!(h.registry.signature_ttl(), 60);

        h.clock.set(T0 + 61);
        assert_eq!(
            h.submit(payload_for(user, 7, T0, vec![])),
            Err(RegistryError::SignatureExpired)
        );

        // Widening the window rescues the same payload.
        h.registry.set_signature_ttl(owner, 3600).unwrap();
        assert!(h.submit(payload_for(user, 7, T0, vec![])).is_ok());
    }

    #[test]
    fn test_uri_templates_take_effect_immediately() {
        let mut h = Harness::new();
        let owner = h.owner;
        let user = account(1);
        h.submit(payload_for(user, 7, T0, vec![entry(100, 1)]))
            .unwrap();

        h.registry
            .set_primary_trait_uri(owner, "ipfs://traits/".to_string())
            .unwrap();
        h.registry
            .set_beacon_uri(owner, "ipfs://beacons/".to_string())
            .unwrap();

        assert_eq!(
            h.registry.uri(U256::from(100)).unwrap(),
            "ipfs://traits/100.json"
        );
        assert_eq!(
            h.registry.uri(U256::from(7)).unwrap(),
            format!("ipfs://beacons/{}.json", user.to_lowercase_hex())
        );
    }

    #[test]
    fn test_signer_rotation_guards() {
        let mut h = Harness::new();
        let owner = h.owner;

        assert_eq!(
            h.registry.set_signer(owner, Address::ZERO),
            Err(RegistryError::ZeroAddress)
        );
        assert_eq!(
            h.registry.set_fee_collector(owner, Address::ZERO),
            Err(RegistryError::ZeroAddress)
        );

        let next = account(0x55);
        h.registry.set_signer(owner, next).unwrap();
        assert_eq!(h.registry.signer(), next);
    }

    // =========================================================================
    // PAUSING
    // =========================================================================

    #[test]
    fn test_pause_freezes_the_entire_surface() {
        let mut h = Harness::new();
        let owner = h.owner;
        let user = account(1);
        h.submit(payload_for(user, 7, T0, vec![entry(100, 1)]))
            .unwrap();

        h.registry.pause(owner).unwrap();

        assert_eq!(
            h.submit(payload_for(user, 7, T0 + 60, vec![])),
            Err(RegistryError::Paused)
        );
        assert_eq!(h.registry.burn(user), Err(RegistryError::Paused));
        assert_eq!(
            h.registry.get_trait(user, U256::from(100), 0),
            Err(RegistryError::Paused)
        );
        assert_eq!(
            h.registry.balance_of(user, U256::from(7)),
            Err(RegistryError::Paused)
        );
        assert_eq!(
            h.registry.get_all_traits_of(user),
            Err(RegistryError::Paused)
        );
        assert_eq!(h.registry.uri(U256::from(7)), Err(RegistryError::Paused));
        assert_eq!(
            h.registry.beacon_data_of(user),
            Err(RegistryError::Paused)
        );

        // Config accessors stay readable during an incident.
        assert!(h.registry.paused());
        assert_eq!(h.registry.signature_ttl(), TTL_SECONDS);
        assert_eq!(h.registry.fee_collector(), h.collector);
    }

    #[test]
    fn test_pause_and_unpause_are_idempotent() {
        let mut h = Harness::new();
        let owner = h.owner;

        h.registry.pause(owner).unwrap();
        h.registry.pause(owner).unwrap();
        assert!(h.registry.paused());

        h.registry.unpause(owner).unwrap();
        h.registry.unpause(owner).unwrap();
        assert!(!h.registry.paused());

        // Back in business.
        assert!(h.submit(payload_for(account(1), 7, T0, vec![])).is_ok());
    }

    #[test]
    fn test_admin_operations_work_while_paused() {
        let mut h = Harness::new();
        let owner = h.owner;
        h.registry.pause(owner).unwrap();

        // Rotation and reconfiguration are incident-response tools.
        h.registry.set_signer(owner, account(0x55)).unwrap();
        h.registry.set_signature_ttl(owner, 30).unwrap();
        h.registry.unpause(owner).unwrap();
        assert!(!h.registry.paused());
    }
}
