//! # Soulbound Surface Tests
//!
//! The multi-token balance surface: balances for beacons and traits, batch
//! reads, metadata URIs, and the permanently disabled transfer paths.

#[cfg(test)]
mod tests {
    use crate::integration::{account, entry, payload_for, Harness, BEACON_URI, TRAIT_URI, T0};
    use beacon_registry::{RegistryError, RegistryReader};
    use registry_types::U256;

    fn populated() -> Harness {
        let mut h = Harness::new();
        h.submit(payload_for(
            account(1),
            7,
            T0,
            vec![entry(100, 3000), entry(200, 1)],
        ))
        .unwrap();
        h
    }

    // =========================================================================
    // BALANCES
    // =========================================================================

    #[test]
    fn test_balance_of_covers_beacon_and_traits() {
        let h = populated();
        let user = account(1);

        assert_eq!(
            h.registry.balance_of(user, U256::from(7)).unwrap(),
            U256::from(1)
        );
        assert_eq!(
            h.registry.balance_of(user, U256::from(100)).unwrap(),
            U256::from(3000)
        );
        assert!(h
            .registry
            .balance_of(user, U256::from(999))
            .unwrap()
            .is_zero());
        // A stranger holds nothing.
        assert!(h
            .registry
            .balance_of(account(2), U256::from(7))
            .unwrap()
            .is_zero());
    }

    #[test]
    fn test_balance_of_ignores_aging() {
        let h = populated();
        h.clock.advance(1_000_000);

        assert_eq!(
            h.registry.balance_of(account(1), U256::from(100)).unwrap(),
            U256::from(3000)
        );
    }

    #[test]
    fn test_balance_of_batch_is_index_aligned() {
        let h = populated();
        let user = account(1);
        let stranger = account(2);

        let balances = h
            .registry
            .balance_of_batch(
                &[user, user, stranger],
                &[U256::from(7), U256::from(200), U256::from(200)],
            )
            .unwrap();

        assert_eq!(balances, vec![U256::from(1), U256::from(1), U256::zero()]);

        assert_eq!(
            h.registry.balance_of_batch(&[user], &[]),
            Err(RegistryError::LengthMismatch)
        );
    }

    #[test]
    fn test_zero_address_balance_rejected() {
        let h = populated();
        assert_eq!(
            h.registry
                .balance_of(registry_types::Address::ZERO, U256::from(7)),
            Err(RegistryError::ZeroAddress)
        );
    }

    // =========================================================================
    // METADATA URIS
    // =========================================================================

    #[test]
    fn test_uri_dispatches_between_beacon_and_trait_templates() {
        let h = populated();
        let user = account(1);

        assert_eq!(
            h.registry.uri(U256::from(7)).unwrap(),
            format!("{BEACON_URI}{}.json", user.to_lowercase_hex())
        );
        // Trait ids (and unknown ids) use the trait template with the
        // decimal id.
        assert_eq!(
            h.registry.uri(U256::from(100)).unwrap(),
            format!("{TRAIT_URI}100.json")
        );
        assert_eq!(
            h.registry.uri(U256::from(123_456)).unwrap(),
            format!("{TRAIT_URI}123456.json")
        );
    }

    #[test]
    fn test_get_beacon_uri_requires_live_beacon() {
        let mut h = populated();
        let user = account(1);

        assert_eq!(
            h.registry.get_beacon_uri(U256::from(7)).unwrap(),
            format!("{BEACON_URI}{}.json", user.to_lowercase_hex())
        );

        h.registry.burn(user).unwrap();
        assert_eq!(
            h.registry.get_beacon_uri(U256::from(7)),
            Err(RegistryError::NoBeacon)
        );
    }

    // =========================================================================
    // DISABLED TRANSFERS
    // =========================================================================

    #[test]
    fn test_transfers_and_approvals_always_rejected() {
        let mut h = populated();
        let user = account(1);
        let other = account(2);

        assert_eq!(
            h.registry.set_approval_for_all(user, other, true),
            Err(RegistryError::SoulBound)
        );
        assert_eq!(
            h.registry
                .safe_transfer_from(user, user, other, U256::from(7), U256::from(1)),
            Err(RegistryError::SoulBound)
        );
        assert_eq!(
            h.registry.safe_batch_transfer_from(
                user,
                user,
                other,
                &[U256::from(7), U256::from(100)],
                &[U256::from(1), U256::from(3000)],
            ),
            Err(RegistryError::SoulBound)
        );
        // Even the owner gets no special path.
        let owner = h.owner;
        assert_eq!(
            h.registry
                .safe_transfer_from(owner, user, other, U256::from(7), U256::from(1)),
            Err(RegistryError::SoulBound)
        );

        assert!(!h.registry.is_approved_for_all(user, other));
        // Balances untouched by the attempts.
        assert_eq!(
            h.registry.balance_of(user, U256::from(7)).unwrap(),
            U256::from(1)
        );
    }
}
