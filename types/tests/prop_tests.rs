use proptest::prelude::*;

use tombola_types::{sort_participants, Participant, Seed, SeedRule, TombolaError, SEED_BYTES};

proptest! {
    /// Seed hex encoding roundtrip: to_hex -> from_hex produces identical bytes.
    #[test]
    fn seed_hex_roundtrip(bytes in prop::collection::vec(any::<u8>(), SEED_BYTES)) {
        let arr: [u8; SEED_BYTES] = bytes.try_into().unwrap();
        let seed = Seed::new(arr);
        let parsed = Seed::from_hex(&seed.to_hex()).unwrap();
        prop_assert_eq!(parsed.as_bytes(), &arr);
    }

    /// Arbitrary input never panics; failures are always format errors.
    #[test]
    fn seed_parse_never_panics(s in ".{0,200}") {
        match Seed::from_hex(&s) {
            Ok(seed) => prop_assert_eq!(seed.to_hex().len(), 2 + SEED_BYTES * 2),
            Err(e) => {
                let is_format = matches!(e, TombolaError::Format { .. });
                prop_assert!(is_format);
            }
        }
    }

    /// Any hex digit count other than 128 is a length error.
    #[test]
    fn wrong_digit_count_is_length_error(n in 0usize..300) {
        prop_assume!(n != SEED_BYTES * 2);
        let encoded = format!("0x{}", "f".repeat(n));
        let rule = match Seed::from_hex(&encoded) {
            Err(TombolaError::Format { rule, .. }) => Some(rule),
            _ => None,
        };
        prop_assert_eq!(rule, Some(SeedRule::Length));
    }

    /// Sorting yields strictly increasing ids and keeps every participant.
    #[test]
    fn sort_is_strictly_increasing_permutation(
        ids in prop::collection::btree_set("[a-zA-Z0-9_]{1,8}", 0..40),
    ) {
        let mut pool: Vec<Participant> = ids.iter().map(|id| Participant::new(id.clone(), 1)).collect();
        pool.reverse();
        let sorted = sort_participants(pool).unwrap();
        prop_assert_eq!(sorted.len(), ids.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].id.as_bytes() < pair[1].id.as_bytes());
        }
    }
}
