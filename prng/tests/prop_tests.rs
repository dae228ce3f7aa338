use proptest::prelude::*;

use tombola_prng::{DrawSource, HashChainPrng, RawDraw, MAX_SAFE_RANGE};
use tombola_types::{Seed, SEED_BYTES};

fn seed_from(bytes: Vec<u8>) -> Seed {
    Seed::new(bytes.try_into().unwrap())
}

proptest! {
    /// Every sampled value lies inside the requested half-open range.
    #[test]
    fn sample_within_bounds(
        bytes in prop::collection::vec(any::<u8>(), SEED_BYTES),
        counter in 0u64..1_000_000,
        min in -1_000_000i64..1_000_000,
        width in 1i64..1_000_000,
    ) {
        let mut prng = HashChainPrng::new(seed_from(bytes), counter);
        let v = prng.uniform_in_range(min, min + width).unwrap();
        prop_assert!(v >= min && v < min + width);
    }

    /// Same seed, counter and call sequence give the same outputs.
    #[test]
    fn replay_is_identical(
        bytes in prop::collection::vec(any::<u8>(), SEED_BYTES),
        counter in any::<u32>(),
        ranges in prop::collection::vec(1i64..10_000, 1..20),
    ) {
        let seed = seed_from(bytes);
        let mut a = HashChainPrng::new(seed, counter as u64);
        let mut b = HashChainPrng::new(seed, counter as u64);
        for r in ranges {
            prop_assert_eq!(a.uniform_below(r).unwrap(), b.uniform_below(r).unwrap());
        }
        prop_assert_eq!(a.counter(), b.counter());
    }

    /// The accepted region always holds a whole number of ranges.
    #[test]
    fn rejection_limit_is_aligned(range in 1u64..=MAX_SAFE_RANGE) {
        let limit = RawDraw::rejection_limit(range);
        // limit + 1 ≡ 0 (mod range)  <=>  limit ≡ range - 1 (mod range)
        prop_assert_eq!(limit.rem(range), range - 1);
        prop_assert!(limit <= RawDraw::MAX);
    }

    /// Malformed ranges are rejected without consuming a draw.
    #[test]
    fn bad_ranges_rejected(min in -100i64..100, max in -100i64..100) {
        prop_assume!(min >= max || max < 0);
        let mut prng = HashChainPrng::new(Seed::new([0x42; SEED_BYTES]), 0);
        prop_assert!(prng.uniform_in_range(min, max).is_err());
        prop_assert_eq!(prng.counter(), 0);
    }
}
