use std::collections::BTreeSet;

use proptest::prelude::*;

use tombola_selection::{NoopObserver, SelectionSession, TicketTable};
use tombola_types::{Algorithm, Participant, Seed, SEED_BYTES};

fn pool_strategy() -> impl Strategy<Value = Vec<Participant>> {
    prop::collection::btree_map("[a-z0-9]{1,6}", 1u64..20, 1..25).prop_map(|m| {
        m.into_iter()
            .map(|(id, weight)| Participant::new(id, weight))
            .collect()
    })
}

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Unweighted),
        Just(Algorithm::WeightedScan),
        Just(Algorithm::WeightedTickets),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// After a full run, positions form a bijection onto 0..N.
    #[test]
    fn positions_are_a_bijection(
        seed_byte in any::<u8>(),
        counter in 0u64..10_000,
        pool in pool_strategy(),
        algorithm in algorithm_strategy(),
    ) {
        let n = pool.len();
        let ids: BTreeSet<String> = pool.iter().map(|p| p.id.clone()).collect();
        let outcome = SelectionSession::new(Seed::new([seed_byte; SEED_BYTES]), counter, pool, algorithm)
            .unwrap()
            .with_observer(NoopObserver)
            .run()
            .unwrap();

        prop_assert_eq!(outcome.placements.len(), n);
        for (i, placement) in outcome.placements.iter().enumerate() {
            prop_assert_eq!(placement.position, i as u64);
        }
        let placed: BTreeSet<String> = outcome.placements.iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(placed, ids);
        prop_assert_eq!(outcome.audit.iter().filter(|e| !e.is_duplicate()).count(), n);
    }

    /// Two independent runs agree byte for byte.
    #[test]
    fn runs_are_deterministic(
        seed_byte in any::<u8>(),
        counter in 0u64..10_000,
        pool in pool_strategy(),
        algorithm in algorithm_strategy(),
    ) {
        let seed = Seed::new([seed_byte; SEED_BYTES]);
        let a = SelectionSession::new(seed, counter, pool.clone(), algorithm)
            .unwrap()
            .with_observer(NoopObserver)
            .run()
            .unwrap();
        let b = SelectionSession::new(seed, counter, pool, algorithm)
            .unwrap()
            .with_observer(NoopObserver)
            .run()
            .unwrap();
        prop_assert_eq!(a, b);
    }

    /// Ticket counts sum to the total weight and every ticket has one owner.
    #[test]
    fn ticket_table_partitions_weight(pool in pool_strategy()) {
        let total: u64 = pool.iter().map(|p| p.weight).sum();
        let table = TicketTable::build(&pool, total).unwrap();
        prop_assert_eq!(table.len(), total);

        let counted: u64 = table.ranges().iter().map(|r| r.end - r.start).sum();
        prop_assert_eq!(counted, total);

        for (index, participant) in pool.iter().enumerate() {
            let range = table.tickets_of(index).unwrap();
            prop_assert_eq!(range.end - range.start, participant.weight);
            prop_assert_eq!(table.owner_of(range.start), Some(index));
            prop_assert_eq!(table.owner_of(range.end - 1), Some(index));
        }
        prop_assert_eq!(table.owner_of(total), None);
    }
}
