#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use tombola_selection::{NoopObserver, SelectionSession};
use tombola_types::{Algorithm, Participant, Seed, SEED_BYTES};

#[derive(Debug, Arbitrary)]
struct Input {
    seed: [u8; SEED_BYTES],
    algorithm: u8,
    weights: Vec<u8>,
}

// Any accepted pool ends with every participant holding exactly one
// position.
fuzz_target!(|input: Input| {
    let algorithm = match input.algorithm % 3 {
        0 => Algorithm::Unweighted,
        1 => Algorithm::WeightedScan,
        _ => Algorithm::WeightedTickets,
    };
    let pool: Vec<Participant> = input
        .weights
        .iter()
        .take(32)
        .enumerate()
        .map(|(i, &w)| Participant::new(format!("p{i:02}"), u64::from(w)))
        .collect();

    let Ok(session) = SelectionSession::new(Seed::new(input.seed), 0, pool.clone(), algorithm) else {
        return;
    };
    let outcome = session.with_observer(NoopObserver).run().expect("draw must complete");
    assert_eq!(outcome.placements.len(), pool.len());
    for (i, placement) in outcome.placements.iter().enumerate() {
        assert_eq!(placement.position, i as u64);
    }
});
