//! End-to-end draws over the public API.

use tombola_crypto::derive_seed;
use tombola_nullables::ScriptedDraws;
use tombola_selection::{
    verify_outcome, AccumulationScanAssigner, AssignmentState, NoopObserver, PositionAssigner,
    RecordingObserver, SelectionOutcome, SelectionSession, TicketTableAssigner,
    UnweightedAssigner,
};
use tombola_types::{Algorithm, Participant, Seed};

fn scenario_seed() -> Seed {
    Seed::from_hex(&format!("0x{}", "11".repeat(64))).unwrap()
}

fn scenario_pool() -> Vec<Participant> {
    vec![Participant::new("b", 3), Participant::new("a", 1)]
}

fn run(seed: Seed, counter: u64, pool: Vec<Participant>, algorithm: Algorithm) -> SelectionOutcome {
    SelectionSession::new(seed, counter, pool, algorithm)
        .unwrap()
        .with_observer(NoopObserver)
        .run()
        .unwrap()
}

#[test]
fn two_participant_ticket_scenario() {
    let outcome = run(scenario_seed(), 0, scenario_pool(), Algorithm::WeightedTickets);

    assert_eq!(outcome.tickets_of("a"), Some(0..1));
    assert_eq!(outcome.tickets_of("b"), Some(1..4));
    assert_eq!(outcome.placements.len(), 2);
    assert!(outcome.audit.len() >= 2);
    assert_eq!(outcome.audit.len() - outcome.duplicate_draws(), 2);

    let again = run(scenario_seed(), 0, scenario_pool(), Algorithm::WeightedTickets);
    assert_eq!(outcome, again);
    assert_eq!(
        serde_json::to_vec(&outcome).unwrap(),
        serde_json::to_vec(&again).unwrap()
    );
}

#[test]
fn input_order_does_not_matter() {
    let pool: Vec<Participant> = (0..15)
        .map(|i| Participant::new(format!("id-{i}"), (i % 4 + 1) as u64))
        .collect();
    let mut reversed = pool.clone();
    reversed.reverse();

    for algorithm in [
        Algorithm::Unweighted,
        Algorithm::WeightedScan,
        Algorithm::WeightedTickets,
    ] {
        assert_eq!(
            run(scenario_seed(), 9, pool.clone(), algorithm),
            run(scenario_seed(), 9, reversed.clone(), algorithm)
        );
    }
}

#[test]
fn scan_and_ticket_modes_agree() {
    // Both map a draw in [0, W) to the same owner, so the same seed yields
    // the same placements.
    let pool: Vec<Participant> = (0..10)
        .map(|i| Participant::new(format!("p{i}"), (i * 7 % 5 + 1) as u64))
        .collect();
    let scan = run(scenario_seed(), 0, pool.clone(), Algorithm::WeightedScan);
    let tickets = run(scenario_seed(), 0, pool, Algorithm::WeightedTickets);

    let ids = |o: &SelectionOutcome| o.placements.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&scan), ids(&tickets));
    assert_eq!(scan.audit, tickets.audit);
}

#[test]
fn scripted_duplicate_draw_is_audited() {
    let source = ScriptedDraws::new(vec![1, 2, 0]);
    let mut assigner = TicketTableAssigner::with_source(scenario_pool(), source).unwrap();
    let mut observer = RecordingObserver::default();

    let first = assigner.assign_next(&mut observer).unwrap().unwrap();
    assert_eq!((first.participant.as_str(), first.position), ("b", 0));
    assert_eq!(assigner.state(), AssignmentState::PartiallyAssigned(1));

    let second = assigner.assign_next(&mut observer).unwrap().unwrap();
    assert_eq!((second.participant.as_str(), second.position), ("a", 1));
    assert_eq!(assigner.state(), AssignmentState::FullyAssigned(2));

    let audit = assigner.book().audit_log();
    assert_eq!(audit.len(), 3);
    assert_eq!(audit[1].participant, "b");
    assert!(audit[1].is_duplicate());
    assert_eq!(audit[2].counter, 3);
    assert_eq!(observer.duplicates.len(), 1);

    let book = assigner.book();
    assert_eq!(book.winning_draw(0), Some(0));
    assert_eq!(book.winning_draw(1), Some(1));

    assert!(assigner.assign_next(&mut observer).unwrap().is_none());
    assert_eq!(assigner.book().audit_log().len(), 3);
}

#[test]
fn scripted_boundary_draw_goes_to_next_participant() {
    // Draw 1 sits exactly on the end of "a"'s weight; half-open ranges give it to "b".
    let source = ScriptedDraws::new(vec![1, 0]);
    let mut assigner = AccumulationScanAssigner::with_source(scenario_pool(), source).unwrap();
    assigner.assign_all(&mut NoopObserver).unwrap();

    let order: Vec<&str> = assigner
        .book()
        .order()
        .iter()
        .map(|&i| assigner.book().participants()[i].id.as_str())
        .collect();
    assert_eq!(order, vec!["b", "a"]);
}

#[test]
fn scripted_unweighted_retries_duplicates() {
    let pool = vec![
        Participant::new("p0", 0),
        Participant::new("p1", 0),
        Participant::new("p2", 0),
    ];
    let source = ScriptedDraws::new(vec![2, 2, 0, 0, 1]);
    let mut assigner = UnweightedAssigner::with_source(pool, source).unwrap();
    assigner.assign_all(&mut NoopObserver).unwrap();

    assert_eq!(assigner.book().order(), &[2, 0, 1]);
    let duplicates: Vec<u64> = assigner
        .book()
        .audit_log()
        .iter()
        .filter(|e| e.is_duplicate())
        .map(|e| e.draw_index)
        .collect();
    assert_eq!(duplicates, vec![1, 3]);
    assert_eq!(assigner.source().served(), 5);
}

#[test]
fn resumed_session_continues_the_counter() {
    let pool: Vec<Participant> = (0..6).map(|i| Participant::new(format!("u{i}"), 1)).collect();
    let mut first = SelectionSession::new(scenario_seed(), 0, pool.clone(), Algorithm::Unweighted)
        .unwrap()
        .with_observer(NoopObserver);
    first.assign_positions(3).unwrap();
    let counter = first.counter();
    assert!(counter >= 3);

    let fresh = run(scenario_seed(), counter, pool, Algorithm::Unweighted);
    assert_eq!(fresh.start_counter, counter);
    assert!(fresh.audit.iter().all(|e| e.counter > counter));
}

#[test]
fn published_manifest_replays() {
    let pool: Vec<Participant> = (0..20)
        .map(|i| Participant::new(format!("wallet-{i:03}"), (i % 3 + 1) as u64))
        .collect();
    let outcome = run(derive_seed(&[b"manifest"]), 0, pool.clone(), Algorithm::WeightedTickets);

    let json = serde_json::to_string_pretty(&outcome).unwrap();
    let published: SelectionOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(published, outcome);
    assert!(verify_outcome(&published, pool).unwrap().is_match());
}

#[test]
fn weighted_fairness_at_first_position() {
    const ROUNDS: u64 = 2000;
    let mut heavy_first = 0u64;
    for i in 0..ROUNDS {
        let seed = derive_seed(&[b"fairness", &i.to_be_bytes()]);
        let outcome = run(seed, 0, scenario_pool(), Algorithm::WeightedTickets);
        if outcome.placements[0].id == "b" {
            heavy_first += 1;
        }
    }
    let share = heavy_first as f64 / ROUNDS as f64;
    assert!((share - 0.75).abs() < 0.05, "weight-3 participant led {share}");
}

#[test]
fn unweighted_fairness_at_first_position() {
    const ROUNDS: u64 = 1500;
    let pool = vec![
        Participant::new("x", 0),
        Participant::new("y", 0),
        Participant::new("z", 0),
    ];
    let mut counts = [0u64; 3];
    for i in 0..ROUNDS {
        let seed = derive_seed(&[b"uniform-first", &i.to_be_bytes()]);
        let outcome = run(seed, 0, pool.clone(), Algorithm::Unweighted);
        let idx = match outcome.placements[0].id.as_str() {
            "x" => 0,
            "y" => 1,
            _ => 2,
        };
        counts[idx] += 1;
    }
    for c in counts {
        let share = c as f64 / ROUNDS as f64;
        assert!((share - 1.0 / 3.0).abs() < 0.06, "share {share}");
    }
}
