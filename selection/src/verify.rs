//! Independent replay of a published outcome.

use tombola_types::{Participant, TombolaError};

use crate::observer::NoopObserver;
use crate::outcome::SelectionOutcome;
use crate::session::SelectionSession;

/// Result of replaying a published outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verification {
    Match,
    Mismatch { field: &'static str, detail: String },
}

impl Verification {
    pub fn is_match(&self) -> bool {
        matches!(self, Verification::Match)
    }
}

/// Recompute `published` from its seed, start counter and algorithm over
/// `participants`, drawing as many positions as it lists.
pub fn verify_outcome(
    published: &SelectionOutcome,
    participants: Vec<Participant>,
) -> Result<Verification, TombolaError> {
    let mut session = SelectionSession::new(
        published.seed,
        published.start_counter,
        participants,
        published.algorithm,
    )?
    .with_observer(NoopObserver);
    session.assign_positions(published.placements.len())?;
    Ok(compare(published, &session.outcome()))
}

/// First difference between two outcomes, in the order an auditor reads them.
pub fn compare(expected: &SelectionOutcome, actual: &SelectionOutcome) -> Verification {
    fn mismatch(field: &'static str, detail: String) -> Verification {
        Verification::Mismatch { field, detail }
    }

    if expected.seed != actual.seed || expected.algorithm != actual.algorithm {
        return mismatch("session", "seed or algorithm differs".into());
    }
    if expected.participant_count != actual.participant_count {
        return mismatch(
            "participant_count",
            format!("{} != {}", expected.participant_count, actual.participant_count),
        );
    }
    if expected.total_weight != actual.total_weight {
        return mismatch(
            "total_weight",
            format!("{} != {}", expected.total_weight, actual.total_weight),
        );
    }
    if let Some(detail) = first_difference(&expected.tickets, &actual.tickets) {
        return mismatch("tickets", detail);
    }
    if let Some(detail) = first_difference(&expected.placements, &actual.placements) {
        return mismatch("placements", detail);
    }
    if let Some(detail) = first_difference(&expected.audit, &actual.audit) {
        return mismatch("audit", detail);
    }
    if expected.final_counter != actual.final_counter {
        return mismatch(
            "final_counter",
            format!("{} != {}", expected.final_counter, actual.final_counter),
        );
    }
    Verification::Match
}

fn first_difference<T: PartialEq + std::fmt::Debug>(expected: &[T], actual: &[T]) -> Option<String> {
    if let Some((i, (e, a))) = expected
        .iter()
        .zip(actual)
        .enumerate()
        .find(|(_, (e, a))| e != a)
    {
        return Some(format!("entry {i}: published {e:?}, recomputed {a:?}"));
    }
    if expected.len() != actual.len() {
        return Some(format!(
            "published {} entries, recomputed {}",
            expected.len(),
            actual.len()
        ));
    }
    None
}
