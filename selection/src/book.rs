//! Position bookkeeping shared by every assigner.

use tombola_prng::DrawSource;
use tombola_types::{sort_participants, AuditEntry, Participant, TombolaError};

use crate::assigner::Assignment;
use crate::observer::AssignmentObserver;
use crate::state::AssignmentState;

/// Sorted participants, their positions and the audit log of a session.
///
/// Outputs live here, keyed by participant index in sorted order; the
/// caller's participant records are never modified.
#[derive(Clone, Debug)]
pub struct PositionBook {
    participants: Vec<Participant>,
    position_of: Vec<Option<u64>>,
    order: Vec<usize>,
    winning_draws: Vec<Option<u64>>,
    audit: Vec<AuditEntry>,
}

impl PositionBook {
    /// Sort `participants` by id and start with no positions bound.
    pub fn new(participants: Vec<Participant>) -> Result<Self, TombolaError> {
        let participants = sort_participants(participants)?;
        let n = participants.len();
        Ok(Self {
            participants,
            position_of: vec![None; n],
            order: Vec::with_capacity(n),
            winning_draws: vec![None; n],
            audit: Vec::new(),
        })
    }

    /// Participants in ticket order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn assigned_count(&self) -> usize {
        self.order.len()
    }

    pub fn state(&self) -> AssignmentState {
        AssignmentState::from_counts(self.order.len(), self.participants.len())
    }

    pub fn position_of(&self, index: usize) -> Option<u64> {
        self.position_of.get(index).copied().flatten()
    }

    /// Participant indices in position order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn winning_draw(&self, index: usize) -> Option<u64> {
        self.winning_draws.get(index).copied().flatten()
    }

    pub fn audit_log(&self) -> &[AuditEntry] {
        &self.audit
    }

    /// Record the outcome of one draw that selected participant `index`.
    ///
    /// Returns `None` for a duplicate draw (already positioned), otherwise
    /// binds the next free position.
    pub(crate) fn resolve(
        &mut self,
        index: usize,
        raw_draw: u64,
        counter: u64,
        observer: &mut dyn AssignmentObserver,
    ) -> Result<Option<Assignment>, TombolaError> {
        let participant = self.participants.get(index).ok_or_else(|| {
            TombolaError::Consistency(format!(
                "draw resolved to index {index}, pool has {}",
                self.participants.len()
            ))
        })?;

        let draw_index = self.audit.len() as u64;

        if self.position_of[index].is_some() {
            let entry = AuditEntry {
                draw_index,
                counter,
                raw_draw,
                participant: participant.id.clone(),
                position: None,
            };
            observer.on_duplicate(&entry);
            self.audit.push(entry);
            return Ok(None);
        }

        let position = self.order.len() as u64;
        let assignment = Assignment {
            position,
            participant: participant.id.clone(),
            weight: participant.weight,
            draw: raw_draw,
            draw_index,
        };
        self.position_of[index] = Some(position);
        self.order.push(index);
        self.audit.push(AuditEntry {
            draw_index,
            counter,
            raw_draw,
            participant: participant.id.clone(),
            position: Some(position),
        });
        observer.on_assigned(&assignment);
        Ok(Some(assignment))
    }

    pub(crate) fn record_winning_draw(&mut self, index: usize, draw: u64) {
        if let Some(slot) = self.winning_draws.get_mut(index) {
            *slot = Some(draw);
        }
    }
}

/// Draw from `[0, bound)` with `u64` bounds.
pub(crate) fn draw_below<D: DrawSource>(source: &mut D, bound: u64) -> Result<u64, TombolaError> {
    let max = i64::try_from(bound)
        .map_err(|_| TombolaError::range(0, i64::MAX, format!("bound {bound} exceeds i64")))?;
    let value = source.uniform_below(max)?;
    u64::try_from(value)
        .map_err(|_| TombolaError::Consistency(format!("draw {value} below range [0, {bound})")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;

    fn book() -> PositionBook {
        PositionBook::new(vec![
            Participant::new("carol", 1),
            Participant::new("alice", 1),
            Participant::new("bob", 1),
        ])
        .unwrap()
    }

    #[test]
    fn binds_sequential_positions() {
        let mut book = book();
        let mut obs = RecordingObserver::default();

        let a = book.resolve(2, 2, 1, &mut obs).unwrap().unwrap();
        assert_eq!(a.participant, "carol");
        assert_eq!(a.position, 0);

        let b = book.resolve(0, 0, 2, &mut obs).unwrap().unwrap();
        assert_eq!(b.participant, "alice");
        assert_eq!(b.position, 1);

        assert_eq!(book.order(), &[2, 0]);
        assert_eq!(book.state(), AssignmentState::PartiallyAssigned(2));
        assert_eq!(obs.assigned.len(), 2);
    }

    #[test]
    fn duplicate_is_audited_without_binding() {
        let mut book = book();
        let mut obs = RecordingObserver::default();

        book.resolve(1, 1, 1, &mut obs).unwrap();
        assert!(book.resolve(1, 1, 2, &mut obs).unwrap().is_none());

        assert_eq!(book.assigned_count(), 1);
        assert_eq!(book.audit_log().len(), 2);
        assert!(book.audit_log()[1].is_duplicate());
        assert_eq!(book.audit_log()[1].draw_index, 1);
        assert_eq!(obs.duplicates.len(), 1);
    }

    #[test]
    fn out_of_bounds_index_is_inconsistent() {
        let mut book = book();
        let err = book.resolve(3, 3, 1, &mut RecordingObserver::default());
        assert!(matches!(err, Err(TombolaError::Consistency(_))));
        assert!(book.audit_log().is_empty());
    }
}
