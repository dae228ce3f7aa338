//! A single seeded draw from start to finish.

use tombola_prng::HashChainPrng;
use tombola_types::{total_weight, Algorithm, Participant, Seed, TombolaError};

use crate::assigner::{Assignment, PositionAssigner};
use crate::observer::{AssignmentObserver, TracingObserver};
use crate::outcome::{Placement, SelectionOutcome, TicketAllocation};
use crate::scan::AccumulationScanAssigner;
use crate::state::AssignmentState;
use crate::tickets::TicketTableAssigner;
use crate::unweighted::UnweightedAssigner;

/// Owns one assigner and its PRNG, and reports every transition to an
/// observer.
///
/// Sessions are single-threaded and never share a counter. To continue a
/// draw elsewhere, start a new session from the last known counter.
pub struct SelectionSession<O = TracingObserver> {
    seed: Seed,
    start_counter: u64,
    total_weight: u64,
    assigner: Box<dyn PositionAssigner>,
    observer: O,
}

impl SelectionSession<TracingObserver> {
    pub fn new(
        seed: Seed,
        start_counter: u64,
        participants: Vec<Participant>,
        algorithm: Algorithm,
    ) -> Result<Self, TombolaError> {
        let prng = HashChainPrng::new(seed, start_counter);
        let assigner: Box<dyn PositionAssigner> = match algorithm {
            Algorithm::Unweighted => Box::new(UnweightedAssigner::with_source(participants, prng)?),
            Algorithm::WeightedScan => {
                Box::new(AccumulationScanAssigner::with_source(participants, prng)?)
            }
            Algorithm::WeightedTickets => {
                Box::new(TicketTableAssigner::with_source(participants, prng)?)
            }
        };
        let total_weight = total_weight(assigner.book().participants())?;

        tracing::debug!(
            algorithm = %algorithm,
            participants = assigner.book().len(),
            start_counter,
            "selection session created"
        );

        Ok(Self {
            seed,
            start_counter,
            total_weight,
            assigner,
            observer: TracingObserver,
        })
    }
}

impl<O: AssignmentObserver> SelectionSession<O> {
    /// Replace the observer.
    pub fn with_observer<P: AssignmentObserver>(self, observer: P) -> SelectionSession<P> {
        SelectionSession {
            seed: self.seed,
            start_counter: self.start_counter,
            total_weight: self.total_weight,
            assigner: self.assigner,
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn counter(&self) -> u64 {
        self.assigner.counter()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.assigner.algorithm()
    }

    pub fn state(&self) -> AssignmentState {
        self.assigner.state()
    }

    /// Participants in ticket order.
    pub fn participants(&self) -> &[Participant] {
        self.assigner.book().participants()
    }

    pub fn assign_next(&mut self) -> Result<Option<Assignment>, TombolaError> {
        self.assigner.assign_next(&mut self.observer)
    }

    /// Bind up to `count` more positions; returns how many were bound.
    pub fn assign_positions(&mut self, count: usize) -> Result<usize, TombolaError> {
        let mut bound = 0;
        while bound < count {
            if self.assigner.assign_next(&mut self.observer)?.is_none() {
                break;
            }
            bound += 1;
        }
        Ok(bound)
    }

    pub fn assign_all(&mut self) -> Result<(), TombolaError> {
        self.assigner.assign_all(&mut self.observer)?;
        tracing::debug!(
            positions = self.assigner.book().assigned_count(),
            draws = self.assigner.book().audit_log().len(),
            counter = self.counter(),
            "selection session complete"
        );
        Ok(())
    }

    /// Snapshot of positions, tickets and audit log so far.
    pub fn outcome(&self) -> SelectionOutcome {
        let book = self.assigner.book();
        let participants = book.participants();

        let placements = book
            .order()
            .iter()
            .enumerate()
            .map(|(position, &index)| Placement {
                position: position as u64,
                id: participants[index].id.clone(),
                weight: participants[index].weight,
                winning_ticket: book.winning_draw(index),
            })
            .collect();

        let tickets = self
            .assigner
            .ticket_table()
            .map(|table| {
                table
                    .ranges()
                    .iter()
                    .zip(participants)
                    .map(|(range, p)| TicketAllocation {
                        id: p.id.clone(),
                        first: range.start,
                        count: range.end - range.start,
                    })
                    .collect()
            })
            .unwrap_or_default();

        SelectionOutcome {
            algorithm: self.algorithm(),
            seed: self.seed,
            start_counter: self.start_counter,
            final_counter: self.counter(),
            participant_count: participants.len(),
            total_weight: self.total_weight,
            placements,
            tickets,
            audit: book.audit_log().to_vec(),
        }
    }

    /// Assign every position and return the outcome.
    pub fn run(mut self) -> Result<SelectionOutcome, TombolaError> {
        self.assign_all()?;
        Ok(self.outcome())
    }
}

/// Algorithm to use when the caller does not pick one.
///
/// Pools with a zero weight, or where every weight is equal, are drawn
/// unweighted; anything else uses the ticket table.
pub fn recommended_algorithm(participants: &[Participant]) -> Algorithm {
    let any_zero = participants.iter().any(|p| p.weight == 0);
    let all_equal = participants
        .windows(2)
        .all(|pair| pair[0].weight == pair[1].weight);
    if any_zero || all_equal {
        Algorithm::Unweighted
    } else {
        Algorithm::WeightedTickets
    }
}
