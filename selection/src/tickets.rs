//! Weighted draws resolved through a precomputed ticket table.

use std::ops::Range;

use tombola_prng::{DrawSource, HashChainPrng};
use tombola_types::{total_weight, Algorithm, Participant, Seed, TombolaError};

use crate::assigner::{Assignment, PositionAssigner};
use crate::book::{draw_below, PositionBook};
use crate::observer::AssignmentObserver;
use crate::scan::require_positive_weights;

/// Partition of `[0, total_weight)` into one contiguous ticket range per
/// participant, in sorted participant order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketTable {
    ranges: Vec<Range<u64>>,
    total: u64,
}

impl TicketTable {
    /// Allocate `weight` consecutive tickets to each participant, starting
    /// at the running total, then check the table covers `total_weight`.
    pub fn build(participants: &[Participant], total_weight: u64) -> Result<Self, TombolaError> {
        let mut ranges = Vec::with_capacity(participants.len());
        let mut next = 0u64;
        for participant in participants {
            let end = next.checked_add(participant.weight).ok_or_else(|| {
                TombolaError::Consistency(format!(
                    "ticket numbering overflows at participant {:?}",
                    participant.id
                ))
            })?;
            ranges.push(next..end);
            next = end;
        }

        let issued: u64 = ranges.iter().map(|r| r.end - r.start).sum();
        if issued != total_weight {
            return Err(TombolaError::Consistency(format!(
                "issued {issued} tickets for total weight {total_weight}"
            )));
        }

        Ok(Self {
            ranges,
            total: issued,
        })
    }

    /// Number of tickets issued.
    pub fn len(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Index of the participant holding `ticket`.
    pub fn owner_of(&self, ticket: u64) -> Option<usize> {
        let index = self.ranges.partition_point(|r| r.end <= ticket);
        self.ranges
            .get(index)
            .filter(|r| r.contains(&ticket))
            .map(|_| index)
    }

    /// Tickets held by participant `index`.
    pub fn tickets_of(&self, index: usize) -> Option<Range<u64>> {
        self.ranges.get(index).cloned()
    }

    /// Ticket ranges in participant order.
    pub fn ranges(&self) -> &[Range<u64>] {
        &self.ranges
    }
}

/// Builds a [`TicketTable`] up front and resolves each draw by ticket lookup,
/// recording the winning ticket of every positioned participant.
#[derive(Debug)]
pub struct TicketTableAssigner<D = HashChainPrng> {
    book: PositionBook,
    source: D,
    table: TicketTable,
}

impl TicketTableAssigner<HashChainPrng> {
    pub fn new(seed: Seed, counter: u64, participants: Vec<Participant>) -> Result<Self, TombolaError> {
        Self::with_source(participants, HashChainPrng::new(seed, counter))
    }
}

impl<D: DrawSource> TicketTableAssigner<D> {
    pub fn with_source(participants: Vec<Participant>, source: D) -> Result<Self, TombolaError> {
        let book = PositionBook::new(participants)?;
        require_positive_weights(book.participants())?;
        let total = total_weight(book.participants())?;
        let table = TicketTable::build(book.participants(), total)?;
        Ok(Self {
            book,
            source,
            table,
        })
    }

    pub fn table(&self) -> &TicketTable {
        &self.table
    }
}

impl<D: DrawSource> PositionAssigner for TicketTableAssigner<D> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::WeightedTickets
    }

    fn book(&self) -> &PositionBook {
        &self.book
    }

    fn counter(&self) -> u64 {
        self.source.counter()
    }

    fn ticket_table(&self) -> Option<&TicketTable> {
        Some(&self.table)
    }

    fn assign_next(
        &mut self,
        observer: &mut dyn AssignmentObserver,
    ) -> Result<Option<Assignment>, TombolaError> {
        if self.book.state().is_complete() {
            return Ok(None);
        }

        loop {
            let ticket = draw_below(&mut self.source, self.table.len())?;
            let index = self.table.owner_of(ticket).ok_or_else(|| {
                TombolaError::Consistency(format!("ticket {ticket} has no owner"))
            })?;
            let counter = self.source.counter();
            if let Some(assignment) = self.book.resolve(index, ticket, counter, observer)? {
                self.book.record_winning_draw(index, ticket);
                return Ok(Some(assignment));
            }
        }
    }
}
