//! Weighted draws resolved by scanning accumulated weight.

use tombola_prng::{DrawSource, HashChainPrng};
use tombola_types::{total_weight, Algorithm, Participant, Seed, TombolaError};

use crate::assigner::{Assignment, PositionAssigner};
use crate::book::{draw_below, PositionBook};
use crate::observer::AssignmentObserver;

/// Draws `w` uniformly from `[0, total_weight)` and walks the sorted pool,
/// selecting the first participant whose running weight total exceeds `w`.
///
/// No ticket table is built, so memory stays proportional to the pool size.
#[derive(Debug)]
pub struct AccumulationScanAssigner<D = HashChainPrng> {
    book: PositionBook,
    source: D,
    total_weight: u64,
}

impl AccumulationScanAssigner<HashChainPrng> {
    pub fn new(seed: Seed, counter: u64, participants: Vec<Participant>) -> Result<Self, TombolaError> {
        Self::with_source(participants, HashChainPrng::new(seed, counter))
    }
}

impl<D: DrawSource> AccumulationScanAssigner<D> {
    pub fn with_source(participants: Vec<Participant>, source: D) -> Result<Self, TombolaError> {
        let book = PositionBook::new(participants)?;
        require_positive_weights(book.participants())?;
        let total_weight = total_weight(book.participants())?;
        Ok(Self {
            book,
            source,
            total_weight,
        })
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }
}

impl<D: DrawSource> PositionAssigner for AccumulationScanAssigner<D> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::WeightedScan
    }

    fn book(&self) -> &PositionBook {
        &self.book
    }

    fn counter(&self) -> u64 {
        self.source.counter()
    }

    fn assign_next(
        &mut self,
        observer: &mut dyn AssignmentObserver,
    ) -> Result<Option<Assignment>, TombolaError> {
        if self.book.state().is_complete() {
            return Ok(None);
        }

        loop {
            let winner = draw_below(&mut self.source, self.total_weight)?;
            let index = scan_owner(self.book.participants(), winner).ok_or_else(|| {
                TombolaError::Consistency(format!(
                    "draw {winner} beyond total weight {}",
                    self.total_weight
                ))
            })?;
            let counter = self.source.counter();
            if let Some(assignment) = self.book.resolve(index, winner, counter, observer)? {
                return Ok(Some(assignment));
            }
        }
    }
}

/// Index of the first participant with `winner < running_total`.
///
/// The comparison is strict: participant `i` owns `[start_i, start_i + weight_i)`.
pub(crate) fn scan_owner(participants: &[Participant], winner: u64) -> Option<usize> {
    let mut running = 0u64;
    for (index, participant) in participants.iter().enumerate() {
        running = running.saturating_add(participant.weight);
        if winner < running {
            return Some(index);
        }
    }
    None
}

/// Weighted draws need every weight above zero.
pub(crate) fn require_positive_weights(participants: &[Participant]) -> Result<(), TombolaError> {
    match participants.iter().find(|p| p.weight == 0) {
        Some(p) => Err(TombolaError::Weight {
            id: p.id.clone(),
            weight: p.weight,
        }),
        None => Ok(()),
    }
}
