//! Uniform index draws over an equal-weight pool.

use tombola_prng::{DrawSource, HashChainPrng};
use tombola_types::{Algorithm, Participant, Seed, TombolaError};

use crate::assigner::{Assignment, PositionAssigner};
use crate::book::{draw_below, PositionBook};
use crate::observer::AssignmentObserver;

/// Each draw picks a participant index uniformly from `[0, N)`; weights are
/// ignored, so zero-weight pools belong here.
#[derive(Debug)]
pub struct UnweightedAssigner<D = HashChainPrng> {
    book: PositionBook,
    source: D,
}

impl UnweightedAssigner<HashChainPrng> {
    pub fn new(seed: Seed, counter: u64, participants: Vec<Participant>) -> Result<Self, TombolaError> {
        Self::with_source(participants, HashChainPrng::new(seed, counter))
    }
}

impl<D: DrawSource> UnweightedAssigner<D> {
    pub fn with_source(participants: Vec<Participant>, source: D) -> Result<Self, TombolaError> {
        Ok(Self {
            book: PositionBook::new(participants)?,
            source,
        })
    }

    pub fn source(&self) -> &D {
        &self.source
    }
}

impl<D: DrawSource> PositionAssigner for UnweightedAssigner<D> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Unweighted
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

        let n = self.book.len() as u64;
        loop {
            let index = draw_below(&mut self.source, n)?;
            let counter = self.source.counter();
            if let Some(assignment) =
                self.book.resolve(index as usize, index, counter, observer)?
            {
                return Ok(Some(assignment));
            }
        }
    }
}
