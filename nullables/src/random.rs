//! Scripted draw values standing in for the hash-chain PRNG.

use tombola_prng::{range_width, DrawSource};
use tombola_types::TombolaError;

/// A deterministic [`DrawSource`] for testing.
///
/// Returns pre-configured values in order, cycling when exhausted, reduced
/// into the requested range. The counter advances by one per draw, like a
/// PRNG that never rejects.
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    values: Vec<u64>,
    index: usize,
    counter: u64,
}

impl ScriptedDraws {
    /// Create with a sequence of draw values.
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values,
            index: 0,
            counter: 0,
        }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    /// Start the counter at `counter` instead of zero.
    pub fn starting_at(mut self, counter: u64) -> Self {
        self.counter = counter;
        self
    }

    /// Number of draws served so far.
    pub fn served(&self) -> usize {
        self.index
    }
}

impl DrawSource for ScriptedDraws {
    fn uniform_in_range(
        &mut self,
        min_inclusive: i64,
        max_exclusive: i64,
    ) -> Result<i64, TombolaError> {
        let range = range_width(min_inclusive, max_exclusive)?;
        if self.values.is_empty() {
            return Err(TombolaError::Consistency("no scripted draws".into()));
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        self.counter += 1;
        Ok(min_inclusive + (value % range) as i64)
    }

    fn counter(&self) -> u64 {
        self.counter
    }
}
