//! SHA-512 hash-chain PRNG.

use tombola_crypto::sha512;
use tombola_types::{Seed, TombolaError};

use crate::raw::{mix, RawDraw};
use crate::{range_width, DrawSource};

/// Reproducible PRNG keyed by a public seed and a monotonic counter.
///
/// Resuming a draw elsewhere only needs the seed and the last counter value:
/// `HashChainPrng::new(seed, c)` continues exactly where a generator that had
/// reached counter `c` left off.
#[derive(Clone, Debug)]
pub struct HashChainPrng {
    seed: Seed,
    counter: u64,
}

impl HashChainPrng {
    pub fn new(seed: Seed, counter: u64) -> Self {
        Self { seed, counter }
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Advance the counter and hash `seed XOR counter`.
    pub fn next_raw_draw(&mut self) -> Result<RawDraw, TombolaError> {
        self.counter = self
            .counter
            .checked_add(1)
            .ok_or_else(|| TombolaError::Consistency("draw counter exhausted".into()))?;
        let digest = sha512(&mix(&self.seed, self.counter));
        RawDraw::from_digest(&digest)
    }

    /// Draw until a raw value falls at or below the rejection limit for `range`.
    fn accepted_draw(&mut self, range: u64) -> Result<RawDraw, TombolaError> {
        accept(RawDraw::rejection_limit(range), || self.next_raw_draw())
    }
}

/// First value from `next` that is `<= limit`; larger values are discarded.
fn accept<F>(limit: RawDraw, mut next: F) -> Result<RawDraw, TombolaError>
where
    F: FnMut() -> Result<RawDraw, TombolaError>,
{
    loop {
        let draw = next()?;
        if draw <= limit {
            return Ok(draw);
        }
    }
}

impl DrawSource for HashChainPrng {
    fn uniform_in_range(
        &mut self,
        min_inclusive: i64,
        max_exclusive: i64,
    ) -> Result<i64, TombolaError> {
        let range = range_width(min_inclusive, max_exclusive)?;
        let draw = self.accepted_draw(range)?;
        // range <= MAX_SAFE_RANGE, so the offset fits in i64 and the sum stays below max.
        Ok(min_inclusive + draw.rem(range) as i64)
    }

    fn counter(&self) -> u64 {
        self.counter
    }
}
