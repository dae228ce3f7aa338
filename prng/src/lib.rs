//! Deterministic draw engine.
//!
//! Every draw is `SHA-512(seed XOR counter)` for a strictly increasing
//! counter, mapped onto the requested range by rejection sampling. Given the
//! public seed and the starting counter, anyone can recompute the sequence.

pub mod chain;
pub mod raw;

pub use chain::HashChainPrng;
pub use raw::RawDraw;

use tombola_types::TombolaError;

/// Largest sampling range accepted by [`DrawSource::uniform_in_range`].
///
/// Matches the exactly representable integer range of an IEEE-754 double so
/// that independent implementations built on floating-point numbers replay
/// the same draws.
pub const MAX_SAFE_RANGE: u64 = (1 << 53) - 1;

/// A source of reproducible uniform draws.
pub trait DrawSource {
    /// Uniform integer in `[min_inclusive, max_exclusive)`.
    fn uniform_in_range(&mut self, min_inclusive: i64, max_exclusive: i64)
        -> Result<i64, TombolaError>;

    /// Uniform integer in `[0, max_exclusive)`.
    fn uniform_below(&mut self, max_exclusive: i64) -> Result<i64, TombolaError> {
        self.uniform_in_range(0, max_exclusive)
    }

    /// Current value of the draw counter.
    fn counter(&self) -> u64;
}

/// Validate a sampling range and return its width.
pub fn range_width(min_inclusive: i64, max_exclusive: i64) -> Result<u64, TombolaError> {
    if min_inclusive > max_exclusive {
        return Err(TombolaError::range(min_inclusive, max_exclusive, "min > max"));
    }
    if max_exclusive < 0 {
        return Err(TombolaError::range(
            min_inclusive,
            max_exclusive,
            "max must not be negative",
        ));
    }

    let width = max_exclusive
        .checked_sub(min_inclusive)
        .and_then(|w| u64::try_from(w).ok())
        .filter(|w| *w <= MAX_SAFE_RANGE)
        .ok_or_else(|| {
            TombolaError::range(
                min_inclusive,
                max_exclusive,
                format!("range must not exceed {MAX_SAFE_RANGE}"),
            )
        })?;

    if width == 0 {
        return Err(TombolaError::range(
            min_inclusive,
            max_exclusive,
            "range must be greater than 0",
        ));
    }
    Ok(width)
}
