//! Fixed-width big-endian integers for raw draws.

use std::fmt;

use tombola_types::{Seed, TombolaError, SEED_BITS, SEED_BYTES};

/// A `SEED_BITS`-wide unsigned integer, big-endian.
///
/// Byte-wise ordering of big-endian arrays equals numeric ordering, so the
/// derived `Ord` compares values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawDraw([u8; SEED_BYTES]);

impl RawDraw {
    pub const MAX: Self = Self([0xffu8; SEED_BYTES]);

    pub fn new(bytes: [u8; SEED_BYTES]) -> Self {
        Self(bytes)
    }

    /// Reinterpret a hash digest, which must be exactly `SEED_BITS` wide.
    pub fn from_digest(digest: &[u8]) -> Result<Self, TombolaError> {
        let bytes: [u8; SEED_BYTES] = digest.try_into().map_err(|_| {
            TombolaError::Consistency(format!(
                "digest is {} bits, expected {SEED_BITS}",
                digest.len() * 8
            ))
        })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.0
    }

    /// `self mod modulus`. `modulus` must be non-zero.
    pub fn rem(&self, modulus: u64) -> u64 {
        let m = modulus as u128;
        let r = self
            .0
            .iter()
            .fold(0u128, |acc, &b| ((acc << 8) | b as u128) % m);
        r as u64
    }

    /// Largest raw draw accepted for `range`:
    /// `(2^SEED_BITS - 1) - (2^SEED_BITS mod range)`.
    ///
    /// Accepting exactly `limit + 1` values, a multiple of `range`, makes
    /// `draw mod range` uniform.
    pub fn rejection_limit(range: u64) -> Self {
        let tail = pow2_rem(SEED_BITS, range);
        let mut bytes = [0xffu8; SEED_BYTES];
        bytes[SEED_BYTES - 8..].copy_from_slice(&(u64::MAX - tail).to_be_bytes());
        Self(bytes)
    }
}

/// `seed XOR counter`, with the counter right-aligned big-endian.
pub(crate) fn mix(seed: &Seed, counter: u64) -> [u8; SEED_BYTES] {
    let mut out = *seed.as_bytes();
    for (o, c) in out[SEED_BYTES - 8..].iter_mut().zip(counter.to_be_bytes()) {
        *o ^= c;
    }
    out
}

/// `2^exp mod modulus`. `modulus` must be non-zero.
fn pow2_rem(exp: usize, modulus: u64) -> u64 {
    let m = modulus as u128;
    let mut r = 1 % m;
    for _ in 0..exp {
        r = (r << 1) % m;
    }
    r as u64
}

impl fmt::Debug for RawDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawDraw(0x{}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for RawDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
