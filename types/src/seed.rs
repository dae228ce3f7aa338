//! The public draw seed and its hex encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{SeedRule, TombolaError};

/// Width of the seed, the draw counter space and every raw draw.
pub const SEED_BITS: usize = 512;

/// `SEED_BITS` in bytes.
pub const SEED_BYTES: usize = SEED_BITS / 8;

/// A 512-bit public seed, stored big-endian.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; SEED_BYTES]);

impl Seed {
    pub fn new(bytes: [u8; SEED_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.0
    }

    /// Parse and validate a `0x`-prefixed hex seed.
    ///
    /// Surrounding whitespace is trimmed before the prefix check. The digits
    /// are case-insensitive and must decode to exactly [`SEED_BYTES`] bytes.
    pub fn from_hex(encoded: &str) -> Result<Self, TombolaError> {
        let trimmed = encoded.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .ok_or_else(|| TombolaError::format(SeedRule::Prefix, encoded))?;

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TombolaError::format(SeedRule::Charset, encoded));
        }
        if digits.len() != SEED_BYTES * 2 {
            return Err(TombolaError::format(SeedRule::Length, encoded));
        }

        let decoded =
            hex::decode(digits).map_err(|_| TombolaError::format(SeedRule::Charset, encoded))?;
        let bytes: [u8; SEED_BYTES] = decoded
            .try_into()
            .map_err(|_| TombolaError::format(SeedRule::Length, encoded))?;
        Ok(Self(bytes))
    }

    /// Lowercase `0x` + 128 hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed(0x{}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Seed {
    type Err = TombolaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Seed::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
