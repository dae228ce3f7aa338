//! Seed generation and derivation.

use rand::rngs::OsRng;
use rand::RngCore;
use tombola_types::{Seed, SEED_BYTES};

use crate::hash::{sha512_multi, SHA512_BYTES};

const _: () = assert!(SHA512_BYTES == SEED_BYTES);

/// Generate a fresh seed from the operating system's secure random source.
pub fn generate_seed() -> Seed {
    let mut bytes = [0u8; SEED_BYTES];
    OsRng.fill_bytes(&mut bytes);
    Seed::new(bytes)
}

/// Derive a seed from public material, e.g. a published beacon value.
///
/// The seed is `SHA-512(parts[0] || parts[1] || ...)`.
pub fn derive_seed(parts: &[&[u8]]) -> Seed {
    Seed::new(sha512_multi(parts))
}
