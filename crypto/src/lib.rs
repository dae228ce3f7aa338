//! Cryptographic primitives for tombola draws.
//!
//! - **SHA-512** for the draw hash chain
//! - OS-random seed generation and seed derivation from public material

pub mod hash;
pub mod seed;

pub use hash::{sha512, sha512_multi, SHA512_BYTES};
pub use seed::{derive_seed, generate_seed};
