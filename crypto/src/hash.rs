//! SHA-512, the hash behind every raw draw and derived seed.

use sha2::{Digest, Sha512};

/// Output width of [`sha512`] in bytes. Equal to the seed width.
pub const SHA512_BYTES: usize = 64;

/// SHA-512 of one buffer, e.g. the 64-byte `seed XOR counter` block.
pub fn sha512(data: &[u8]) -> [u8; SHA512_BYTES] {
    sha512_multi(&[data])
}

/// SHA-512 over the concatenation of `parts`.
///
/// Used to derive a seed from several pieces of public text, such as a
/// beacon round and its published value.
pub fn sha512_multi(parts: &[&[u8]]) -> [u8; SHA512_BYTES] {
    let digest = parts
        .iter()
        .fold(Sha512::new(), |hasher, part| hasher.chain_update(part))
        .finalize();
    let mut output = [0u8; SHA512_BYTES];
    output.copy_from_slice(&digest);
    output
}
