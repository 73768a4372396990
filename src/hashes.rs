//! Thin wrapper around the `blake3` crate providing the digest entry
//! points used by the rest of this crate.
//!
//! Blake3 is the only cryptographic hash in the system: it digests
//! metadata and text n-grams, derives 32-bit chunk features for the
//! Data-Code, and produces the Instance-Code identity digest.

pub use blake3::Hasher as Blake3State;

/// One-shot 256-bit blake3 digest.
#[inline]
pub fn blake3_digest(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

/// One-shot blake3 digest as a lowercase hex string.
#[inline]
pub fn blake3_hex(data: &[u8]) -> String {
    hex::encode(blake3_digest(data))
}

/// Derive a 32-bit feature from arbitrary bytes: the big-endian leading
/// four bytes of the blake3 digest.
#[inline]
pub fn blake3_feature(data: &[u8]) -> u32 {
    let digest = blake3_digest(data);
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}
