//! Shared helpers for the integration tests.
#![allow(dead_code)]

/// Deterministic pseudo-random bytes from the SplitMix64 sequence.
pub fn splitmix_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed;
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        out.extend_from_slice(&z.to_le_bytes());
    }
    out.truncate(len);
    out
}

/// Deterministic pseudo-random u64 values from the SplitMix64 sequence.
pub fn splitmix_values(seed: u64, count: usize) -> Vec<u64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        })
        .collect()
}

pub const TEXT_A: &str = "\n    Their most significant and usefull property of similarity-preserving\n    fingerprints gets lost in the fragmentation of individual, propietary and\n    use case specific implementations. The real benefit lies in similarity\n    preservation beyond your local data archive on a global scale accross\n    vendors.\n";

pub const TEXT_B: &str = "\n    The most significant and usefull property of similarity-preserving\n    fingerprints gets lost in the fragmentation of individual, propietary and\n    use case specific implementations. The real benefit lies in similarity\n    preservation beyond your local data archive on a global scale accross\n    vendors.\n";

pub const TEXT_C: &str = "\n    A need for open standard fingerprinting. We don´t need the best\n    Fingerprinting algorithm just an accessible and widely used one.\n";
