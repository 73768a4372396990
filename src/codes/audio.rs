//! Audio-Code: content similarity over audio fingerprints.
//!
//! The input is a Chromaprint-style sequence of 32-bit features (signed
//! fingerprint words reinterpreted as unsigned). The minhash sketch turns
//! the feature set into a compact digest whose Hamming distance tracks
//! acoustic similarity.

use serde::{Deserialize, Serialize};

use crate::codec::{encode_component, MainType, SubType, VERSION_V0};
use crate::error::Result;
use crate::minhash::alg_minhash_256;
use crate::options::CoreOptions;

/// Result of Audio-Code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioCode {
    /// The encoded Audio-Code with `ISCC:` prefix.
    pub iscc: String,
}

/// Create an Audio-Code with the latest standard algorithm.
pub fn gen_audio_code(features: &[u32], opts: &CoreOptions) -> Result<AudioCode> {
    gen_audio_code_v0(features, opts.audio_bits)
}

/// Create an Audio-Code with algorithm v0.
pub fn gen_audio_code_v0(features: &[u32], bits: u32) -> Result<AudioCode> {
    let digest = soft_hash_audio_v0(features)?;
    let code = encode_component(MainType::Content, SubType::Audio, VERSION_V0, bits, &digest)?;
    Ok(AudioCode {
        iscc: format!("ISCC:{code}"),
    })
}

/// 256-bit similarity hash over a fingerprint feature sequence.
pub fn soft_hash_audio_v0(features: &[u32]) -> Result<[u8; 32]> {
    alg_minhash_256(features)
}
