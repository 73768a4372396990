//! Video-Code: content similarity over MPEG-7 frame signatures.
//!
//! Frame signatures (380-element vectors, e.g. extracted with ffmpeg's
//! `signature` filter) are deduplicated, summed column-wise and hashed
//! with the winner-take-all kernel, so the code reflects the ranking
//! structure of the whole clip rather than any single frame.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::codec::{encode_component, MainType, SubType, VERSION_V0};
use crate::error::{IsccError, Result};
use crate::options::CoreOptions;
use crate::wtahash::{wtahash, WTA_VECTOR_LEN};

/// Result of Video-Code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCode {
    /// The encoded Video-Code with `ISCC:` prefix.
    pub iscc: String,
}

/// Create a Video-Code with the latest standard algorithm.
pub fn gen_video_code(frame_sigs: &[Vec<u32>], opts: &CoreOptions) -> Result<VideoCode> {
    gen_video_code_v0(frame_sigs, opts.video_bits)
}

/// Create a Video-Code with algorithm v0.
pub fn gen_video_code_v0(frame_sigs: &[Vec<u32>], bits: u32) -> Result<VideoCode> {
    let digest = soft_hash_video_v0(frame_sigs)?;
    let code = encode_component(MainType::Content, SubType::Video, VERSION_V0, bits, &digest)?;
    Ok(VideoCode {
        iscc: format!("ISCC:{code}"),
    })
}

/// 256-bit similarity hash over a frame signature sequence.
///
/// Duplicate signatures count once (set semantics), so still frames and
/// frame-rate differences do not skew the column sums.
pub fn soft_hash_video_v0(frame_sigs: &[Vec<u32>]) -> Result<[u8; 32]> {
    if frame_sigs.is_empty() {
        return Err(IsccError::InvalidInput("no frame signatures".into()));
    }
    for sig in frame_sigs {
        if sig.len() != WTA_VECTOR_LEN {
            return Err(IsccError::InvalidInput(format!(
                "frame signature has {} elements, expected {}",
                sig.len(),
                WTA_VECTOR_LEN
            )));
        }
    }
    let unique: BTreeSet<&Vec<u32>> = frame_sigs.iter().collect();
    let mut sums = vec![0u64; WTA_VECTOR_LEN];
    for sig in unique {
        for (slot, &v) in sums.iter_mut().zip(sig.iter()) {
            *slot += v as u64;
        }
    }
    wtahash(&sums)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_frames_count_once() {
        let sig1: Vec<u32> = (0..380).map(|i| i % 7).collect();
        let sig2: Vec<u32> = (0..380).map(|i| i % 11).collect();
        let a = soft_hash_video_v0(&[sig1.clone(), sig2.clone()]).unwrap();
        let b = soft_hash_video_v0(&[sig1.clone(), sig2.clone(), sig1]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wrong_arity_rejected() {
        assert!(soft_hash_video_v0(&[vec![1u32; 100]]).is_err());
        assert!(soft_hash_video_v0(&[]).is_err());
    }
}
