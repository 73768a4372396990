//! Image-Code: a perceptual hash over normalized grayscale pixels.
//!
//! The caller supplies the already decoded and resampled 32×32 grayscale
//! matrix. A two-dimensional DCT concentrates the perceptually dominant
//! signal into the top-left 8×8 coefficient block; comparing each
//! coefficient against the block median yields 64 bits that survive
//! scaling, mild compression and brightness shifts.

use serde::{Deserialize, Serialize};

use crate::codec::{encode_component, validate_bit_length, MainType, SubType, VERSION_V0};
use crate::dct::dct;
use crate::error::{IsccError, Result};
use crate::options::CoreOptions;

/// Side length of the input pixel matrix.
pub const IMAGE_SIDE: usize = 32;

/// Result of Image-Code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCode {
    /// The encoded Image-Code with `ISCC:` prefix.
    pub iscc: String,
}

/// Create an Image-Code with the latest standard algorithm.
pub fn gen_image_code(pixels: &[u8], opts: &CoreOptions) -> Result<ImageCode> {
    gen_image_code_v0(pixels, opts.image_bits)
}

/// Create an Image-Code with algorithm v0.
///
/// `pixels` is the row-major 32×32 grayscale matrix (1024 values). The
/// perceptual hash is 64 bits, so `bits` may be 32 or 64.
pub fn gen_image_code_v0(pixels: &[u8], bits: u32) -> Result<ImageCode> {
    if validate_bit_length(bits)? > 64 {
        return Err(IsccError::InvalidBitLength(bits));
    }
    let digest = soft_hash_image_v0(pixels)?;
    let code = encode_component(MainType::Content, SubType::Image, VERSION_V0, bits, &digest)?;
    Ok(ImageCode {
        iscc: format!("ISCC:{code}"),
    })
}

/// 64-bit perceptual hash of a 32×32 grayscale matrix.
pub fn soft_hash_image_v0(pixels: &[u8]) -> Result<[u8; 8]> {
    if pixels.len() != IMAGE_SIDE * IMAGE_SIDE {
        return Err(IsccError::InvalidInput(format!(
            "image hash requires {} pixels, got {}",
            IMAGE_SIDE * IMAGE_SIDE,
            pixels.len()
        )));
    }

    // DCT over every row, then over every column of the row-transformed
    // matrix.
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(IMAGE_SIDE);
    for row in pixels.chunks(IMAGE_SIDE) {
        let values: Vec<f64> = row.iter().map(|&p| p as f64).collect();
        rows.push(dct(&values)?);
    }
    let mut matrix = vec![vec![0.0f64; IMAGE_SIDE]; IMAGE_SIDE];
    for col in 0..IMAGE_SIDE {
        let column: Vec<f64> = (0..IMAGE_SIDE).map(|r| rows[r][col]).collect();
        let transformed = dct(&column)?;
        for (row, value) in transformed.into_iter().enumerate() {
            matrix[row][col] = value;
        }
    }

    // top-left 8×8 block, DC included, row-major
    let mut block = [0.0f64; 64];
    for r in 0..8 {
        for c in 0..8 {
            block[r * 8 + c] = matrix[r][c];
        }
    }
    let mut sorted = block;
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("finite coefficients"));
    let median = (sorted[31] + sorted[32]) / 2.0;

    let mut digest = [0u8; 8];
    for (i, value) in block.iter().enumerate() {
        if *value > median {
            digest[i / 8] |= 0x80 >> (i % 8);
        }
    }
    Ok(digest)
}
