//! Text-Code: content similarity for plain text.
//!
//! Text is collapsed, lower-cased and cut into 13-character n-grams whose
//! blake3-derived 32-bit features feed the minhash sketch. Whitespace
//! normalization and mark stripping make the code robust against
//! formatting, casing and diacritic differences.

use serde::{Deserialize, Serialize};

use crate::codec::{encode_component, MainType, SubType, VERSION_V0};
use crate::error::Result;
use crate::hashes::blake3_feature;
use crate::minhash::alg_minhash_256;
use crate::normalize::collapse_text;
use crate::options::CoreOptions;
use crate::utils::sliding_windows;

/// Result of Text-Code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCode {
    /// The encoded Text-Code with `ISCC:` prefix.
    pub iscc: String,
    /// Number of characters after normalization.
    pub characters: u64,
}

/// Create a Text-Code with the latest standard algorithm.
pub fn gen_text_code(text: &str, opts: &CoreOptions) -> Result<TextCode> {
    gen_text_code_v0(text, opts.text_bits, opts)
}

/// Create a Text-Code with algorithm v0.
pub fn gen_text_code_v0(text: &str, bits: u32, opts: &CoreOptions) -> Result<TextCode> {
    let collapsed = collapse_text(text);
    let characters = collapsed.chars().count() as u64;
    let digest = soft_hash_text_v0(&collapsed, opts);
    let code = encode_component(MainType::Content, SubType::Text, VERSION_V0, bits, &digest)?;
    Ok(TextCode {
        iscc: format!("ISCC:{code}"),
        characters,
    })
}

/// 256-bit similarity hash over already-collapsed text.
pub fn soft_hash_text_v0(text: &str, opts: &CoreOptions) -> [u8; 32] {
    let text = text.to_lowercase();
    let features: Vec<u32> = sliding_windows(&text, opts.text_ngram_size)
        .iter()
        .map(|g| blake3_feature(g.as_bytes()))
        .collect();
    alg_minhash_256(&features).expect("at least one window")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_well_defined() {
        let r = gen_text_code_v0("", 64, &CoreOptions::DEFAULT).unwrap();
        assert_eq!(r.characters, 0);
        let again = gen_text_code_v0("", 64, &CoreOptions::DEFAULT).unwrap();
        assert_eq!(r, again);
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        let a = gen_text_code_v0("Hello  World", 64, &CoreOptions::DEFAULT).unwrap();
        let b = gen_text_code_v0("hello world", 64, &CoreOptions::DEFAULT).unwrap();
        assert_eq!(a.iscc, b.iscc);
    }
}
