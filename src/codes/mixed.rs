//! Mixed-Content-Code: one similarity code over several content codes.
//!
//! For assets combining media types, the bodies of the per-modality
//! Content-Codes fold into a single digest through the bitwise majority
//! vote, preserving partial matches against any constituent.

use serde::{Deserialize, Serialize};

use crate::code::Code;
use crate::codec::{encode_component, MainType, SubType, VERSION_V0};
use crate::error::{IsccError, Result};
use crate::options::CoreOptions;
use crate::simhash::similarity_hash;

/// Result of Mixed-Code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedCode {
    /// The encoded Mixed-Code with `ISCC:` prefix.
    pub iscc: String,
    /// The constituent content codes, canonical text form.
    pub parts: Vec<String>,
}

/// Create a Mixed-Code with the latest standard algorithm.
pub fn gen_mixed_code(codes: &[Code], opts: &CoreOptions) -> Result<MixedCode> {
    gen_mixed_code_v0(codes, opts.mixed_bits)
}

/// Create a Mixed-Code with algorithm v0.
pub fn gen_mixed_code_v0(codes: &[Code], bits: u32) -> Result<MixedCode> {
    let digest = soft_hash_codes_v0(codes, bits)?;
    let code = encode_component(MainType::Content, SubType::Mixed, VERSION_V0, bits, &digest)?;
    Ok(MixedCode {
        iscc: format!("ISCC:{code}"),
        parts: codes.iter().map(|c| c.uri()).collect(),
    })
}

/// Fold the bodies of at least two Content-Codes of equal length into one
/// digest of that same length.
pub fn soft_hash_codes_v0(codes: &[Code], bits: u32) -> Result<Vec<u8>> {
    if codes.len() < 2 {
        return Err(IsccError::InvalidInput(
            "mixed code requires at least two content codes".into(),
        ));
    }
    let expected = codes[0].length_bits();
    for code in codes {
        if code.maintype() != MainType::Content {
            return Err(IsccError::InvalidInput(format!(
                "mixed code input must be content codes, got {}",
                code.maintype().name()
            )));
        }
        if code.length_bits() != expected {
            return Err(IsccError::InvalidInput(
                "mixed code inputs must have equal lengths".into(),
            ));
        }
    }
    if bits > expected {
        return Err(IsccError::InvalidBitLength(bits));
    }
    let bodies: Vec<&[u8]> = codes.iter().map(|c| c.hash_bytes()).collect();
    similarity_hash(&bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::text::gen_text_code_v0;
    use crate::options::CoreOptions;

    fn text_code(text: &str) -> Code {
        gen_text_code_v0(text, 64, &CoreOptions::DEFAULT)
            .unwrap()
            .iscc
            .parse()
            .unwrap()
    }

    #[test]
    fn requires_two_codes() {
        assert!(gen_mixed_code_v0(&[text_code("one")], 64).is_err());
    }

    #[test]
    fn rejects_non_content_units() {
        let data: Code = "ISCC:IAA26E2JXH27TING".parse().unwrap();
        assert!(gen_mixed_code_v0(&[text_code("one"), data], 64).is_err());
    }

    #[test]
    fn order_matters_not_for_two_equal_sets() {
        let a = gen_mixed_code_v0(&[text_code("one"), text_code("two")], 64).unwrap();
        let b = gen_mixed_code_v0(&[text_code("two"), text_code("one")], 64).unwrap();
        assert_eq!(a.iscc, b.iscc);
    }
}
