//! Meta-Code: a similarity preserving hash over asset metadata.
//!
//! The name and the optional description are hashed separately; when both
//! are present their digests interleave so that either field alone can
//! still drive discovery of assets with similar or misspelled metadata.

use serde::{Deserialize, Serialize};

use crate::codec::{encode_component, MainType, SubType, VERSION_V0};
use crate::error::Result;
use crate::hashes::{blake3_digest, blake3_hex};
use crate::normalize::{collapse_text, trim_text};
use crate::options::CoreOptions;
use crate::simhash::similarity_hash;
use crate::utils::{interleave_quads, sliding_byte_windows, sliding_windows};

/// The optional disambiguating description: free text or raw bytes
/// (e.g. an extracted file header).
#[derive(Debug, Clone, Copy)]
pub enum Description<'a> {
    /// Textual metadata; normalized and trimmed before hashing.
    Text(&'a str),
    /// Binary metadata; truncated but otherwise hashed as-is.
    Bytes(&'a [u8]),
}

impl Description<'_> {
    fn is_empty(&self) -> bool {
        match self {
            Description::Text(t) => t.is_empty(),
            Description::Bytes(b) => b.is_empty(),
        }
    }
}

/// Result of Meta-Code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaCode {
    /// The encoded Meta-Code with `ISCC:` prefix.
    pub iscc: String,
    /// Normalized and trimmed name, when non-empty.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Normalized description (base64 when the input was binary).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Blake3 hex digest of the raw description bytes (or of the trimmed
    /// name when no description was given).
    pub metahash: String,
}

/// Create a Meta-Code with the latest standard algorithm.
pub fn gen_meta_code(
    name: &str,
    description: Option<Description<'_>>,
    opts: &CoreOptions,
) -> Result<MetaCode> {
    gen_meta_code_v0(name, description, opts.meta_bits, opts)
}

/// Create a Meta-Code with algorithm v0.
pub fn gen_meta_code_v0(
    name: &str,
    description: Option<Description<'_>>,
    bits: u32,
    opts: &CoreOptions,
) -> Result<MetaCode> {
    let name = trim_text(&collapse_text(name), opts.meta_trim_title).to_string();

    // normalized extra for hashing, raw payload for the metahash, and the
    // user-presentable rendering
    let (trimmed_text, trimmed_bytes, metahash_payload, description_out): (
        Option<String>,
        Option<Vec<u8>>,
        Vec<u8>,
        Option<String>,
    ) = match description {
        None | Some(Description::Text("")) => (None, None, name.as_bytes().to_vec(), None),
        Some(Description::Text(text)) => {
            let t = trim_text(&collapse_text(text), opts.meta_trim_extra).to_string();
            (
                Some(t.clone()),
                None,
                text.as_bytes().to_vec(),
                Some(t),
            )
        }
        Some(Description::Bytes(data)) => {
            let b = data[..data.len().min(opts.meta_trim_extra)].to_vec();
            let rendered = data_encoding::BASE64.encode(&b);
            (None, Some(b), data.to_vec(), Some(rendered))
        }
    };

    let extra = match (trimmed_text.as_deref(), trimmed_bytes.as_deref()) {
        (Some(t), _) => Some(Description::Text(t)),
        (_, Some(b)) => Some(Description::Bytes(b)),
        _ => None,
    };
    let digest = soft_hash_meta_v0(&name, extra, opts)?;
    let code = encode_component(MainType::Meta, SubType::None, VERSION_V0, bits, &digest)?;
    let metahash = blake3_hex(&metahash_payload);

    Ok(MetaCode {
        iscc: format!("ISCC:{code}"),
        name: (!name.is_empty()).then_some(name),
        description: description_out,
        metahash,
    })
}

/// 256-bit similarity hash over normalized metadata.
///
/// The name is lower-cased and hashed through character n-grams. A
/// non-empty extra hashes the same way (per byte when binary); the
/// leading 16 bytes of both digests then interleave in 4-byte chunks.
pub fn soft_hash_meta_v0(
    name: &str,
    extra: Option<Description<'_>>,
    opts: &CoreOptions,
) -> Result<[u8; 32]> {
    let name = name.to_lowercase();
    let digests: Vec<[u8; 32]> = sliding_windows(&name, opts.meta_ngram_size_title)
        .iter()
        .map(|g| blake3_digest(g.as_bytes()))
        .collect();
    let name_hash: [u8; 32] = similarity_hash(&digests)?.try_into().expect("32 bytes");

    let extra_digests: Vec<[u8; 32]> = match extra {
        None => return Ok(name_hash),
        Some(d) if d.is_empty() => return Ok(name_hash),
        Some(Description::Text(text)) => {
            let text = text.to_lowercase();
            sliding_windows(&text, opts.meta_ngram_size_extra_text)
                .iter()
                .map(|g| blake3_digest(g.as_bytes()))
                .collect()
        }
        Some(Description::Bytes(data)) => {
            sliding_byte_windows(data, opts.meta_ngram_size_extra_binary)
                .iter()
                .map(|g| blake3_digest(g))
                .collect()
        }
    };
    let extra_hash: [u8; 32] = similarity_hash(&extra_digests)?.try_into().expect("32 bytes");
    Ok(interleave_quads(&name_hash, &extra_hash))
}
