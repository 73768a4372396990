//! The `Code` value object: one parsed ISCC unit or composite.
//!
//! A `Code` is an immutable pair of header tuple and body bytes with the
//! invariant that the header's declared length always matches the body.
//! It converts freely between the text, binary and multiformat
//! renderings.

use std::fmt;
use std::str::FromStr;

use base58::ToBase58;
use data_encoding::BASE64URL_NOPAD;
use num_bigint::BigUint;

use crate::codec::{
    clean, decode_base32, decode_length, decode_units, encode_base32, read_header, write_header,
    MainType, SubType, MC_PREFIX, VERSION_V0,
};
use crate::error::{IsccError, Result};

/// A parsed ISCC code (header tuple plus body digest).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    maintype: MainType,
    subtype: SubType,
    version: u32,
    length: u32,
    body: Vec<u8>,
}

impl Code {
    /// Build a code from its parts, enforcing the header/body invariants.
    ///
    /// `length` is the raw header length field: the bit-length code for
    /// unit types, the unit bitmap for composites.
    pub fn new(
        maintype: MainType,
        subtype: SubType,
        version: u32,
        length: u32,
        body: Vec<u8>,
    ) -> Result<Self> {
        if version != VERSION_V0 {
            return Err(IsccError::HeaderMalformed(format!(
                "unsupported version {version}"
            )));
        }
        // validates the subtype/maintype pairing
        subtype.code(maintype)?;
        let bits = decode_length(maintype, length)?;
        if body.len() * 8 != bits as usize {
            return Err(IsccError::InvalidInput(format!(
                "body is {} bits but header declares {}",
                body.len() * 8,
                bits
            )));
        }
        Ok(Code {
            maintype,
            subtype,
            version,
            length,
            body,
        })
    }

    /// Parse the binary form: header nibble stream followed by the body.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (mt, st, vs, ln, body) = read_header(data)?;
        let maintype = MainType::from_code(mt)?;
        let subtype = SubType::from_code(maintype, st)?;
        Code::new(maintype, subtype, vs, ln, body.to_vec())
    }

    // ── renderings ──────────────────────────────────────────────────────

    /// Raw bytes, header included.
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = write_header(
            self.maintype as u32,
            self.subtype.value(),
            self.version,
            self.length,
        );
        out.extend_from_slice(&self.body);
        out
    }

    /// Hex rendering of the raw bytes.
    pub fn hex(&self) -> String {
        hex::encode(self.bytes())
    }

    /// The raw bytes as a big-endian unsigned integer.
    pub fn uint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes())
    }

    /// Canonical base32 text, without the `ISCC:` prefix.
    pub fn code(&self) -> String {
        encode_base32(&self.bytes())
    }

    /// Canonical URI form: `ISCC:` followed by the base32 text.
    pub fn uri(&self) -> String {
        format!("ISCC:{}", self.code())
    }

    /// Binary form with the ISCC multicodec prefix.
    pub fn mc_bytes(&self) -> Vec<u8> {
        let mut out = MC_PREFIX.to_vec();
        out.extend_from_slice(&self.bytes());
        out
    }

    /// Multiformat base16 (`f` prefix).
    pub fn mf_base16(&self) -> String {
        format!("f{}", hex::encode(self.mc_bytes()))
    }

    /// Multiformat base32 (`b` prefix, lowercase).
    pub fn mf_base32(&self) -> String {
        format!("b{}", encode_base32(&self.mc_bytes()).to_lowercase())
    }

    /// Multiformat base58-btc (`z` prefix).
    pub fn mf_base58btc(&self) -> String {
        format!("z{}", self.mc_bytes().to_base58())
    }

    /// Multiformat base64url without padding (`u` prefix).
    pub fn mf_base64url(&self) -> String {
        format!("u{}", BASE64URL_NOPAD.encode(&self.mc_bytes()))
    }

    // ── structure ───────────────────────────────────────────────────────

    /// Main type of this code.
    pub fn maintype(&self) -> MainType {
        self.maintype
    }

    /// Sub type of this code.
    pub fn subtype(&self) -> SubType {
        self.subtype
    }

    /// Header version field.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Raw header length field (bit-length code or unit bitmap).
    pub fn length_code(&self) -> u32 {
        self.length
    }

    /// Body length in bits.
    pub fn length_bits(&self) -> u32 {
        (self.body.len() * 8) as u32
    }

    /// Body digest without the header.
    pub fn hash_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Hex rendering of the body digest.
    pub fn hash_hex(&self) -> String {
        hex::encode(&self.body)
    }

    /// Composite type identifier, e.g. `META-NONE-V0-64` or
    /// `ISCC-TEXT-V0-MCDI`.
    pub fn type_id(&self) -> String {
        let length = if self.maintype == MainType::Iscc {
            decode_units(self.length)
                .map(|units| {
                    units
                        .iter()
                        .map(|u| &u.name()[..1])
                        .collect::<String>()
                })
                .unwrap_or_else(|_| self.length.to_string())
        } else {
            self.length_bits().to_string()
        };
        format!(
            "{}-{}-V{}-{}",
            self.maintype.name(),
            self.subtype.name(),
            self.version,
            length
        )
    }

    /// Human-readable header and body rendering.
    pub fn explain(&self) -> String {
        format!("{}-{}", self.type_id(), self.hash_hex())
    }

    /// Hamming distance between the bodies of two codes.
    ///
    /// Defined only when both codes agree in main type, sub type and
    /// length.
    pub fn hamming_distance(&self, other: &Code) -> Result<u32> {
        if self.maintype != other.maintype
            || self.subtype != other.subtype
            || self.body.len() != other.body.len()
        {
            return Err(IsccError::InvalidInput(
                "hamming distance requires matching code types and lengths".into(),
            ));
        }
        Ok(self
            .body
            .iter()
            .zip(&other.body)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum())
    }
}

impl FromStr for Code {
    type Err = IsccError;

    /// Parse from text: accepts the `ISCC:` prefix, lowercase input, and
    /// interspersed hyphens or whitespace.
    fn from_str(s: &str) -> Result<Self> {
        Code::from_bytes(&decode_base32(&clean(s))?)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}
