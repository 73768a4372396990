//! Header framing, base32 text form, and composition of unit codes into
//! a canonical ISCC.
//!
//! A code is a nibble-packed header `(main-type, sub-type, version,
//! length)` followed by the digest body. Header fields are variable-length
//! nibble integers: values below 8 occupy one nibble; larger values carry
//! 3 payload bits per nibble with the high bit as continuation flag,
//! least-significant group first.

use data_encoding::BASE32_NOPAD;

use crate::code::Code;
use crate::error::{IsccError, Result};

/// Version 0 — the only header version this engine reads or writes.
pub const VERSION_V0: u32 = 0;

/// Multicodec prefix identifying ISCC binary codes.
pub const MC_PREFIX: [u8; 2] = [0xCC, 0x01];

// ─────────────────────────────────────────────────────────────────────────
// Type enumerations
// ─────────────────────────────────────────────────────────────────────────

/// Main type of a code: which generator family produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MainType {
    /// Meta-Code — metadata similarity.
    Meta = 0,
    /// Semantic-Code — reserved for semantic units produced elsewhere.
    Semantic = 1,
    /// Content-Code — media-type specific content similarity.
    Content = 2,
    /// Data-Code — raw data similarity.
    Data = 3,
    /// Instance-Code — cryptographic identity.
    Instance = 4,
    /// Composite ISCC combining unit codes.
    Iscc = 5,
    /// Short identifier minted against a registry.
    Id = 6,
}

impl MainType {
    /// Decode a raw header field value.
    pub fn from_code(value: u32) -> Result<Self> {
        Ok(match value {
            0 => MainType::Meta,
            1 => MainType::Semantic,
            2 => MainType::Content,
            3 => MainType::Data,
            4 => MainType::Instance,
            5 => MainType::Iscc,
            6 => MainType::Id,
            other => return Err(IsccError::UnknownMainType(other)),
        })
    }

    /// Display name used by [`Code::type_id`](crate::code::Code::type_id).
    pub fn name(&self) -> &'static str {
        match self {
            MainType::Meta => "META",
            MainType::Semantic => "SEMANTIC",
            MainType::Content => "CONTENT",
            MainType::Data => "DATA",
            MainType::Instance => "INSTANCE",
            MainType::Iscc => "ISCC",
            MainType::Id => "ID",
        }
    }
}

/// Sub-type of a code. The raw header value of a subtype depends on the
/// main type: `NONE` is 0 for Meta/Data/Instance/Id codes, the content
/// modalities are 0–4 for Content codes, and composite ISCCs additionally
/// allow `SUM` (5) when they carry no content unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubType {
    /// No subtype distinction.
    None,
    /// Plain text content.
    Text,
    /// Image content.
    Image,
    /// Audio content.
    Audio,
    /// Video content.
    Video,
    /// Mixed media content.
    Mixed,
    /// Composite without a content or semantic unit.
    Sum,
}

impl SubType {
    /// Raw header field value of this subtype.
    pub fn value(&self) -> u32 {
        match self {
            SubType::None | SubType::Text => 0,
            SubType::Image => 1,
            SubType::Audio => 2,
            SubType::Video => 3,
            SubType::Mixed => 4,
            SubType::Sum => 5,
        }
    }

    /// Raw header field value of this subtype under `maintype`, checking
    /// that the pairing is legal.
    pub fn code(&self, maintype: MainType) -> Result<u32> {
        if !self.valid_for(maintype) {
            return Err(IsccError::UnknownSubType {
                maintype: maintype as u32,
                subtype: self.value(),
            });
        }
        Ok(self.value())
    }

    /// Decode a raw header field value under `maintype`.
    pub fn from_code(maintype: MainType, value: u32) -> Result<Self> {
        let subtype = match (maintype, value) {
            (MainType::Meta | MainType::Data | MainType::Instance | MainType::Id, 0) => {
                SubType::None
            }
            (MainType::Content | MainType::Semantic | MainType::Iscc, 0) => SubType::Text,
            (MainType::Content | MainType::Semantic | MainType::Iscc, 1) => SubType::Image,
            (MainType::Content | MainType::Semantic | MainType::Iscc, 2) => SubType::Audio,
            (MainType::Content | MainType::Semantic | MainType::Iscc, 3) => SubType::Video,
            (MainType::Content | MainType::Semantic | MainType::Iscc, 4) => SubType::Mixed,
            (MainType::Iscc, 5) => SubType::Sum,
            (mt, st) => {
                return Err(IsccError::UnknownSubType {
                    maintype: mt as u32,
                    subtype: st,
                })
            }
        };
        Ok(subtype)
    }

    fn valid_for(&self, maintype: MainType) -> bool {
        match maintype {
            MainType::Meta | MainType::Data | MainType::Instance | MainType::Id => {
                matches!(self, SubType::None)
            }
            MainType::Content | MainType::Semantic => !matches!(self, SubType::None | SubType::Sum),
            MainType::Iscc => !matches!(self, SubType::None),
        }
    }

    /// Display name used by [`Code::type_id`](crate::code::Code::type_id).
    pub fn name(&self) -> &'static str {
        match self {
            SubType::None => "NONE",
            SubType::Text => "TEXT",
            SubType::Image => "IMAGE",
            SubType::Audio => "AUDIO",
            SubType::Video => "VIDEO",
            SubType::Mixed => "MIXED",
            SubType::Sum => "SUM",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Nibble varints and header packing
// ─────────────────────────────────────────────────────────────────────────

fn write_varnibble(mut value: u32, nibbles: &mut Vec<u8>) {
    loop {
        if value < 8 {
            nibbles.push(value as u8);
            return;
        }
        nibbles.push(0x8 | (value & 0x7) as u8);
        value >>= 3;
    }
}

fn read_varnibble(nibbles: &[u8], pos: &mut usize) -> Result<u32> {
    let mut value: u32 = 0;
    let mut shift = 0;
    loop {
        let nib = *nibbles
            .get(*pos)
            .ok_or_else(|| IsccError::HeaderMalformed("truncated nibble stream".into()))?;
        *pos += 1;
        if nib < 8 {
            return Ok(value | ((nib as u32) << shift));
        }
        if shift >= 30 {
            return Err(IsccError::HeaderMalformed("oversized header field".into()));
        }
        value |= ((nib & 0x7) as u32) << shift;
        shift += 3;
    }
}

/// Pack the four raw header fields into bytes, two nibbles per byte, high
/// nibble first, zero-padded to a whole byte.
pub fn write_header(maintype: u32, subtype: u32, version: u32, length: u32) -> Vec<u8> {
    let mut nibbles = Vec::with_capacity(6);
    for field in [maintype, subtype, version, length] {
        write_varnibble(field, &mut nibbles);
    }
    if nibbles.len() % 2 == 1 {
        nibbles.push(0);
    }
    nibbles
        .chunks(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect()
}

/// Unpack a header, returning the raw fields and the body slice.
///
/// The version field must be 0.
pub fn read_header(data: &[u8]) -> Result<(u32, u32, u32, u32, &[u8])> {
    let mut nibbles = Vec::with_capacity(data.len() * 2);
    for byte in data {
        nibbles.push(byte >> 4);
        nibbles.push(byte & 0xF);
    }
    let mut pos = 0;
    let maintype = read_varnibble(&nibbles, &mut pos)?;
    let subtype = read_varnibble(&nibbles, &mut pos)?;
    let version = read_varnibble(&nibbles, &mut pos)?;
    let length = read_varnibble(&nibbles, &mut pos)?;
    if version != VERSION_V0 {
        return Err(IsccError::HeaderMalformed(format!(
            "unsupported version {version}"
        )));
    }
    let header_bytes = pos.div_ceil(2);
    Ok((maintype, subtype, version, length, &data[header_bytes..]))
}

// ─────────────────────────────────────────────────────────────────────────
// Length codes
// ─────────────────────────────────────────────────────────────────────────

/// Encode a bit length into the header length field.
///
/// Unit codes store `bits/32 − 1`; composite ISCCs store the unit
/// presence bitmap and must use [`encode_units`] instead.
pub fn encode_length(maintype: MainType, bits: u32) -> Result<u32> {
    if maintype == MainType::Iscc {
        return Err(IsccError::InvalidInput(
            "composite length is a unit bitmap, not a bit count".into(),
        ));
    }
    validate_bit_length(bits)?;
    Ok(bits / 32 - 1)
}

/// Decode the header length field into the body bit length.
pub fn decode_length(maintype: MainType, length: u32) -> Result<u32> {
    if maintype == MainType::Iscc {
        let units = decode_units(length)?;
        return Ok(64 * units.len() as u32);
    }
    if length > 7 {
        return Err(IsccError::HeaderMalformed(format!(
            "length code {length} out of range"
        )));
    }
    Ok(32 * (length + 1))
}

/// Check a requested bit length: multiple of 32 within `[32, 256]`.
pub fn validate_bit_length(bits: u32) -> Result<u32> {
    if bits % 32 != 0 || !(32..=256).contains(&bits) {
        return Err(IsccError::InvalidBitLength(bits));
    }
    Ok(bits)
}

const UNIT_ORDER: [MainType; 5] = [
    MainType::Meta,
    MainType::Semantic,
    MainType::Content,
    MainType::Data,
    MainType::Instance,
];

fn unit_bit(maintype: MainType) -> Option<u32> {
    match maintype {
        MainType::Meta => Some(1),
        MainType::Semantic => Some(2),
        MainType::Content => Some(4),
        MainType::Data => Some(8),
        MainType::Instance => Some(16),
        MainType::Iscc | MainType::Id => None,
    }
}

/// Encode the set of unit main types into the composite length bitmap.
pub fn encode_units(units: &[MainType]) -> Result<u32> {
    let mut bitmap = 0;
    for unit in units {
        bitmap |= unit_bit(*unit).ok_or_else(|| {
            IsccError::CompositionInvalid(format!("{} is not a unit type", unit.name()))
        })?;
    }
    Ok(bitmap)
}

/// Decode the composite length bitmap into unit main types, canonical
/// order.
pub fn decode_units(bitmap: u32) -> Result<Vec<MainType>> {
    if bitmap == 0 || bitmap > 31 {
        return Err(IsccError::HeaderMalformed(format!(
            "unit bitmap {bitmap} out of range"
        )));
    }
    Ok(UNIT_ORDER
        .iter()
        .copied()
        .filter(|unit| unit_bit(*unit).is_some_and(|bit| bitmap & bit != 0))
        .collect())
}

// ─────────────────────────────────────────────────────────────────────────
// Base32 text form
// ─────────────────────────────────────────────────────────────────────────

/// RFC 4648 base32, uppercase, no padding.
pub fn encode_base32(data: &[u8]) -> String {
    BASE32_NOPAD.encode(data)
}

/// Decode RFC 4648 base32 (canonical uppercase, no padding).
pub fn decode_base32(text: &str) -> Result<Vec<u8>> {
    BASE32_NOPAD
        .decode(text.as_bytes())
        .map_err(|_| IsccError::InvalidBase32(text.into()))
}

/// Normalize user-facing code text: strip an optional `ISCC:` prefix,
/// drop hyphens and whitespace, uppercase.
pub fn clean(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    let upper = stripped.to_uppercase();
    match upper.strip_prefix("ISCC:") {
        Some(rest) => rest.to_string(),
        None => upper,
    }
}

/// Encode one unit code: header ‖ truncated digest, as base32 text.
pub fn encode_component(
    maintype: MainType,
    subtype: SubType,
    version: u32,
    bit_length: u32,
    digest: &[u8],
) -> Result<String> {
    let length = encode_length(maintype, bit_length)?;
    let nbytes = (bit_length / 8) as usize;
    if digest.len() < nbytes {
        return Err(IsccError::InvalidBitLength(bit_length));
    }
    let header = write_header(maintype as u32, subtype.code(maintype)?, version, length);
    let mut packed = header;
    packed.extend_from_slice(&digest[..nbytes]);
    Ok(encode_base32(&packed))
}

// ─────────────────────────────────────────────────────────────────────────
// Composition
// ─────────────────────────────────────────────────────────────────────────

/// Combine unit codes into the canonical composite ISCC.
///
/// Accepts Meta, Semantic, Content, Data and Instance units, at most one
/// of each, each at least 64 bits long; a Data or Instance unit must be
/// present. The composite body concatenates the leading 64 bits of every
/// unit in canonical order.
pub fn compose(codes: &[Code]) -> Result<Code> {
    let mut units: Vec<&Code> = codes.iter().collect();
    units.sort_by_key(|c| c.maintype() as u32);

    let mut maintypes = Vec::with_capacity(units.len());
    for unit in &units {
        let mt = unit.maintype();
        if maintypes.contains(&mt) {
            return Err(IsccError::CompositionInvalid(format!(
                "duplicate {} unit",
                mt.name()
            )));
        }
        if unit.hash_bytes().len() < 8 {
            return Err(IsccError::CompositionInvalid(format!(
                "{} unit shorter than 64 bits",
                mt.name()
            )));
        }
        maintypes.push(mt);
    }
    if !maintypes.contains(&MainType::Data) && !maintypes.contains(&MainType::Instance) {
        return Err(IsccError::CompositionInvalid(
            "composite requires a Data or Instance unit".into(),
        ));
    }

    let bitmap = encode_units(&maintypes)?;
    let subtype = units
        .iter()
        .find(|u| u.maintype() == MainType::Content)
        .or_else(|| {
            units
                .iter()
                .find(|u| u.maintype() == MainType::Semantic)
        })
        .map(|u| u.subtype())
        .unwrap_or(SubType::Sum);

    let mut body = Vec::with_capacity(units.len() * 8);
    for unit in &units {
        body.extend_from_slice(&unit.hash_bytes()[..8]);
    }
    Code::new(MainType::Iscc, subtype, VERSION_V0, bitmap, body)
}

/// Split a composite ISCC back into its unit codes with reconstructed
/// headers and canonical 64-bit bodies.
pub fn decompose(iscc: &Code) -> Result<Vec<Code>> {
    if iscc.maintype() != MainType::Iscc {
        return Err(IsccError::CompositionInvalid(format!(
            "cannot decompose a {} code",
            iscc.maintype().name()
        )));
    }
    let units = decode_units(iscc.length_code())?;
    let body = iscc.hash_bytes();
    if body.len() != units.len() * 8 {
        return Err(IsccError::CompositionInvalid(
            "composite body length does not match unit bitmap".into(),
        ));
    }
    units
        .iter()
        .zip(body.chunks(8))
        .map(|(&maintype, chunk)| {
            let subtype = match maintype {
                MainType::Content | MainType::Semantic => iscc.subtype(),
                _ => SubType::None,
            };
            Code::new(maintype, subtype, VERSION_V0, 1, chunk.to_vec())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varnibble_roundtrip() {
        for value in [0u32, 1, 7, 8, 9, 24, 29, 31, 63, 64, 500] {
            let mut nibbles = Vec::new();
            write_varnibble(value, &mut nibbles);
            let mut pos = 0;
            assert_eq!(read_varnibble(&nibbles, &mut pos).unwrap(), value);
            assert_eq!(pos, nibbles.len());
        }
    }

    #[test]
    fn header_single_nibble_fields() {
        assert_eq!(write_header(4, 0, 0, 1), vec![0x40, 0x01]);
        assert_eq!(write_header(2, 0, 0, 3), vec![0x20, 0x03]);
    }

    #[test]
    fn header_continuation() {
        // bitmap 29 = 0b11101 → nibbles [8|5, 3], padded
        assert_eq!(write_header(5, 0, 0, 29), vec![0x50, 0x0D, 0x30]);
        let (mt, st, vs, ln, body) = read_header(&[0x50, 0x0D, 0x30]).unwrap();
        assert_eq!((mt, st, vs, ln), (5, 0, 0, 29));
        assert!(body.is_empty());
    }

    #[test]
    fn truncated_header_fails() {
        assert!(matches!(
            read_header(&[0x58]),
            Err(IsccError::HeaderMalformed(_))
        ));
    }
}
