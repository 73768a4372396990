//! Header framing, base32, length codes, and composition rules.

mod common;

use common::splitmix_bytes;
use iscc_core::{
    clean, compose, decode_base32, decompose, encode_base32, read_header, write_header, Code,
    IsccError, MainType, SubType,
};

// ─────────────────────────────────────────────────────────────────────────
// Headers
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn header_layouts() {
    // (maintype, subtype, version, length) → packed bytes
    assert_eq!(write_header(0, 0, 0, 1), vec![0x00, 0x01]);
    assert_eq!(write_header(2, 0, 0, 1), vec![0x20, 0x01]);
    assert_eq!(write_header(2, 0, 0, 3), vec![0x20, 0x03]);
    assert_eq!(write_header(3, 0, 0, 0), vec![0x30, 0x00]);
    assert_eq!(write_header(4, 0, 0, 7), vec![0x40, 0x07]);
}

#[test]
fn header_roundtrip_with_body() {
    let packed = write_header(2, 3, 0, 1);
    let mut data = packed.clone();
    data.extend_from_slice(&[0xAA; 8]);
    let (mt, st, vs, ln, body) = read_header(&data).unwrap();
    assert_eq!((mt, st, vs, ln), (2, 3, 0, 1));
    assert_eq!(body, &[0xAA; 8]);
}

#[test]
fn header_rejects_unsupported_version() {
    let data = write_header(0, 0, 1, 1);
    assert!(matches!(
        read_header(&data),
        Err(IsccError::HeaderMalformed(_))
    ));
}

#[test]
fn header_rejects_truncation() {
    assert!(read_header(&[]).is_err());
    // a continuation nibble with nothing after it
    assert!(read_header(&[0x08]).is_err());
}

#[test]
fn unknown_enums_are_typed_errors() {
    // maintype 7 does not exist
    let mut data = write_header(7, 0, 0, 1);
    data.extend_from_slice(&[0u8; 8]);
    assert!(matches!(
        Code::from_bytes(&data),
        Err(IsccError::UnknownMainType(7))
    ));

    // subtype 5 is invalid for a content code
    let mut data = write_header(2, 5, 0, 1);
    data.extend_from_slice(&[0u8; 8]);
    assert!(matches!(
        Code::from_bytes(&data),
        Err(IsccError::UnknownSubType { .. })
    ));
}

// ─────────────────────────────────────────────────────────────────────────
// Base32
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn base32_roundtrip() {
    for len in 0..64usize {
        let data = splitmix_bytes(len as u64 + 7, len);
        let encoded = encode_base32(&data);
        assert!(!encoded.contains('='));
        assert_eq!(decode_base32(&encoded).unwrap(), data);
    }
}

#[test]
fn base32_rejects_garbage() {
    assert!(matches!(
        decode_base32("not base32 !!"),
        Err(IsccError::InvalidBase32(_))
    ));
}

#[test]
fn clean_is_forgiving() {
    assert_eq!(clean("ISCC:AAAW-KLHF-XNSF-7NNE"), "AAAWKLHFXNSF7NNE");
    assert_eq!(clean("iscc:aaawklhfxnsf7nne"), "AAAWKLHFXNSF7NNE");
    assert_eq!(clean(" AAAW KLHF XNSF 7NNE "), "AAAWKLHFXNSF7NNE");
}

// ─────────────────────────────────────────────────────────────────────────
// Composition
// ─────────────────────────────────────────────────────────────────────────

fn units() -> Vec<Code> {
    [
        "ISCC:AAAWKLHFXNSF7NNE",
        "ISCC:EAA5SWQLLTKGA4SE",
        "ISCC:GAAT545VZLGJARBZ",
        "ISCC:IAA6S4OPEGNJCCMF",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect()
}

#[test]
fn compose_full_set() {
    let iscc = compose(&units()).unwrap();
    assert_eq!(
        iscc.uri(),
        "ISCC:KAGTAZJM4W5WIX5VUTMVUC242RQHERB66O24VTEQIQ46S4OPEGNJCCMF"
    );
    assert_eq!(iscc.maintype(), MainType::Iscc);
    assert_eq!(iscc.subtype(), SubType::Text);
    assert_eq!(iscc.length_bits(), 256);
    assert_eq!(iscc.type_id(), "ISCC-TEXT-V0-MCDI");
}

#[test]
fn compose_is_order_independent() {
    let mut shuffled = units();
    shuffled.reverse();
    assert_eq!(compose(&units()).unwrap(), compose(&shuffled).unwrap());
}

#[test]
fn compose_data_instance_only() {
    let di: Vec<Code> = units().into_iter().skip(2).collect();
    let iscc = compose(&di).unwrap();
    assert_eq!(iscc.uri(), "ISCC:KUEDAPXTWXFMZECEHHUXDTZBTKIQTBI");
    assert_eq!(iscc.subtype(), SubType::Sum);
    assert_eq!(iscc.length_bits(), 128);
}

#[test]
fn compose_truncates_long_units() {
    let mut set = units();
    // swap in a 256-bit instance unit; only its leading 64 bits survive
    set[3] = "ISCC:IAD6S4OPEGNJCCMFUWLFSWTY453NFFWVZGGTJHZMQSKKOOBBPTWB6NQ"
        .parse()
        .unwrap();
    let iscc = compose(&set).unwrap();
    assert_eq!(
        iscc.uri(),
        "ISCC:KAGTAZJM4W5WIX5VUTMVUC242RQHERB66O24VTEQIQ46S4OPEGNJCCMF"
    );
}

#[test]
fn compose_rejects_duplicates() {
    let mut set = units();
    set.push("ISCC:AAAWKLHFXM75OAMK".parse().unwrap());
    assert!(matches!(
        compose(&set),
        Err(IsccError::CompositionInvalid(_))
    ));
}

#[test]
fn compose_requires_data_or_instance() {
    let mi: Vec<Code> = units().into_iter().take(2).collect();
    assert!(matches!(
        compose(&mi),
        Err(IsccError::CompositionInvalid(_))
    ));
}

#[test]
fn compose_rejects_short_units() {
    let short: Code = Code::new(MainType::Data, SubType::None, 0, 0, vec![0u8; 4]).unwrap();
    assert!(compose(&[short]).is_err());
}

#[test]
fn compose_rejects_composites() {
    let iscc = compose(&units()).unwrap();
    let mut set = units();
    set.push(iscc);
    assert!(matches!(
        compose(&set),
        Err(IsccError::CompositionInvalid(_))
    ));
}

#[test]
fn decompose_inverts_compose() {
    let iscc = compose(&units()).unwrap();
    let parts = decompose(&iscc).unwrap();
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[0].uri(), "ISCC:AAAWKLHFXNSF7NNE");
    assert_eq!(parts[1].uri(), "ISCC:EAA5SWQLLTKGA4SE");
    assert_eq!(parts[2].uri(), "ISCC:GAAT545VZLGJARBZ");
    assert_eq!(parts[3].uri(), "ISCC:IAA6S4OPEGNJCCMF");
    // and composing the parts again is the identity
    assert_eq!(compose(&parts).unwrap(), iscc);
}

#[test]
fn decompose_rejects_units() {
    let unit: Code = "ISCC:AAAWKLHFXNSF7NNE".parse().unwrap();
    assert!(matches!(
        decompose(&unit),
        Err(IsccError::CompositionInvalid(_))
    ));
}
