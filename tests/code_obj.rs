//! The `Code` value object: constructors, renderings, multiformats,
//! structural accessors and Hamming distance.

mod common;

use iscc_core::{Code, IsccError, MainType, SubType};
use std::str::FromStr;

const META: &str = "ISCC:AAAWKLHFXNSF7NNE";

#[test]
fn constructors_agree() {
    let from_text = Code::from_str(META).unwrap();
    let from_bytes = Code::from_bytes(&hex::decode("0001652ce5bb645fb5a4").unwrap()).unwrap();
    let from_parts = Code::new(
        MainType::Meta,
        SubType::None,
        0,
        1,
        hex::decode("652ce5bb645fb5a4").unwrap(),
    )
    .unwrap();
    assert_eq!(from_text, from_bytes);
    assert_eq!(from_text, from_parts);
    let copy = from_text.clone();
    assert_eq!(copy, from_text);
}

#[test]
fn renderings() {
    let code: Code = META.parse().unwrap();
    assert_eq!(code.to_string(), "AAAWKLHFXNSF7NNE");
    assert_eq!(code.uri(), "ISCC:AAAWKLHFXNSF7NNE");
    assert_eq!(code.hex(), "0001652ce5bb645fb5a4");
    assert_eq!(code.hash_hex(), "652ce5bb645fb5a4");
    assert_eq!(code.uint().to_string(), "25737198563521181092");
    assert_eq!(code.bytes(), hex::decode("0001652ce5bb645fb5a4").unwrap());
}

#[test]
fn multiformats() {
    let code: Code = META.parse().unwrap();
    assert_eq!(hex::encode(code.mc_bytes()), "cc010001652ce5bb645fb5a4");
    assert_eq!(code.mf_base16(), "fcc010001652ce5bb645fb5a4");
    assert_eq!(code.mf_base32(), "bzqaqaalffts3wzc7wwsa");
    assert_eq!(code.mf_base58btc(), "z4rHVQUfAWZn2KkFc7");
    assert_eq!(code.mf_base64url(), "uzAEAAWUs5btkX7Wk");
}

#[test]
fn structural_accessors() {
    let code: Code = META.parse().unwrap();
    assert_eq!(code.maintype(), MainType::Meta);
    assert_eq!(code.subtype(), SubType::None);
    assert_eq!(code.version(), 0);
    assert_eq!(code.length_bits(), 64);
    assert_eq!(code.length_code(), 1);
    assert_eq!(code.type_id(), "META-NONE-V0-64");
    assert_eq!(code.explain(), "META-NONE-V0-64-652ce5bb645fb5a4");
}

#[test]
fn new_rejects_mismatched_length() {
    // header says 64 bits, body has 32
    assert!(Code::new(MainType::Meta, SubType::None, 0, 1, vec![0u8; 4]).is_err());
}

#[test]
fn new_rejects_invalid_pairings() {
    assert!(Code::new(MainType::Meta, SubType::Audio, 0, 1, vec![0u8; 8]).is_err());
    assert!(Code::new(MainType::Content, SubType::None, 0, 1, vec![0u8; 8]).is_err());
    assert!(Code::new(MainType::Meta, SubType::None, 3, 1, vec![0u8; 8]).is_err());
}

#[test]
fn hamming_distance() {
    let a: Code = "ISCC:EAARHV2U6PNK7WFX".parse().unwrap();
    let b: Code = "ISCC:EABRHV2U6PNKXWFXIEEYQLOQPICX6".parse().unwrap();
    // equal types but different lengths are incomparable
    assert!(matches!(
        a.hamming_distance(&b),
        Err(IsccError::InvalidInput(_))
    ));
    assert_eq!(a.hamming_distance(&a).unwrap(), 0);

    let c = Code::new(
        MainType::Content,
        SubType::Text,
        0,
        1,
        vec![0x13, 0xD7, 0x54, 0xF3, 0xDA, 0xAF, 0xD8, 0xB0],
    )
    .unwrap();
    // body of `a` is 13d754f3daafd8b7
    assert_eq!(a.hamming_distance(&c).unwrap(), 3);
}

#[test]
fn parse_rejects_bad_input() {
    assert!(Code::from_str("ISCC:!!!").is_err());
    assert!(Code::from_str("").is_err());
}
