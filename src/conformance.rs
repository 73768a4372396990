//! Built-in conformance self-test.
//!
//! The embedded vectors pin the output of every generator and of the
//! composition rules. An implementation change that alters any produced
//! bit fails the self-test, which is cheap enough to run at application
//! start-up.

use crate::code::Code;
use crate::codec::compose;
use crate::codes::{
    gen_data_code_v0, gen_instance_code_v0, gen_meta_code_v0, gen_text_code_v0, Description,
};
use crate::options::CoreOptions;

const TEXT_A: &str = "\n    Their most significant and usefull property of similarity-preserving\n    fingerprints gets lost in the fragmentation of individual, propietary and\n    use case specific implementations. The real benefit lies in similarity\n    preservation beyond your local data archive on a global scale accross\n    vendors.\n";

/// Deterministic pseudo-random stream used by the data vectors.
fn test_stream(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed;
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        out.extend_from_slice(&z.to_le_bytes());
    }
    out.truncate(len);
    out
}

fn check(label: &str, ok: bool, failures: &mut u32) {
    if !ok {
        log::error!("conformance failure: {label}");
        *failures += 1;
    }
}

/// Run all embedded conformance vectors; returns true when every vector
/// reproduces exactly.
pub fn conformance_selftest() -> bool {
    selftest().unwrap_or(false)
}

fn selftest() -> crate::error::Result<bool> {
    let opts = CoreOptions::DEFAULT;
    let mut failures = 0;

    let r = gen_instance_code_v0(&b""[..], 64, &opts)?;
    check(
        "instance-empty",
        r.iscc == "ISCC:IAA26E2JXH27TING"
            && r.datahash == "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
            && r.filesize == 0,
        &mut failures,
    );
    let r = gen_instance_code_v0(&[0u8][..], 64, &opts)?;
    check(
        "instance-zero",
        r.iscc == "ISCC:IAAS2OW637YRWYPR"
            && r.datahash == "2d3adedff11b61f14c886e35afa036736dcd87a74d27b5c1510225d0f592e213"
            && r.filesize == 1,
        &mut failures,
    );
    let r = gen_instance_code_v0(&b"hello world"[..], 128, &opts)?;
    check(
        "instance-hello-world",
        r.iscc == "ISCC:IAB5OSMB56TQUDEIBOGYYGMF2B25W" && r.filesize == 11,
        &mut failures,
    );

    let r = gen_meta_code_v0("Hello", Some(Description::Text("World")), 64, &opts)?;
    check(
        "meta-hello-world",
        r.iscc == "ISCC:AAAWKLHFXNSF7NNE"
            && r.metahash == "bf73d18575a736e4037d45f9e316085b86c19be6363de6aa789e13deaacc1c4e",
        &mut failures,
    );

    let r = gen_text_code_v0(TEXT_A, 64, &opts)?;
    check(
        "text-a",
        r.iscc == "ISCC:EAARHV2U6PNK7WFX" && r.characters == 291,
        &mut failures,
    );
    let r = gen_text_code_v0("", 64, &opts)?;
    check(
        "text-empty",
        r.iscc == "ISCC:EAASL4F2WZY7KBXB" && r.characters == 0,
        &mut failures,
    );

    let stream = test_stream(0xD0, 10_000);
    let r = gen_data_code_v0(&stream[..], 64, &opts)?;
    check("data-stream", r.iscc == "ISCC:GAAT545VZLGJARBZ", &mut failures);
    let r = gen_instance_code_v0(&stream[..], 64, &opts)?;
    check(
        "instance-stream",
        r.iscc == "ISCC:IAA6S4OPEGNJCCMF",
        &mut failures,
    );

    let units: Vec<Code> = [
        "ISCC:AAAWKLHFXNSF7NNE",
        "ISCC:EAA5SWQLLTKGA4SE",
        "ISCC:GAAT545VZLGJARBZ",
        "ISCC:IAA6S4OPEGNJCCMF",
    ]
    .iter()
    .map(|s| s.parse())
    .collect::<crate::error::Result<_>>()?;
    let composite = compose(&units)?;
    check(
        "compose",
        composite.uri() == "ISCC:KAGTAZJM4W5WIX5VUTMVUC242RQHERB66O24VTEQIQ46S4OPEGNJCCMF",
        &mut failures,
    );

    Ok(failures == 0)
}
