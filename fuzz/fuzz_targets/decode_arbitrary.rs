#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the binary decoder; Err results are
    // expected and fine, what we verify is the absence of panics.
    if let Ok(code) = iscc_core::Code::from_bytes(data) {
        // anything that decoded must re-encode to the same bytes
        assert_eq!(iscc_core::Code::from_bytes(&code.bytes()).unwrap(), code);
        let _ = code.uri();
        let _ = code.type_id();
        let _ = code.mf_base58btc();
    }

    // the text path must be equally panic-free
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(code) = text.parse::<iscc_core::Code>() {
            let _ = iscc_core::decompose(&code);
        }
    }
});
