#![no_main]
use libfuzzer_sys::fuzz_target;

use iscc_core::{Chunker, CDC_MAX_SIZE};

fuzz_target!(|data: &[u8]| {
    // Chunk boundaries must always tile the input exactly.
    let mut pos = 0;
    for chunk in Chunker::new(data, 1024) {
        assert_eq!(chunk.offset, pos);
        assert!(chunk.length > 0);
        assert!(chunk.length <= CDC_MAX_SIZE);
        pos += chunk.length;
    }
    assert_eq!(pos, data.len());
});
