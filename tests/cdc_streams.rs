//! Chunker behavior and the stream-driven generators: coverage
//! guarantees, pinned boundaries, incremental hashing and I/O error
//! propagation.

mod common;

use std::io::{self, Read};

use common::splitmix_bytes;
use iscc_core::{
    gen_data_code_v0, gen_instance_code_v0, Chunker, CoreOptions, DataHasher, InstanceHasher,
    IsccError, CDC_MAX_SIZE, CDC_MIN_SIZE,
};

const OPTS: CoreOptions = CoreOptions::DEFAULT;

// ─────────────────────────────────────────────────────────────────────────
// Chunker
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn pinned_chunk_boundaries() {
    let data = splitmix_bytes(0xD0, 10_000);
    let lengths: Vec<usize> = Chunker::new(&data, 1024).map(|c| c.length).collect();
    assert_eq!(lengths, vec![1700, 5702, 2202, 396]);
}

#[test]
fn pathological_stream_forces_max_splits() {
    let zeros = vec![0u8; 70_000];
    let lengths: Vec<usize> = Chunker::new(&zeros, 1024).map(|c| c.length).collect();
    assert_eq!(lengths, vec![CDC_MAX_SIZE, 70_000 - CDC_MAX_SIZE]);
}

#[test]
fn chunks_concatenate_to_source() {
    for len in [0usize, 1, 255, 256, 257, 5_000, 123_456] {
        let data = splitmix_bytes(len as u64, len);
        let mut pos = 0;
        let chunks: Vec<_> = Chunker::new(&data, 1024).collect();
        for chunk in &chunks {
            assert_eq!(chunk.offset, pos);
            pos += chunk.length;
        }
        assert_eq!(pos, len);
        // every chunk but the last within bounds
        for chunk in chunks.iter().rev().skip(1) {
            assert!(chunk.length >= CDC_MIN_SIZE);
            assert!(chunk.length <= CDC_MAX_SIZE);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Incremental hashers
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn data_hasher_is_split_invariant() {
    let data = splitmix_bytes(0xD0, 30_000);
    let expected = gen_data_code_v0(&data[..], 64, &OPTS).unwrap();
    for piece_len in [1usize, 100, 1024, 30_000] {
        let mut hasher = DataHasher::new(&OPTS);
        for piece in data.chunks(piece_len) {
            hasher.push(piece);
        }
        assert_eq!(hasher.finalize_code(64).unwrap(), expected, "pieces of {piece_len}");
    }
}

#[test]
fn data_code_respects_read_size() {
    // tiny read buffer exercises the tail carry logic
    let opts = CoreOptions {
        cdc_read_size: 1024,
        ..CoreOptions::DEFAULT
    };
    let data = splitmix_bytes(0xD0, 10_000);
    let r = gen_data_code_v0(&data[..], 64, &opts).unwrap();
    assert_eq!(r.iscc, "ISCC:GAAT545VZLGJARBZ");
}

#[test]
fn instance_hasher_matches_streaming() {
    let data = splitmix_bytes(0xD0, 10_000);
    let streamed = gen_instance_code_v0(&data[..], 256, &OPTS).unwrap();
    let mut hasher = InstanceHasher::new();
    for piece in data.chunks(997) {
        hasher.push(piece);
    }
    assert_eq!(hasher.finalize_code(256).unwrap(), streamed);
}

// ─────────────────────────────────────────────────────────────────────────
// I/O failure
// ─────────────────────────────────────────────────────────────────────────

/// A reader that yields some bytes, then fails.
struct FailingReader {
    remaining: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "source died"));
        }
        let n = self.remaining.min(buf.len()).min(512);
        buf[..n].fill(0x5A);
        self.remaining -= n;
        Ok(n)
    }
}

#[test]
fn data_code_propagates_io_errors() {
    let result = gen_data_code_v0(FailingReader { remaining: 4096 }, 64, &OPTS);
    assert!(matches!(result, Err(IsccError::IoError(_))));
}

#[test]
fn instance_code_propagates_io_errors() {
    let result = gen_instance_code_v0(FailingReader { remaining: 4096 }, 64, &OPTS);
    assert!(matches!(result, Err(IsccError::IoError(_))));
}
