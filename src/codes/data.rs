//! Data-Code: raw data similarity via content-defined chunking.
//!
//! The stream is chunked with the gear chunker, every chunk contributes a
//! 32-bit blake3-derived feature, and the minhash sketch folds the
//! feature set into the code body. Insertions or edits disturb only the
//! chunks they touch, so codes of largely identical files stay close.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::cdc::cdc_offset;
use crate::codec::{encode_component, validate_bit_length, MainType, SubType, VERSION_V0};
use crate::error::{IsccError, Result};
use crate::hashes::blake3_feature;
use crate::minhash::alg_minhash_64;
use crate::options::CoreOptions;

/// Result of Data-Code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCode {
    /// The encoded Data-Code with `ISCC:` prefix.
    pub iscc: String,
}

/// Incremental Data-Code hasher.
///
/// Feed arbitrary slices with [`push`](DataHasher::push); the unfinished
/// trailing chunk is carried between calls because its boundary may still
/// move when more data arrives. [`finalize`](DataHasher::finalize)
/// flushes that tail — an empty stream contributes one empty chunk, so
/// the code of zero bytes is well defined.
#[derive(Debug, Clone)]
pub struct DataHasher {
    features: Vec<u32>,
    tail: Vec<u8>,
    avg_chunk_size: usize,
}

impl DataHasher {
    /// New hasher using the chunking parameters in `opts`.
    pub fn new(opts: &CoreOptions) -> Self {
        DataHasher {
            features: Vec::new(),
            tail: Vec::new(),
            avg_chunk_size: opts.data_avg_chunk_size,
        }
    }

    /// Consume the next piece of the stream.
    pub fn push(&mut self, data: &[u8]) {
        self.tail.extend_from_slice(data);
        let mut pos = 0;
        loop {
            let length = cdc_offset(&self.tail[pos..], self.avg_chunk_size);
            if pos + length == self.tail.len() {
                break;
            }
            self.features.push(blake3_feature(&self.tail[pos..pos + length]));
            pos += length;
        }
        self.tail.drain(..pos);
    }

    /// Flush the trailing chunk and produce the 64-bit data digest.
    pub fn finalize(mut self) -> [u8; 8] {
        self.features.push(blake3_feature(&self.tail));
        log::debug!("data hash over {} chunks", self.features.len());
        alg_minhash_64(&self.features).expect("at least one feature")
    }

    /// Flush and encode as a Data-Code of `bits` length.
    pub fn finalize_code(self, bits: u32) -> Result<DataCode> {
        if validate_bit_length(bits)? > 64 {
            return Err(IsccError::InvalidBitLength(bits));
        }
        let digest = self.finalize();
        let code = encode_component(MainType::Data, SubType::None, VERSION_V0, bits, &digest)?;
        Ok(DataCode {
            iscc: format!("ISCC:{code}"),
        })
    }
}

/// Create a Data-Code with the latest standard algorithm.
pub fn gen_data_code<R: Read>(stream: R, opts: &CoreOptions) -> Result<DataCode> {
    gen_data_code_v0(stream, opts.data_bits, opts)
}

/// Create a Data-Code with algorithm v0, streaming the source in
/// `cdc_read_size` reads.
pub fn gen_data_code_v0<R: Read>(mut stream: R, bits: u32, opts: &CoreOptions) -> Result<DataCode> {
    let mut hasher = DataHasher::new(opts);
    let mut buf = vec![0u8; opts.cdc_read_size];
    loop {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.push(&buf[..n]);
    }
    hasher.finalize_code(bits)
}
