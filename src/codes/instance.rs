//! Instance-Code: cryptographic identity of the exact byte stream.
//!
//! Unlike every other code this one has no similarity semantics — it is
//! the truncated blake3 digest of the input, with the full digest and the
//! byte count reported alongside.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::codec::{encode_component, MainType, SubType, VERSION_V0};
use crate::error::Result;
use crate::hashes::Blake3State;
use crate::options::CoreOptions;

/// Result of Instance-Code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceCode {
    /// The encoded Instance-Code with `ISCC:` prefix.
    pub iscc: String,
    /// Full 256-bit blake3 digest, lowercase hex.
    pub datahash: String,
    /// Stream length in bytes.
    pub filesize: u64,
}

/// Incremental Instance-Code hasher.
#[derive(Debug, Clone, Default)]
pub struct InstanceHasher {
    hasher: Blake3State,
    filesize: u64,
}

impl InstanceHasher {
    /// New empty hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next piece of the stream.
    pub fn push(&mut self, data: &[u8]) {
        self.hasher.update(data);
        self.filesize += data.len() as u64;
    }

    /// Finish and encode as an Instance-Code of `bits` length.
    pub fn finalize_code(&self, bits: u32) -> Result<InstanceCode> {
        let digest = *self.hasher.finalize().as_bytes();
        let code = encode_component(MainType::Instance, SubType::None, VERSION_V0, bits, &digest)?;
        log::debug!("instance hash over {} bytes", self.filesize);
        Ok(InstanceCode {
            iscc: format!("ISCC:{code}"),
            datahash: hex::encode(digest),
            filesize: self.filesize,
        })
    }
}

/// Create an Instance-Code with the latest standard algorithm.
pub fn gen_instance_code<R: Read>(stream: R, opts: &CoreOptions) -> Result<InstanceCode> {
    gen_instance_code_v0(stream, opts.instance_bits, opts)
}

/// Create an Instance-Code with algorithm v0, streaming the source in
/// `instance_read_size` reads.
pub fn gen_instance_code_v0<R: Read>(
    mut stream: R,
    bits: u32,
    opts: &CoreOptions,
) -> Result<InstanceCode> {
    let mut hasher = InstanceHasher::new();
    let mut buf = vec![0u8; opts.instance_read_size];
    loop {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.push(&buf[..n]);
    }
    hasher.finalize_code(bits)
}
