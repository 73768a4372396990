//! Engine tunables.
//!
//! All knobs are plain integers collected in [`CoreOptions`] and threaded
//! explicitly into the generators — there is no ambient global
//! configuration. The values below are the interoperable defaults; codes
//! produced with different settings are valid but will not match codes
//! produced elsewhere.

/// Tunable parameters for the code generators.
///
/// Structural constants that define the output format itself (gear table,
/// minhash permutations, WTA permutations, chunking masks) are fixed in
/// their kernel modules and intentionally not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreOptions {
    /// Default bit length of Meta-Codes.
    pub meta_bits: u32,
    /// Default bit length of Text-Codes.
    pub text_bits: u32,
    /// Default bit length of Image-Codes.
    pub image_bits: u32,
    /// Default bit length of Audio-Codes.
    pub audio_bits: u32,
    /// Default bit length of Video-Codes.
    pub video_bits: u32,
    /// Default bit length of Mixed-Codes.
    pub mixed_bits: u32,
    /// Default bit length of Data-Codes.
    pub data_bits: u32,
    /// Default bit length of Instance-Codes.
    pub instance_bits: u32,
    /// UTF-8 byte budget for the Meta-Code name after normalization.
    pub meta_trim_title: usize,
    /// UTF-8/byte budget for the Meta-Code description.
    pub meta_trim_extra: usize,
    /// Character n-gram width over the name.
    pub meta_ngram_size_title: usize,
    /// Character n-gram width over a textual description.
    pub meta_ngram_size_extra_text: usize,
    /// Byte n-gram width over a binary description.
    pub meta_ngram_size_extra_binary: usize,
    /// Character n-gram width for the Text-Code.
    pub text_ngram_size: usize,
    /// Target average chunk size for the Data-Code chunker.
    pub data_avg_chunk_size: usize,
    /// Read granularity of the chunker when driven from a stream.
    pub cdc_read_size: usize,
    /// Read granularity of the Instance-Code hasher.
    pub instance_read_size: usize,
}

impl CoreOptions {
    /// Interoperable default configuration.
    pub const DEFAULT: CoreOptions = CoreOptions {
        meta_bits: 64,
        text_bits: 64,
        image_bits: 64,
        audio_bits: 64,
        video_bits: 64,
        mixed_bits: 64,
        data_bits: 64,
        instance_bits: 64,
        meta_trim_title: 128,
        meta_trim_extra: 4096,
        meta_ngram_size_title: 3,
        meta_ngram_size_extra_text: 3,
        meta_ngram_size_extra_binary: 3,
        text_ngram_size: 13,
        data_avg_chunk_size: 1024,
        cdc_read_size: 262_144,
        instance_read_size: 262_144,
    };
}

impl Default for CoreOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
