//! # iscc-core
//!
//! Bit-level engine for the International Standard Content Code (ISCC):
//! similarity hashing kernels, the self-describing code envelope, and the
//! generators that turn normalized inputs into compact codes.
//!
//! An ISCC is composed from unit codes — Meta, Content (Text, Image,
//! Audio, Video, Mixed), Data and Instance — whose Hamming distance
//! correlates with metadata, perceptual or raw-data similarity, while the
//! Instance-Code is a plain cryptographic digest. Unit codes pack into a
//! nibble-framed binary envelope rendered as uppercase base32 behind the
//! `ISCC:` prefix.
//!
//! ```
//! use iscc_core::{gen_meta_code_v0, gen_text_code_v0, Description, CoreOptions};
//!
//! let opts = CoreOptions::DEFAULT;
//! let meta = gen_meta_code_v0("Hello", Some(Description::Text("World")), 64, &opts).unwrap();
//! assert_eq!(meta.iscc, "ISCC:AAAWKLHFXNSF7NNE");
//!
//! let text = gen_text_code_v0("Their most significant property …", 64, &opts).unwrap();
//! assert!(text.iscc.starts_with("ISCC:EAA"));
//! ```
//!
//! The engine is purely functional: identical inputs and configuration
//! yield identical bytes on every platform. The only I/O is the byte
//! source handed to the Data- and Instance-Code generators.

pub mod cdc;
pub mod code;
pub mod codec;
pub mod codes;
pub mod conformance;
pub mod dct;
pub mod error;
pub mod hashes;
pub mod minhash;
pub mod normalize;
pub mod options;
pub mod simhash;
pub mod utils;
pub mod wtahash;

pub use cdc::{cdc_offset, Chunk, Chunker, CDC_MAX_SIZE, CDC_MIN_SIZE};
pub use code::Code;
pub use codec::{
    clean, compose, decode_base32, decompose, encode_base32, encode_component, read_header,
    write_header, MainType, SubType,
};
pub use codes::{
    gen_audio_code, gen_audio_code_v0, gen_data_code, gen_data_code_v0, gen_image_code,
    gen_image_code_v0, gen_instance_code, gen_instance_code_v0, gen_meta_code, gen_meta_code_v0,
    gen_mixed_code, gen_mixed_code_v0, gen_text_code, gen_text_code_v0, gen_video_code,
    gen_video_code_v0, AudioCode, DataCode, DataHasher, Description, ImageCode, InstanceCode,
    InstanceHasher, MetaCode, MixedCode, TextCode, VideoCode,
};
pub use conformance::conformance_selftest;
pub use error::{IsccError, Result};
pub use minhash::{alg_minhash, alg_minhash_256, alg_minhash_64};
pub use normalize::{collapse_text, trim_text};
pub use options::CoreOptions;
pub use simhash::similarity_hash;
pub use wtahash::wtahash;
