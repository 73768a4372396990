//! Error taxonomy for the ISCC engine.
//!
//! Every fallible operation in this crate surfaces one of the variants
//! below. Input validation fails at the API boundary before any state is
//! built; decoding errors are recoverable by the caller but never guessed
//! around internally.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, IsccError>;

/// All error conditions surfaced by the ISCC engine.
#[derive(Debug, Error)]
pub enum IsccError {
    /// Header nibble stream is truncated, continuation nibbles are
    /// missing, or the version field is unsupported.
    #[error("malformed header: {0}")]
    HeaderMalformed(String),

    /// Input is not valid RFC 4648 base32.
    #[error("invalid base32 input: {0}")]
    InvalidBase32(String),

    /// The main-type field decodes to a value outside the enumerated set.
    #[error("unknown main type: {0}")]
    UnknownMainType(u32),

    /// The sub-type field is not valid for the decoded main-type.
    #[error("unknown subtype {subtype} for main type {maintype}")]
    UnknownSubType {
        /// Decoded main-type value.
        maintype: u32,
        /// Offending subtype value.
        subtype: u32,
    },

    /// Requested bit length is not a multiple of 32 in `[32, 256]`, or
    /// exceeds the digest produced by the generator.
    #[error("invalid bit length: {0}")]
    InvalidBitLength(u32),

    /// Unit codes cannot be combined into a composite ISCC.
    #[error("invalid composition: {0}")]
    CompositionInvalid(String),

    /// Input value fails a structural precondition (wrong arity, wrong
    /// type combination, incompatible codes).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The byte source failed mid-stream; partial generator state is
    /// discarded.
    #[error("i/o error")]
    IoError(#[from] std::io::Error),
}
