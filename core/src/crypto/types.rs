// ## 📂 File: `src/crypto/types.rs`

use thiserror::Error;

pub use crate::constants::secure::{IV_SIZE, KEY_SIZE, SALT_SIZE};

/// AES-256 key material.
pub type Key32 = [u8; KEY_SIZE];

/// Parse/serialize failures of the length-prefixed envelope.
///
/// Internal: the secure codec collapses these into a single opaque decode
/// failure before they reach callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("envelope truncated reading {field}: need {needed} bytes, have {available}")]
    Truncated { field: &'static str, needed: usize, available: usize },

    #[error("{field} length {actual} invalid, expected {expected}")]
    InvalidLength { field: &'static str, expected: usize, actual: usize },

    #[error("{field} of {len} bytes does not fit its length prefix")]
    FieldTooLong { field: &'static str, len: usize },

    #[error("{extra} trailing bytes after ciphertext")]
    TrailingBytes { extra: usize },

    #[error("base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Block cipher failures. Messages never carry key or IV bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("invalid key or iv length")]
    InvalidKeyIv,

    #[error("ciphertext length {0} is not a positive multiple of the block size")]
    NotBlockAligned(usize),

    #[error("padding check failed")]
    Unpad,
}
