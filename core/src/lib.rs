//! dna-codec-core
//!
//! Pure Rust bytes <-> {A,T,C,G} codecs.
//! No I/O, no FFI.
//!
//! Tiers:
//! - `basic`: 2 bits per symbol.
//! - `nanopore`: parity, repetition coding, constraint repair, framing.
//! - `secure`: PBKDF2 + AES-256-CBC envelope over the basic tier, plus the
//!   split-key variant.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;
pub mod alphabet;

// Codec tiers
pub mod basic;
pub mod framing;
pub mod nanopore;
pub mod crypto;
pub mod secure;

// Cross-tier
pub mod codec;
pub mod stats;
pub mod workers;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::alphabet::Nucleotide;
    pub use crate::basic::{BasicCodec, BasicCodecError};
    pub use crate::codec::{EncodingMode, SequenceCodec};
    pub use crate::config::{CodecConfig, DecodeMode, NanoporeOptions, SecureOptions};
    pub use crate::crypto::{assess_password, generate_secure_password, security_info, PasswordReport};
    pub use crate::nanopore::{NanoporeCodec, NanoporeCodecError, NanoporeEncoding};
    pub use crate::secure::{
        decode_with_split_keys, encode_with_split_keys, secure_decode, secure_encode, SecureCodec,
        SecureEnvelopeError, SplitKeyEncoding,
    };
    pub use crate::stats::{NanoporeStats, SequenceStatistics};
    pub use crate::types::DnaCodecError;
    pub use crate::workers::{run_batch, WorkerProfile};
}
