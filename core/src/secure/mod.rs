//! secure/mod.rs
//! Password and split-key envelopes carried as framed basic sequences.
//!
//! Encode: plaintext -> AES-256-CBC -> envelope -> base64 -> basic codec ->
//! markers. Decode reverses it. Every decode-side failure surfaces as the
//! same opaque `DecodingFailed`; the cause is logged at debug level.

pub mod types;
pub mod encode;
pub mod decode;
pub mod split_key;
pub mod batch;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use split_key::*;
