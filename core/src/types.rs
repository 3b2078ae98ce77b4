use thiserror::Error;

use crate::basic::BasicCodecError;
use crate::config::ConfigError;
use crate::nanopore::NanoporeCodecError;
use crate::secure::SecureEnvelopeError;

/// Unified codec error covering every tier and configuration.
/// - `From<T>` impls enable `?` across tiers.
/// - Secure-tier messages never include password or key material.
#[derive(Debug, Error)]
pub enum DnaCodecError {
    #[error("basic codec error: {0}")]
    Basic(#[from] BasicCodecError),

    #[error("nanopore codec error: {0}")]
    Nanopore(#[from] NanoporeCodecError),

    #[error("secure codec error: {0}")]
    Secure(#[from] SecureEnvelopeError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Encoding mode that needs inputs `SequenceCodec` cannot carry.
    #[error("mode {0} is not available through this interface")]
    UnsupportedMode(crate::codec::EncodingMode),
}
