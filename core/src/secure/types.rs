use std::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

use crate::basic::BasicCodecError;
use crate::config::SecureOptions;
use crate::crypto::{CipherError, EnvelopeError};

/// Password-keyed secure codec.
#[derive(Clone)]
pub struct SecureCodec {
    password: Zeroizing<String>,
    pub options: SecureOptions,
}

impl SecureCodec {
    pub fn new(password: impl Into<String>, options: SecureOptions) -> Self {
        Self { password: Zeroizing::new(password.into()), options }
    }

    pub fn with_password(password: impl Into<String>) -> Self {
        Self::new(password, SecureOptions::default())
    }

    #[inline]
    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Password present and options valid; runs before any input is read.
    pub(crate) fn check_ready(&self) -> Result<(), SecureEnvelopeError> {
        if self.password.is_empty() {
            return Err(SecureEnvelopeError::PasswordRequired);
        }
        self.options
            .validate()
            .map_err(|e| SecureEnvelopeError::InvalidOptions(e.to_string()))
    }
}

impl fmt::Debug for SecureCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureCodec")
            .field("password", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

/// Public error of the secure tiers. Decode failures are deliberately
/// indistinguishable from each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecureEnvelopeError {
    #[error("password is required")]
    PasswordRequired,

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("encoding failed: {0}")]
    EncodingFailed(String),

    #[error("decoding failed")]
    DecodingFailed,
}

/// Cause of a failed open, kept crate-internal.
#[derive(Debug, Error)]
pub(crate) enum OpenError {
    #[error("sequence: {0}")]
    Sequence(#[from] BasicCodecError),

    #[error("envelope: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error("cipher: {0}")]
    Cipher(#[from] CipherError),

    #[error("key share: {0}")]
    Share(String),
}

impl OpenError {
    /// Log the cause and collapse to the public error.
    pub(crate) fn collapse(self, tier: &'static str) -> SecureEnvelopeError {
        tracing::debug!(tier, cause = %self, "secure: decode failed");
        SecureEnvelopeError::DecodingFailed
    }
}
