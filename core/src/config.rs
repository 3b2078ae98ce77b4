//! config.rs
//! Runtime options for the codec tiers.
//!
//! Defaults reproduce the interoperable behaviour: lenient decoding, error
//! correction on, 100k PBKDF2 iterations. Every struct deserializes with
//! missing fields filled from `Default`, so a partial JSON document is valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::secure::PBKDF2_ITERATIONS;
use crate::workers::WorkerProfile;

/// How decoders treat malformed input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Drop unknown symbols/triplets and parity failures silently.
    #[default]
    Lenient,
    /// Fail fast on the first malformed unit.
    Strict,
}

impl DecodeMode {
    #[inline]
    pub const fn is_strict(self) -> bool {
        matches!(self, DecodeMode::Strict)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NanoporeOptions {
    pub use_error_correction: bool,
    pub mode: DecodeMode,
}

impl Default for NanoporeOptions {
    fn default() -> Self {
        Self {
            use_error_correction: true,
            mode: DecodeMode::Lenient,
        }
    }
}

impl NanoporeOptions {
    pub fn new(use_error_correction: bool) -> Self {
        Self { use_error_correction, ..Default::default() }
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecureOptions {
    /// Accepted for symmetry with the nanopore tier; framing is unaffected.
    pub use_error_correction: bool,
    /// PBKDF2 rounds. Anything other than the default breaks interop.
    pub kdf_iterations: u32,
    /// Applied to the inner basic decode.
    pub mode: DecodeMode,
}

impl Default for SecureOptions {
    fn default() -> Self {
        Self {
            use_error_correction: true,
            kdf_iterations: PBKDF2_ITERATIONS,
            mode: DecodeMode::Lenient,
        }
    }
}

impl SecureOptions {
    pub fn new(use_error_correction: bool) -> Self {
        Self { use_error_correction, ..Default::default() }
    }

    pub fn with_kdf_iterations(mut self, iterations: u32) -> Self {
        self.kdf_iterations = iterations;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kdf_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}

/// Top-level configuration document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Decode policy of the basic tier.
    pub basic_mode: DecodeMode,
    pub nanopore: NanoporeOptions,
    pub secure: SecureOptions,
    /// Batch worker threads; `None` sizes the pool from the CPU count.
    pub worker_count: Option<usize>,
}

impl CodecConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: CodecConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn worker_profile(&self) -> WorkerProfile {
        WorkerProfile::from_count(self.worker_count)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.secure.validate()?;
        if self.worker_count == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("kdf_iterations must be at least 1")]
    ZeroIterations,

    #[error("worker_count must be at least 1")]
    ZeroWorkers,
}
