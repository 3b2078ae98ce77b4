//! codec.rs
//! Common interface over the codec tiers and the mode selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::basic::BasicCodec;
use crate::config::CodecConfig;
use crate::nanopore::NanoporeCodec;
use crate::secure::SecureCodec;
use crate::types::DnaCodecError;

/// Core trait for sequence codecs: bytes <-> symbol sequence.
pub trait SequenceCodec {
    fn encode(&self, data: &[u8]) -> Result<String, DnaCodecError>;
    fn decode(&self, sequence: &str) -> Result<Vec<u8>, DnaCodecError>;
}

impl SequenceCodec for BasicCodec {
    fn encode(&self, data: &[u8]) -> Result<String, DnaCodecError> {
        Ok(crate::basic::encode(data))
    }

    fn decode(&self, sequence: &str) -> Result<Vec<u8>, DnaCodecError> {
        Ok(self.decode_sequence(sequence)?)
    }
}

impl SequenceCodec for NanoporeCodec {
    fn encode(&self, data: &[u8]) -> Result<String, DnaCodecError> {
        Ok(self.encode_sequence(data)?)
    }

    fn decode(&self, sequence: &str) -> Result<Vec<u8>, DnaCodecError> {
        Ok(self.decode_sequence(sequence)?)
    }
}

impl SequenceCodec for SecureCodec {
    fn encode(&self, data: &[u8]) -> Result<String, DnaCodecError> {
        Ok(self.encode_sequence(data)?)
    }

    fn decode(&self, sequence: &str) -> Result<Vec<u8>, DnaCodecError> {
        Ok(self.decode_sequence(sequence)?)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    Basic,
    Nanopore,
    Secure,
    SplitKey,
}

impl EncodingMode {
    pub const ALL: [EncodingMode; 4] =
        [EncodingMode::Basic, EncodingMode::Nanopore, EncodingMode::Secure, EncodingMode::SplitKey];

    pub const fn as_str(self) -> &'static str {
        match self {
            EncodingMode::Basic => "basic",
            EncodingMode::Nanopore => "nanopore",
            EncodingMode::Secure => "secure",
            EncodingMode::SplitKey => "splitkey",
        }
    }

    /// Build a codec for this mode. `password` is only read by `Secure`;
    /// `SplitKey` needs its key shares and is reached through
    /// `secure::encode_with_split_keys` instead.
    pub fn codec(
        self,
        config: &CodecConfig,
        password: Option<&str>,
    ) -> Result<Box<dyn SequenceCodec + Send + Sync>, DnaCodecError> {
        config.validate()?;
        match self {
            EncodingMode::Basic => Ok(Box::new(BasicCodec::new(config.basic_mode))),
            EncodingMode::Nanopore => Ok(Box::new(NanoporeCodec::new(config.nanopore))),
            EncodingMode::Secure => {
                Ok(Box::new(SecureCodec::new(password.unwrap_or_default(), config.secure)))
            }
            EncodingMode::SplitKey => Err(DnaCodecError::UnsupportedMode(self)),
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown encoding mode {0:?}")]
pub struct ParseModeError(pub String);

impl FromStr for EncodingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        EncodingMode::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
