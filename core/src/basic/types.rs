use thiserror::Error;

use crate::config::DecodeMode;

/// Basic codec handle. Only carries the decode policy; encoding is pure.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BasicCodec {
    pub mode: DecodeMode,
}

impl BasicCodec {
    pub const fn new(mode: DecodeMode) -> Self {
        Self { mode }
    }

    pub const fn strict() -> Self {
        Self { mode: DecodeMode::Strict }
    }
}

/// Raised only in strict mode; lenient decoding never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasicCodecError {
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("{bits} trailing bits do not form a whole byte")]
    TrailingBits { bits: usize },
}
