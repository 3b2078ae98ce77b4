use crate::alphabet::Nucleotide;
use crate::basic::types::{BasicCodec, BasicCodecError};
use crate::config::DecodeMode;

const SYMBOLS_PER_BYTE: usize = 4;

/// Lenient decode: unknown symbols are skipped and an incomplete trailing
/// byte is discarded. Never fails.
pub fn decode(sequence: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(sequence.len() / SYMBOLS_PER_BYTE);
    let mut acc = 0u8;
    let mut pending = 0usize;

    for n in sequence.bytes().filter_map(Nucleotide::from_ascii) {
        acc = (acc << 2) | n.bits();
        pending += 1;
        if pending == SYMBOLS_PER_BYTE {
            out.push(acc);
            acc = 0;
            pending = 0;
        }
    }
    out
}

/// Strict decode: the first unknown symbol or a partial trailing byte fails.
pub fn decode_strict(sequence: &str) -> Result<Vec<u8>, BasicCodecError> {
    let mut out = Vec::with_capacity(sequence.len() / SYMBOLS_PER_BYTE);
    let mut acc = 0u8;
    let mut pending = 0usize;

    for (position, symbol) in sequence.chars().enumerate() {
        let n = Nucleotide::from_char(symbol)
            .ok_or(BasicCodecError::InvalidSymbol { symbol, position })?;
        acc = (acc << 2) | n.bits();
        pending += 1;
        if pending == SYMBOLS_PER_BYTE {
            out.push(acc);
            acc = 0;
            pending = 0;
        }
    }

    if pending != 0 {
        return Err(BasicCodecError::TrailingBits { bits: pending * 2 });
    }
    Ok(out)
}

/// Decode under an explicit policy.
pub fn decode_with_mode(sequence: &str, mode: DecodeMode) -> Result<Vec<u8>, BasicCodecError> {
    match mode {
        DecodeMode::Lenient => Ok(decode(sequence)),
        DecodeMode::Strict => decode_strict(sequence),
    }
}

impl BasicCodec {
    pub fn decode_sequence(&self, sequence: &str) -> Result<Vec<u8>, BasicCodecError> {
        decode_with_mode(sequence, self.mode)
    }
}
