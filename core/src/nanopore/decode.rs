use tracing::debug;

use crate::alphabet::canonicalize;
use crate::config::NanoporeOptions;
use crate::constants::nanopore::{BITS_PER_CHUNK, SYMBOLS_PER_CODEWORD};
use crate::framing::{extract_payload, strip_markers};
use crate::nanopore::ecc::majority_vote;
use crate::nanopore::table::codeword_value;
use crate::nanopore::types::{NanoporeCodec, NanoporeCodecError};
use crate::utils::{bits_to_byte, even_parity_bit};

/// Codewords back to bits.
fn payload_to_bits(payload: &str, strict: bool) -> Result<Vec<u8>, NanoporeCodecError> {
    let raw = payload.as_bytes();
    let mut bits = Vec::with_capacity(raw.len());

    for (i, triplet) in raw.chunks(SYMBOLS_PER_CODEWORD).enumerate() {
        if triplet.len() < SYMBOLS_PER_CODEWORD {
            if strict {
                return Err(NanoporeCodecError::TrailingSymbols { count: triplet.len() });
            }
            break;
        }
        match codeword_value(triplet) {
            Some(v) => bits.extend_from_slice(&[(v >> 2) & 1, (v >> 1) & 1, v & 1]),
            None if strict => {
                return Err(NanoporeCodecError::InvalidTriplet {
                    triplet: String::from_utf8_lossy(triplet).into_owned(),
                    position: i * SYMBOLS_PER_CODEWORD,
                });
            }
            None => {}
        }
    }
    Ok(bits)
}

/// 9-bit parity chunks back to bytes.
fn chunks_to_bytes(bits: &[u8], strict: bool) -> Result<Vec<u8>, NanoporeCodecError> {
    let mut out = Vec::with_capacity(bits.len() / BITS_PER_CHUNK);
    let mut dropped = 0usize;

    for (index, chunk) in bits.chunks(BITS_PER_CHUNK).enumerate() {
        if chunk.len() < BITS_PER_CHUNK {
            if strict {
                return Err(NanoporeCodecError::TrailingBits { bits: chunk.len() });
            }
            break;
        }
        let byte = bits_to_byte(&chunk[..8]);
        if even_parity_bit(byte) == chunk[8] {
            out.push(byte);
        } else if strict {
            return Err(NanoporeCodecError::ParityMismatch { index });
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        debug!(dropped, "nanopore: dropped bytes failing parity");
    }
    Ok(out)
}

/// Lenient decode.
pub fn decode(sequence: &str, use_error_correction: bool) -> Vec<u8> {
    NanoporeCodec::new(NanoporeOptions::new(use_error_correction))
        .decode_sequence(sequence)
        .unwrap_or_default()
}

impl NanoporeCodec {
    pub fn decode_sequence(&self, sequence: &str) -> Result<Vec<u8>, NanoporeCodecError> {
        let strict = self.options.mode.is_strict();
        let upper = canonicalize(sequence);
        let view = extract_payload(strip_markers(&upper));

        let mut bits = payload_to_bits(view.payload, strict)?;
        if self.options.use_error_correction {
            bits = majority_vote(&bits);
        }
        chunks_to_bytes(&bits, strict)
    }
}
