use tracing::{debug, warn};

use crate::config::NanoporeOptions;
use crate::constants::nanopore::BITS_PER_CODEWORD;
use crate::framing::{is_framing_intact, wrap_markers, wrap_padding};
use crate::nanopore::constraints::{check_payload, validate_sequence};
use crate::nanopore::ecc::{bytes_to_parity_bits, repeat_bits};
use crate::nanopore::table::bits_to_codewords;
use crate::nanopore::types::{ConstraintReport, NanoporeCodec, NanoporeCodecError, NanoporeEncoding};
use crate::utils::pad_bits_to_multiple;

/// Coded payload before any framing.
pub fn encode_payload(data: &[u8], use_error_correction: bool) -> String {
    let mut bits = bytes_to_parity_bits(data);
    if use_error_correction {
        bits = repeat_bits(&bits);
    }
    pad_bits_to_multiple(&mut bits, BITS_PER_CODEWORD);
    bits_to_codewords(&bits)
}

/// Full encode with diagnostics. Never fails; strictness is applied by the
/// caller on the returned verdict.
pub fn build_encoding(data: &[u8], use_error_correction: bool) -> NanoporeEncoding {
    if data.is_empty() {
        return NanoporeEncoding {
            sequence: String::new(),
            padded: false,
            verdict: ConstraintReport::default(),
            framing_intact: true,
        };
    }

    let payload = encode_payload(data, use_error_correction);
    let pre = check_payload(&payload);
    let padded = !pre.is_ok();

    let body = if padded {
        debug!(payload_len = payload.len(), %pre, "nanopore: padding repair");
        wrap_padding(&payload)
    } else {
        payload.clone()
    };

    let framing_intact = is_framing_intact(&body, &payload);
    let sequence = wrap_markers(&body);
    let verdict = validate_sequence(&sequence);

    NanoporeEncoding { sequence, padded, verdict, framing_intact }
}

/// Lenient encode.
pub fn encode(data: &[u8], use_error_correction: bool) -> String {
    NanoporeCodec::new(NanoporeOptions::new(use_error_correction))
        .encode_with_report(data)
        .map(|enc| enc.sequence)
        .unwrap_or_default()
}

impl NanoporeCodec {
    /// Encode and report. Strict mode turns a framing collision or a failed
    /// post-repair validation into an error; lenient mode logs them.
    pub fn encode_with_report(&self, data: &[u8]) -> Result<NanoporeEncoding, NanoporeCodecError> {
        let enc = build_encoding(data, self.options.use_error_correction);
        let strict = self.options.mode.is_strict();

        if !enc.framing_intact {
            if strict {
                return Err(NanoporeCodecError::FramingCollision);
            }
            warn!(len = enc.sequence.len(), "nanopore: padding collides with delimiter");
        }

        if !enc.verdict.is_ok() {
            if strict {
                return Err(NanoporeCodecError::ConstraintViolation(enc.verdict));
            }
            warn!(verdict = %enc.verdict, "nanopore: constraints not met after repair");
        }

        Ok(enc)
    }

    pub fn encode_sequence(&self, data: &[u8]) -> Result<String, NanoporeCodecError> {
        self.encode_with_report(data).map(|enc| enc.sequence)
    }
}
