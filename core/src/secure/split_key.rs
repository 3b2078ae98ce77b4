//! secure/split_key.rs
//! Envelope keyed by a random K published as two XOR shares.
//!
//! K1 is random, K2 = K ^ K1; either share alone is uniformly random. The
//! envelope salt is still serialized so the wire layout matches the password
//! tier, but it plays no part in keying.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

use crate::config::DecodeMode;
use crate::crypto::{Key32, IV_SIZE, KEY_SIZE, SALT_SIZE};
use crate::secure::decode::{open, unframe};
use crate::secure::encode::{random_array, seal};
use crate::secure::types::{OpenError, SecureEnvelopeError};
use crate::utils::xor_arrays;

/// Sequence plus base64 key shares.
#[derive(Clone, PartialEq, Eq)]
pub struct SplitKeyEncoding {
    pub sequence: String,
    pub k1: String,
    pub k2: String,
}

impl std::fmt::Debug for SplitKeyEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitKeyEncoding")
            .field("sequence_len", &self.sequence.len())
            .field("k1", &"<redacted>")
            .field("k2", &"<redacted>")
            .finish()
    }
}

fn decode_share(label: &str, share: &str) -> Result<Zeroizing<Key32>, OpenError> {
    let raw = Zeroizing::new(
        STANDARD
            .decode(share)
            .map_err(|_| OpenError::Share(format!("{label} is not valid base64")))?,
    );
    if raw.len() != KEY_SIZE {
        return Err(OpenError::Share(format!("{label} must be {KEY_SIZE} bytes, got {}", raw.len())));
    }
    let mut out = Zeroizing::new([0u8; KEY_SIZE]);
    out.copy_from_slice(&raw);
    Ok(out)
}

/// Encrypt under a fresh key and split it. Empty input yields empty
/// sequence and shares.
pub fn encode_with_split_keys(plaintext: &[u8]) -> Result<SplitKeyEncoding, SecureEnvelopeError> {
    if plaintext.is_empty() {
        return Ok(SplitKeyEncoding { sequence: String::new(), k1: String::new(), k2: String::new() });
    }

    let key = Zeroizing::new(random_array::<KEY_SIZE>());
    let iv = random_array::<IV_SIZE>();
    let salt = random_array::<SALT_SIZE>();
    let sequence = seal(&key, salt, iv, plaintext)?;

    let k1 = Zeroizing::new(random_array::<KEY_SIZE>());
    let k2 = Zeroizing::new(xor_arrays(&*key, &*k1));

    Ok(SplitKeyEncoding {
        sequence,
        k1: STANDARD.encode(&k1[..]),
        k2: STANDARD.encode(&k2[..]),
    })
}

/// Recombine the shares and open the envelope. An empty sequence decodes to
/// empty bytes without inspecting the shares.
pub fn decode_with_split_keys(sequence: &str, k1: &str, k2: &str) -> Result<Vec<u8>, SecureEnvelopeError> {
    if sequence.is_empty() {
        return Ok(Vec::new());
    }

    let run = || -> Result<Vec<u8>, OpenError> {
        let s1 = decode_share("k1", k1)?;
        let s2 = decode_share("k2", k2)?;
        let key = Zeroizing::new(xor_arrays(&*s1, &*s2));
        let envelope = unframe(sequence, DecodeMode::Lenient)?;
        open(&key, &envelope)
    };
    run().map_err(|e| e.collapse("split-key"))
}
