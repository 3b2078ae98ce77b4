use crate::alphabet::{canonicalize, Nucleotide};
use crate::basic;
use crate::config::{DecodeMode, SecureOptions};
use crate::crypto::{decrypt_cbc, derive_key, Envelope, Key32};
use crate::framing::strip_markers;
use crate::secure::types::{OpenError, SecureCodec, SecureEnvelopeError};

/// Strip framing and parse the envelope. Lenient mode drops foreign symbols
/// before looking for the markers.
pub(crate) fn unframe(sequence: &str, mode: DecodeMode) -> Result<Envelope, OpenError> {
    let mut upper = canonicalize(sequence);
    if !mode.is_strict() {
        upper.retain(|c| Nucleotide::from_char(c).is_some());
    }
    let text = basic::decode_with_mode(strip_markers(&upper), mode)?;
    Ok(Envelope::from_base64(&text)?)
}

pub(crate) fn open(key: &Key32, envelope: &Envelope) -> Result<Vec<u8>, OpenError> {
    Ok(decrypt_cbc(key, &envelope.iv, &envelope.ciphertext)?)
}

impl SecureCodec {
    pub fn decode_sequence(&self, sequence: &str) -> Result<Vec<u8>, SecureEnvelopeError> {
        self.check_ready()?;
        if sequence.is_empty() {
            return Ok(Vec::new());
        }

        let run = || -> Result<Vec<u8>, OpenError> {
            let envelope = unframe(sequence, self.options.mode)?;
            let key = derive_key(self.password().as_bytes(), &envelope.salt, self.options.kdf_iterations);
            open(&key, &envelope)
        };
        run().map_err(|e| e.collapse("password"))
    }
}

/// Inverse of `secure_encode`.
pub fn secure_decode(
    sequence: &str,
    password: &str,
    use_error_correction: bool,
) -> Result<Vec<u8>, SecureEnvelopeError> {
    SecureCodec::new(password, SecureOptions::new(use_error_correction)).decode_sequence(sequence)
}
