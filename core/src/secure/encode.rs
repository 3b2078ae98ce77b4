use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::basic;
use crate::config::SecureOptions;
use crate::crypto::{derive_key, encrypt_cbc, Envelope, Key32, IV_SIZE, SALT_SIZE};
use crate::framing::wrap_markers;
use crate::secure::types::{SecureCodec, SecureEnvelopeError};

pub(crate) fn random_array<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    OsRng.fill_bytes(&mut out);
    out
}

/// Encrypt under `key` and render the framed sequence.
pub(crate) fn seal(
    key: &Key32,
    salt: [u8; SALT_SIZE],
    iv: [u8; IV_SIZE],
    plaintext: &[u8],
) -> Result<String, SecureEnvelopeError> {
    let ciphertext =
        encrypt_cbc(key, &iv, plaintext).map_err(|e| SecureEnvelopeError::EncodingFailed(e.to_string()))?;
    let text = Envelope::new(salt, iv, ciphertext)
        .to_base64()
        .map_err(|e| SecureEnvelopeError::EncodingFailed(e.to_string()))?;

    debug!(plaintext_len = plaintext.len(), b64_len = text.len(), "secure: sealed envelope");
    Ok(wrap_markers(&basic::encode(text.as_bytes())))
}

impl SecureCodec {
    pub fn encode_sequence(&self, plaintext: &[u8]) -> Result<String, SecureEnvelopeError> {
        self.check_ready()?;
        if plaintext.is_empty() {
            return Ok(String::new());
        }

        let salt = random_array::<SALT_SIZE>();
        let iv = random_array::<IV_SIZE>();
        let key = derive_key(self.password().as_bytes(), &salt, self.options.kdf_iterations);
        seal(&key, salt, iv, plaintext)
    }
}

/// Password-encrypt `plaintext` into a framed sequence with default options.
/// `use_error_correction` does not change the output format.
pub fn secure_encode(
    plaintext: &[u8],
    password: &str,
    use_error_correction: bool,
) -> Result<String, SecureEnvelopeError> {
    SecureCodec::new(password, SecureOptions::new(use_error_correction)).encode_sequence(plaintext)
}
