//! crypto/envelope.rs
//! Length-prefixed salt/IV/ciphertext container.
//!
//! Wire layout (big-endian prefixes):
//!
//! ```text
//! u16 salt_len | salt | u16 iv_len | iv | u32 ct_len | ciphertext
//! ```
//!
//! Design notes:
//! - Parsing is strict: salt and IV must be exactly 16 bytes, every prefix
//!   must be satisfiable, and nothing may follow the ciphertext.
//! - The textual form is standard padded base64 of the wire bytes.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use byteorder::{BigEndian, ByteOrder};

use crate::constants::secure::{CIPHERTEXT_LEN_PREFIX, IV_LEN_PREFIX, SALT_LEN_PREFIX};
use crate::crypto::types::{EnvelopeError, IV_SIZE, SALT_SIZE};

#[derive(Clone, PartialEq, Eq)]
pub struct Envelope {
    pub salt: [u8; SALT_SIZE],
    pub iv: [u8; IV_SIZE],
    pub ciphertext: Vec<u8>,
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("salt", &hex::encode(self.salt))
            .field("iv", &hex::encode(self.iv))
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

/// Cursor over the wire buffer.
struct Reader<'a> {
    buf: &'a [u8],
    off: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, field: &'static str, n: usize) -> Result<&'a [u8], EnvelopeError> {
        let available = self.buf.len() - self.off;
        if available < n {
            return Err(EnvelopeError::Truncated { field, needed: n, available });
        }
        let out = &self.buf[self.off..self.off + n];
        self.off += n;
        Ok(out)
    }

    fn fixed<const N: usize>(&mut self, field: &'static str, len: usize) -> Result<[u8; N], EnvelopeError> {
        if len != N {
            return Err(EnvelopeError::InvalidLength { field, expected: N, actual: len });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(field, N)?);
        Ok(out)
    }
}

impl Envelope {
    pub fn new(salt: [u8; SALT_SIZE], iv: [u8; IV_SIZE], ciphertext: Vec<u8>) -> Self {
        Self { salt, iv, ciphertext }
    }

    /// Exact serialized length.
    pub fn wire_len(&self) -> usize {
        SALT_LEN_PREFIX + SALT_SIZE + IV_LEN_PREFIX + IV_SIZE + CIPHERTEXT_LEN_PREFIX + self.ciphertext.len()
    }

    /// Serialize to the wire layout.
    ///
    /// # Errors
    /// - `FieldTooLong` if the ciphertext exceeds `u32::MAX` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        let ct_len = u32::try_from(self.ciphertext.len()).map_err(|_| EnvelopeError::FieldTooLong {
            field: "ciphertext",
            len: self.ciphertext.len(),
        })?;

        let mut out = Vec::with_capacity(self.wire_len());
        let mut p16 = [0u8; 2];
        let mut p32 = [0u8; 4];

        BigEndian::write_u16(&mut p16, SALT_SIZE as u16);
        out.extend_from_slice(&p16);
        out.extend_from_slice(&self.salt);

        BigEndian::write_u16(&mut p16, IV_SIZE as u16);
        out.extend_from_slice(&p16);
        out.extend_from_slice(&self.iv);

        BigEndian::write_u32(&mut p32, ct_len);
        out.extend_from_slice(&p32);
        out.extend_from_slice(&self.ciphertext);

        debug_assert_eq!(out.len(), self.wire_len());
        Ok(out)
    }

    /// Parse the wire layout.
    ///
    /// # Errors
    /// - `Truncated` when any prefix or field runs past the buffer.
    /// - `InvalidLength` when salt or IV is not 16 bytes.
    /// - `TrailingBytes` when data follows the ciphertext.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, EnvelopeError> {
        let mut r = Reader { buf, off: 0 };

        let salt_len = BigEndian::read_u16(r.take("salt length", SALT_LEN_PREFIX)?) as usize;
        let salt = r.fixed::<SALT_SIZE>("salt", salt_len)?;

        let iv_len = BigEndian::read_u16(r.take("iv length", IV_LEN_PREFIX)?) as usize;
        let iv = r.fixed::<IV_SIZE>("iv", iv_len)?;

        let ct_len = BigEndian::read_u32(r.take("ciphertext length", CIPHERTEXT_LEN_PREFIX)?) as usize;
        let ciphertext = r.take("ciphertext", ct_len)?.to_vec();

        let extra = buf.len() - r.off;
        if extra != 0 {
            return Err(EnvelopeError::TrailingBytes { extra });
        }

        Ok(Self { salt, iv, ciphertext })
    }

    pub fn to_base64(&self) -> Result<String, EnvelopeError> {
        Ok(STANDARD.encode(self.to_bytes()?))
    }

    pub fn from_base64(text: impl AsRef<[u8]>) -> Result<Self, EnvelopeError> {
        let raw = STANDARD.decode(text)?;
        Self::from_bytes(&raw)
    }
}
