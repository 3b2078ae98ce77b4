// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! Password-based key derivation.
//!
//! Design:
//! - PBKDF2-HMAC-SHA256(password, salt, iterations) -> 32-byte AES key.
//! - Output is wrapped in `Zeroizing` so it is wiped on drop.
//!
//! Industry notes:
//! - 100 000 iterations is the interoperable default; lower counts exist for
//!   tests only and produce sequences other implementations cannot open.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::crypto::types::{Key32, KEY_SIZE};

/// Derive the envelope key from a password and the envelope salt.
#[inline]
pub fn derive_key(password: &[u8], salt: &[u8], iterations: u32) -> Zeroizing<Key32> {
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut key[..]);
    key
}
