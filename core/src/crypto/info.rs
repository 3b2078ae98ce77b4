//! crypto/info.rs
//! Static description of the envelope parameters.

use serde::Serialize;

use crate::constants::secure::{IV_SIZE, KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SecurityInfo {
    pub encryption_algorithm: &'static str,
    pub key_derivation: &'static str,
    pub pbkdf2_iterations: u32,
    pub key_size_bits: usize,
    pub iv_size_bits: usize,
    pub salt_size_bits: usize,
    pub padding_scheme: &'static str,
}

pub const fn security_info() -> SecurityInfo {
    SecurityInfo {
        encryption_algorithm: "AES-256-CBC",
        key_derivation: "PBKDF2-HMAC-SHA256",
        pbkdf2_iterations: PBKDF2_ITERATIONS,
        key_size_bits: KEY_SIZE * 8,
        iv_size_bits: IV_SIZE * 8,
        salt_size_bits: SALT_SIZE * 8,
        padding_scheme: "PKCS7",
    }
}
