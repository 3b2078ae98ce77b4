//! crypto/cipher.rs
//! AES-256-CBC with PKCS#7 padding.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::constants::secure::BLOCK_SIZE;
use crate::crypto::types::{CipherError, Key32, IV_SIZE};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt `plaintext`; output length is the next multiple of 16 strictly
/// greater than the input length.
pub fn encrypt_cbc(key: &Key32, iv: &[u8; IV_SIZE], plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    let enc = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| CipherError::InvalidKeyIv)?;
    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt and strip PKCS#7 padding.
pub fn decrypt_cbc(key: &Key32, iv: &[u8; IV_SIZE], ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::NotBlockAligned(ciphertext.len()));
    }
    let dec = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| CipherError::InvalidKeyIv)?;
    dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CipherError::Unpad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pkcs7_block_growth() {
        let key = [7u8; 32];
        let iv = [9u8; 16];
        assert_eq!(encrypt_cbc(&key, &iv, b"").unwrap().len(), 16);
        assert_eq!(encrypt_cbc(&key, &iv, &[0u8; 15]).unwrap().len(), 16);
        assert_eq!(encrypt_cbc(&key, &iv, &[0u8; 16]).unwrap().len(), 32);
    }

    #[test]
    fn roundtrip_and_misaligned() {
        let key = [1u8; 32];
        let iv = [2u8; 16];
        let ct = encrypt_cbc(&key, &iv, b"attack at dawn").unwrap();
        assert_eq!(decrypt_cbc(&key, &iv, &ct).unwrap(), b"attack at dawn");
        assert_eq!(decrypt_cbc(&key, &iv, &ct[..15]), Err(CipherError::NotBlockAligned(15)));
        assert_eq!(decrypt_cbc(&key, &iv, &[]), Err(CipherError::NotBlockAligned(0)));
    }
}
