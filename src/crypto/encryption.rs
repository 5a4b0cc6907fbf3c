//! AES-256-GCM encryption/decryption
//!
//! Thin wrapper over the `aes-gcm` cipher. The caller supplies the nonce;
//! it must never be reused with the same key.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};

use crate::error::{SealError, SealResult};

use super::DerivedKey;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag appended to every ciphertext
pub const TAG_LEN: usize = 16;

fn cipher_for(key: &DerivedKey) -> SealResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SealError::Encryption(format!("Failed to create cipher: {}", e)))
}

/// Encrypt plaintext bytes, returning ciphertext with the tag appended
pub fn encrypt(plaintext: &[u8], key: &DerivedKey, nonce: &[u8; NONCE_LEN]) -> SealResult<Vec<u8>> {
    let cipher = cipher_for(key)?;

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| SealError::Encryption(format!("Encryption failed: {}", e)))
}

/// Decrypt ciphertext-with-tag, verifying the tag
///
/// Any verification failure is reported as
/// [`SealError::AuthenticationFailure`]; no plaintext is returned.
pub fn decrypt(ciphertext: &[u8], key: &DerivedKey, nonce: &[u8; NONCE_LEN]) -> SealResult<Vec<u8>> {
    let cipher = cipher_for(key)?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| SealError::AuthenticationFailure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::key_derivation::derive_key;

    const NONCE: [u8; NONCE_LEN] = [7u8; NONCE_LEN];

    fn test_key(password: &str) -> DerivedKey {
        derive_key(password, b"test-salt-16byte").unwrap()
    }

    #[test]
    fn test_encrypt_decrypt() {
        let key = test_key("test_password");
        let plaintext = b"Hello, World!";

        let ciphertext = encrypt(plaintext, &key, &NONCE).unwrap();
        let decrypted = decrypt(&ciphertext, &key, &NONCE).unwrap();

        assert_eq!(plaintext, decrypted.as_slice());
    }

    #[test]
    fn test_ciphertext_carries_tag() {
        let key = test_key("test_password");
        let ciphertext = encrypt(b"abc", &key, &NONCE).unwrap();
        assert_eq!(ciphertext.len(), 3 + TAG_LEN);
    }

    #[test]
    fn test_empty_plaintext() {
        let key = test_key("test_password");

        let ciphertext = encrypt(b"", &key, &NONCE).unwrap();
        assert_eq!(ciphertext.len(), TAG_LEN);

        let decrypted = decrypt(&ciphertext, &key, &NONCE).unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn test_wrong_key_fails() {
        let key1 = test_key("test_password");
        let key2 = test_key("different_password");

        let ciphertext = encrypt(b"Hello, World!", &key1, &NONCE).unwrap();
        let err = decrypt(&ciphertext, &key2, &NONCE).unwrap_err();
        assert!(err.is_authentication_failure());
    }

    #[test]
    fn test_wrong_nonce_fails() {
        let key = test_key("test_password");
        let ciphertext = encrypt(b"Hello, World!", &key, &NONCE).unwrap();

        let err = decrypt(&ciphertext, &key, &[8u8; NONCE_LEN]).unwrap_err();
        assert!(err.is_authentication_failure());
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let key = test_key("test_password");
        let mut ciphertext = encrypt(b"Hello, World!", &key, &NONCE).unwrap();
        ciphertext[0] ^= 0xFF;

        let err = decrypt(&ciphertext, &key, &NONCE).unwrap_err();
        assert!(err.is_authentication_failure());
    }

    #[test]
    fn test_truncated_ciphertext_fails() {
        let key = test_key("test_password");
        let err = decrypt(&[1, 2, 3], &key, &NONCE).unwrap_err();
        assert!(err.is_authentication_failure());
    }

    #[test]
    fn test_large_plaintext() {
        let key = test_key("test_password");
        let plaintext: Vec<u8> = (0..10000).map(|i| (i % 256) as u8).collect();

        let ciphertext = encrypt(&plaintext, &key, &NONCE).unwrap();
        let decrypted = decrypt(&ciphertext, &key, &NONCE).unwrap();

        assert_eq!(plaintext, decrypted);
    }
}
