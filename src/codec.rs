//! Password-based seal/open of text payloads
//!
//! [`SealCodec`] composes key derivation, AES-256-GCM and the
//! [`SealedMessage`] wire format:
//!
//! - encrypt: fresh salt + nonce, derive key, encrypt, render `salt.nonce.ct`
//! - decrypt: parse and validate, derive key, verify tag, decode UTF-8
//!
//! Every call is independent; a codec can be shared across threads.

use tracing::debug;

use crate::crypto::random::random_array;
use crate::crypto::{
    self, derive_key, OsRandom, RandomSource, SecureBytes, Utf8Codec, NONCE_LEN, SALT_LEN,
};
use crate::error::{SealError, SealResult};
use crate::sealed::SealedMessage;

/// Encrypts and decrypts text under a password
#[derive(Debug, Clone, Default)]
pub struct SealCodec<R = OsRandom> {
    random: R,
    text: Utf8Codec,
}

impl SealCodec<OsRandom> {
    /// Codec backed by the operating system's secure random generator
    pub fn new() -> Self {
        Self::with_random(OsRandom)
    }
}

impl<R: RandomSource> SealCodec<R> {
    /// Codec drawing salts and nonces from `random`
    pub fn with_random(random: R) -> Self {
        Self {
            random,
            text: Utf8Codec,
        }
    }

    /// Encrypt `plaintext` under `password` and return the sealed string
    pub fn encrypt(&self, plaintext: &str, password: &str) -> SealResult<String> {
        self.seal(plaintext, password).map(|msg| msg.to_string())
    }

    /// Encrypt `plaintext` under `password`, returning the structured message
    pub fn seal(&self, plaintext: &str, password: &str) -> SealResult<SealedMessage> {
        ensure_password(password)?;

        let salt: [u8; SALT_LEN] = random_array(&self.random)?;
        let nonce: [u8; NONCE_LEN] = random_array(&self.random)?;

        let key = derive_key(password, &salt)?;
        let ciphertext = crypto::encrypt(self.text.encode(plaintext), &key, &nonce)?;

        debug!(
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "sealed message"
        );

        Ok(SealedMessage::new(salt, nonce, ciphertext))
    }

    /// Decrypt a sealed string produced by [`SealCodec::encrypt`]
    ///
    /// Input is validated before any key derivation or cipher work.
    pub fn decrypt(&self, sealed: &str, password: &str) -> SealResult<String> {
        let message = SealedMessage::parse(sealed).map_err(|e| {
            debug!(error = %e, "rejected malformed sealed message");
            e
        })?;
        self.open(&message, password)
    }

    /// Decrypt an already-parsed message
    pub fn open(&self, message: &SealedMessage, password: &str) -> SealResult<String> {
        ensure_password(password)?;

        let key = derive_key(password, message.salt())?;
        let plaintext = crypto::decrypt(message.ciphertext(), &key, message.nonce())
            .map(SecureBytes::from)
            .map_err(|e| {
                debug!(error = %e, "failed to open sealed message");
                e
            })?;

        debug!(plaintext_len = plaintext.len(), "opened sealed message");

        self.text.decode(plaintext.into_inner())
    }
}

fn ensure_password(password: &str) -> SealResult<()> {
    if password.is_empty() {
        return Err(SealError::invalid_parameter("Password cannot be empty"));
    }
    Ok(())
}

/// Encrypt with a fresh [`SealCodec`] backed by the OS random generator
pub fn encrypt(plaintext: &str, password: &str) -> SealResult<String> {
    SealCodec::new().encrypt(plaintext, password)
}

/// Decrypt with a fresh [`SealCodec`]
pub fn decrypt(sealed: &str, password: &str) -> SealResult<String> {
    SealCodec::new().decrypt(sealed, password)
}
