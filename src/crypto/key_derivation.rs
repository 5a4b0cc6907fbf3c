//! Key derivation using PBKDF2-HMAC-SHA-256
//!
//! Derives AES-256 keys from user passwords. The iteration count is a fixed
//! work factor that makes each password guess expensive.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{SealError, SealResult};

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of the salt mixed into key derivation, in bytes
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits for AES-256)
pub const KEY_LEN: usize = 32;

/// A derived encryption key
///
/// Key bytes are zeroized on drop and never printed.
#[derive(ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password and a 16-byte salt
///
/// Same password and salt always produce the same key. An empty password is
/// rejected with [`SealError::InvalidParameter`].
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> SealResult<DerivedKey> {
    derive_key_with_rounds(password, salt, PBKDF2_ITERATIONS)
}

pub(crate) fn derive_key_with_rounds(
    password: &str,
    salt: &[u8],
    rounds: u32,
) -> SealResult<DerivedKey> {
    if password.is_empty() {
        return Err(SealError::invalid_parameter("Password cannot be empty"));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, rounds, &mut key);

    Ok(DerivedKey { key })
}
