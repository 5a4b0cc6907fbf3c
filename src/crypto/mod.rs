//! Cryptographic primitives for textseal
//!
//! AES-256-GCM authenticated encryption keyed by PBKDF2-HMAC-SHA-256,
//! plus the capabilities the codec is built from (randomness, UTF-8
//! conversion, zeroizing buffers).

pub mod encryption;
pub mod key_derivation;
pub mod random;
pub mod secure_memory;
pub mod text;

pub use encryption::{decrypt, encrypt, NONCE_LEN, TAG_LEN};
pub use key_derivation::{derive_key, DerivedKey, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
pub use random::{OsRandom, RandomSource};
pub use secure_memory::{SecureBytes, SecureString};
pub use text::Utf8Codec;
