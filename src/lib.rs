//! textseal - Password-based authenticated encryption for short text
//!
//! Encrypts a string under a password with AES-256-GCM, keyed by
//! PBKDF2-HMAC-SHA-256, and packs everything needed to decrypt into one
//! transportable string:
//!
//! ```text
//! <base64(salt16)>.<base64(nonce12)>.<base64(ciphertext || tag16)>
//! ```
//!
//! # Architecture
//!
//! - `crypto`: key derivation, AES-GCM, random sources, secure buffers
//! - `sealed`: the `salt.nonce.ciphertext` wire format
//! - `codec`: encrypt/decrypt composed from the above
//! - `config`: paths and user settings for the command-line front end
//! - `logging`: tracing subscriber setup
//! - `cli`: command handlers used by the `textseal` binary
//! - `error`: error kinds
//!
//! # Example
//!
//! ```no_run
//! let sealed = textseal::encrypt("hello", "password")?;
//! assert_eq!(textseal::decrypt(&sealed, "password")?, "hello");
//! # Ok::<(), textseal::SealError>(())
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod sealed;

pub use codec::{decrypt, encrypt, SealCodec};
pub use error::{SealError, SealResult};
pub use sealed::SealedMessage;
