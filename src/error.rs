//! Custom error types for textseal
//!
//! This module defines the error hierarchy for the library using thiserror.
//! Every failure of the core is one of a closed set of kinds so callers can
//! branch on it instead of matching message strings.

use thiserror::Error;

/// The main error type for textseal operations
#[derive(Error, Debug)]
pub enum SealError {
    /// Sealed text is not three well-formed base64 fields, or the decoded
    /// salt/nonce have the wrong length
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The authentication tag did not verify.
    ///
    /// Covers both a wrong password and tampered data; the two cases are
    /// deliberately indistinguishable.
    #[error("Decryption failed: invalid password or corrupted data")]
    AuthenticationFailure,

    /// Authenticated plaintext was not valid UTF-8
    #[error("Decoding error: {0}")]
    DecodingFailure(String),

    /// Caller-side contract violations (empty password, policy violations)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Entropy source or cipher construction failures
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl SealError {
    /// Create a malformed-input error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput(reason.into())
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter(reason.into())
    }

    /// Check if this is a malformed-input error
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }

    /// Check if this is an authentication failure
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailure)
    }

    /// Check if this is a UTF-8 decoding failure
    pub fn is_decoding_failure(&self) -> bool {
        matches!(self, Self::DecodingFailure(_))
    }

    /// Check if this is an invalid-parameter error
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

impl From<std::io::Error> for SealError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for textseal operations
pub type SealResult<T> = Result<T, SealError>;
