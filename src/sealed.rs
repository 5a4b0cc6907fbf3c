//! Sealed message wire format
//!
//! A sealed message travels as three standard-base64 fields joined by `.`:
//!
//! ```text
//! <base64(salt16)>.<base64(nonce12)>.<base64(ciphertext || tag16)>
//! ```
//!
//! The base64 alphabet has no `.`, so no escaping is needed.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::crypto::{NONCE_LEN, SALT_LEN};
use crate::error::{SealError, SealResult};

/// Field separator
pub const DELIMITER: char = '.';

const FIELD_COUNT: usize = 3;

/// Salt, nonce and ciphertext-with-tag bundled for transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
    ciphertext: Vec<u8>,
}

impl SealedMessage {
    pub fn new(salt: [u8; SALT_LEN], nonce: [u8; NONCE_LEN], ciphertext: Vec<u8>) -> Self {
        Self {
            salt,
            nonce,
            ciphertext,
        }
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// Ciphertext with the authentication tag appended
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Parse the `salt.nonce.ciphertext` form
    ///
    /// Anything other than exactly three base64 fields, or a salt/nonce of
    /// the wrong decoded length, is [`SealError::MalformedInput`].
    pub fn parse(input: &str) -> SealResult<Self> {
        let fields: Vec<&str> = input.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(SealError::malformed(format!(
                "expected {} '{}'-separated fields, found {}",
                FIELD_COUNT,
                DELIMITER,
                fields.len()
            )));
        }

        let salt = decode_field("salt", fields[0])?;
        let nonce = decode_field("nonce", fields[1])?;
        let ciphertext = decode_field("ciphertext", fields[2])?;

        let nonce: [u8; NONCE_LEN] = nonce.try_into().map_err(|v: Vec<u8>| {
            SealError::malformed(format!(
                "invalid nonce: expected {} bytes, got {}",
                NONCE_LEN,
                v.len()
            ))
        })?;
        let salt: [u8; SALT_LEN] = salt.try_into().map_err(|v: Vec<u8>| {
            SealError::malformed(format!(
                "invalid salt: expected {} bytes, got {}",
                SALT_LEN,
                v.len()
            ))
        })?;

        Ok(Self::new(salt, nonce, ciphertext))
    }
}

fn decode_field(name: &str, field: &str) -> SealResult<Vec<u8>> {
    STANDARD
        .decode(field)
        .map_err(|e| SealError::malformed(format!("invalid {} encoding: {}", name, e)))
}

impl fmt::Display for SealedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}",
            STANDARD.encode(self.salt),
            STANDARD.encode(self.nonce),
            STANDARD.encode(&self.ciphertext),
            d = DELIMITER
        )
    }
}

impl FromStr for SealedMessage {
    type Err = SealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SealedMessage {
        SealedMessage::new([1u8; SALT_LEN], [2u8; NONCE_LEN], vec![3u8; 20])
    }

    #[test]
    fn test_display_layout() {
        let text = sample().to_string();
        let fields: Vec<&str> = text.split('.').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "AQEBAQEBAQEBAQEBAQEBAQ==");
        assert_eq!(fields[1], "AgICAgICAgICAgIC");
    }

    #[test]
    fn test_parse_display_output() {
        let msg = sample();
        let parsed: SealedMessage = msg.to_string().parse().unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_too_few_fields() {
        for input in ["", "AQEBAQEBAQEBAQEBAQEBAQ==", "AQEBAQEBAQEBAQEBAQEBAQ==.AgICAgICAgICAgIC"] {
            let err = SealedMessage::parse(input).unwrap_err();
            assert!(err.is_malformed_input(), "input {:?}", input);
        }
    }

    #[test]
    fn test_too_many_fields() {
        let input = format!("{}.extra", sample());
        let err = SealedMessage::parse(&input).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("found 4"));
    }

    #[test]
    fn test_invalid_base64() {
        let err = SealedMessage::parse("not*base64.AgICAgICAgICAgIC.AAAA").unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("salt"));
    }

    #[test]
    fn test_wrong_nonce_length() {
        // 15-byte nonce
        let err = SealedMessage::parse("AQEBAQEBAQEBAQEBAQEBAQ==.AgICAgICAgICAgICAgIC.AAAA").unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("nonce"));
    }

    #[test]
    fn test_wrong_salt_length() {
        // 3-byte salt
        let err = SealedMessage::parse("AQEB.AgICAgICAgICAgIC.AAAA").unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("salt"));
    }

    #[test]
    fn test_url_safe_alphabet_rejected() {
        let msg = SealedMessage::new([0xfb; SALT_LEN], [2u8; NONCE_LEN], vec![3u8; 4]);
        let text = msg.to_string().replace('+', "-").replace('/', "_");
        assert!(SealedMessage::parse(&text).unwrap_err().is_malformed_input());
    }
}
