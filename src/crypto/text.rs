//! UTF-8 conversion between plaintext strings and cipher bytes

use crate::error::{SealError, SealResult};

/// Converts plaintext to and from the bytes fed to the cipher
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Codec;

impl Utf8Codec {
    /// Encode text as UTF-8 bytes
    pub fn encode<'a>(&self, text: &'a str) -> &'a [u8] {
        text.as_bytes()
    }

    /// Decode bytes as UTF-8 text
    ///
    /// On failure the rejected bytes are zeroized before the error is returned.
    pub fn decode(&self, bytes: Vec<u8>) -> SealResult<String> {
        String::from_utf8(bytes).map_err(|e| {
            let valid_up_to = e.utf8_error().valid_up_to();
            let mut rejected = e.into_bytes();
            zeroize::Zeroize::zeroize(&mut rejected);
            SealError::DecodingFailure(format!(
                "Decrypted data is not valid UTF-8 (invalid byte at offset {})",
                valid_up_to
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_multibyte() {
        assert_eq!(Utf8Codec.encode("hóla"), &[0x68, 0xc3, 0xb3, 0x6c, 0x61]);
    }

    #[test]
    fn test_decode_valid() {
        let text = Utf8Codec.decode("héllo wörld ✓".as_bytes().to_vec()).unwrap();
        assert_eq!(text, "héllo wörld ✓");
    }

    #[test]
    fn test_decode_invalid_reports_offset() {
        let err = Utf8Codec.decode(vec![b'o', b'k', 0xff, 0xfe]).unwrap_err();
        assert!(err.is_decoding_failure());
        assert!(err.to_string().contains("offset 2"));
    }
}
