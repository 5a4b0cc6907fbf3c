//! Secure memory handling for passwords and plaintext
//!
//! Wrappers that zero their contents on drop so secrets do not linger in
//! memory after the operation that needed them.

use std::fmt;
use std::ops::Deref;

use zeroize::Zeroizing;

/// A string that zeroes its contents on drop
///
/// Used to hold passwords read from the command line or a prompt.
pub struct SecureString {
    inner: Zeroizing<String>,
}

impl SecureString {
    /// Create a new SecureString
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            inner: Zeroizing::new(s.into()),
        }
    }

    /// Get the string contents
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Length in characters, for password policy checks
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }
}

impl Deref for SecureString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<str> for SecureString {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for SecureString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Never print the contents
impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

/// A byte buffer that zeroes its contents on drop
///
/// Holds decrypted bytes until they are handed off as text.
pub struct SecureBytes {
    inner: Zeroizing<Vec<u8>>,
}

impl SecureBytes {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: Zeroizing::new(bytes.into()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Take the bytes out, leaving an empty buffer behind
    pub fn into_inner(mut self) -> Vec<u8> {
        std::mem::take(&mut *self.inner)
    }
}

impl Deref for SecureBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<Vec<u8>> for SecureBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureBytes")
            .field("len", &self.inner.len())
            .finish()
    }
}
