//! Random byte sources for salts and nonces
//!
//! The codec takes its entropy through [`RandomSource`] so tests can plug in
//! a deterministic source. Production code uses [`OsRandom`].

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

use crate::error::{SealError, SealResult};

/// A source of random bytes
pub trait RandomSource: Send + Sync {
    /// Fill `dest` entirely with random bytes
    fn fill(&self, dest: &mut [u8]) -> SealResult<()>;
}

/// The operating system's cryptographically secure generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> SealResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| SealError::Encryption(format!("Random source unavailable: {}", e)))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn fill(&self, dest: &mut [u8]) -> SealResult<()> {
        (**self).fill(dest)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn fill(&self, dest: &mut [u8]) -> SealResult<()> {
        (**self).fill(dest)
    }
}

/// Fill a fixed-size array from `source`
pub(crate) fn random_array<const N: usize>(source: &impl RandomSource) -> SealResult<[u8; N]> {
    let mut buf = [0u8; N];
    source.fill(&mut buf)?;
    Ok(buf)
}


#[cfg(test)]
mod tests {
    use super::testing::{BrokenRandom, CountingRandom};
    use super::*;

    #[test]
    fn test_os_random_fills_buffer() {
        let a: [u8; 32] = random_array(&OsRandom).unwrap();
        let b: [u8; 32] = random_array(&OsRandom).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_counting_random_is_deterministic() {
        let source = CountingRandom::new(0);
        let a: [u8; 4] = random_array(&source).unwrap();
        let b: [u8; 4] = random_array(&source).unwrap();
        assert_eq!(a, [0, 1, 2, 3]);
        assert_eq!(b, [4, 5, 6, 7]);
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn test_boxed_source_forwards() {
        let source: Box<dyn RandomSource> = Box::new(CountingRandom::new(9));
        let a: [u8; 2] = random_array(&source).unwrap();
        assert_eq!(a, [9, 10]);
    }

    #[test]
    fn test_broken_source_propagates_error() {
        let result: SealResult<[u8; 12]> = random_array(&BrokenRandom);
        assert!(matches!(result, Err(SealError::Encryption(_))));
    }
}
