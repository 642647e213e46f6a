//! Cryptographically secure random byte source.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{AppUtilError, Result};

/// Supplier of random bytes for OTPs and tokens.
///
/// Implementations must be all-or-nothing: either the whole buffer is filled
/// or an error is returned and the buffer contents must not be used.
pub trait RandomSource: Send + Sync + std::fmt::Debug {
    fn fill(&self, buffer: &mut [u8]) -> Result<()>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        OsRandom
    }
}

impl RandomSource for OsRandom {
    fn fill(&self, buffer: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buffer)
            .map_err(|e| AppUtilError::RandomSource(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills_whole_buffer() {
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        OsRandom::new().fill(&mut first).unwrap();
        OsRandom::new().fill(&mut second).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_os_random_empty_buffer() {
        let mut buffer: [u8; 0] = [];
        assert!(OsRandom::new().fill(&mut buffer).is_ok());
    }
}
