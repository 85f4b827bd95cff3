//! Random value generation
//!
//! This module sources the protocol's randomness from the operating
//! system CSPRNG: registration nonces and per-proof blinding bytes.

use halo2curves::bn256::Fr as Field;
use rand_core::{OsRng, RngCore};

use crate::field::FieldUtils;

/// Width of a registration nonce in bytes (128 bits)
pub const NONCE_BYTES: usize = 16;

/// Random value generation utilities
pub struct RandomUtils;

impl RandomUtils {
    /// Generate random bytes
    ///
    /// # Arguments
    /// * `len` - Number of bytes to generate
    pub fn generate_bytes(len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        OsRng.fill_bytes(&mut bytes);
        bytes
    }

    /// Draw a fresh registration nonce
    ///
    /// 128 bits of OS randomness as a field element. Wide enough that
    /// guessing a (user hash, nonce) pair stays infeasible even when the
    /// attribute space itself is enumerable.
    pub fn generate_nonce() -> Field {
        let mut bytes = [0u8; NONCE_BYTES];
        OsRng.fill_bytes(&mut bytes);
        FieldUtils::from_be_bytes_reduce(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bytes_length() {
        assert_eq!(RandomUtils::generate_bytes(32).len(), 32);
        assert_eq!(RandomUtils::generate_bytes(0).len(), 0);
    }

    #[test]
    fn test_nonces_are_unique() {
        // Two 128-bit draws colliding would indicate a broken RNG
        let a = RandomUtils::generate_nonce();
        let b = RandomUtils::generate_nonce();
        assert_ne!(a, b);
    }

    #[test]
    fn test_nonce_fits_in_128_bits() {
        use ff::PrimeField;
        let nonce = RandomUtils::generate_nonce();
        let repr = nonce.to_repr();
        // Little-endian repr: everything above byte 16 must be zero
        assert!(repr.as_ref()[NONCE_BYTES..].iter().all(|&b| b == 0));
    }
}
