//! Byte-oriented hash functions
//!
//! This module provides the general-purpose collision-resistant hashes
//! used around the arithmetic hash: Keccak-256 folds variable-length
//! attribute strings into fixed-width digests before they enter the
//! field, and SHA-256 digests key material and transcripts.

use halo2curves::bn256::Fr as Field;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

use crate::field::FieldUtils;

/// Hash utilities
///
/// Provides methods for computing the byte-oriented digests the
/// protocol needs alongside Poseidon.
pub struct HashUtils;

impl HashUtils {
    /// Compute the Keccak-256 digest of a byte string
    pub fn keccak256(data: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak256::new();
        Digest::update(&mut hasher, data);
        Digest::finalize(hasher).into()
    }

    /// Keccak-256 a string and reduce the digest into the field
    ///
    /// The 256-bit digest is interpreted big-endian and reduced modulo
    /// the field, matching bigint-from-hex semantics.
    ///
    /// # Arguments
    /// * `data` - Input string to hash
    ///
    /// # Returns
    /// Field element representation of the digest
    pub fn keccak256_to_field(data: &str) -> Field {
        let digest = Self::keccak256(data.as_bytes());
        FieldUtils::from_be_bytes_reduce(&digest)
    }

    /// Compute the SHA-256 digest of a byte string
    pub fn sha256(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        Digest::update(&mut hasher, data);
        Digest::finalize(hasher).into()
    }

    /// SHA-256 over several parts, hex-encoded
    ///
    /// Used for key-material digests where the input is a concatenation
    /// of independently-sized fields.
    pub fn sha256_hex(parts: &[&[u8]]) -> String {
        let mut hasher = Sha256::new();
        for part in parts {
            Digest::update(&mut hasher, part);
        }
        hex::encode(Digest::finalize(hasher))
    }
}
