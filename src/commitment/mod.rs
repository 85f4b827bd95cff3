//! Commitment generation module
//!
//! This module derives the registration triple `(secret, nonce,
//! commitment)` from raw user attributes. It is the leaf of the
//! protocol: it depends on the arithmetic hash engine but never on the
//! proving backend.
//!
//! # Derivation
//!
//! ```text
//! user_hash  = Poseidon(keccak(email), keccak(name), age, country, dob)
//! secret     = Poseidon(user_hash, nonce)        nonce: 128-bit CSPRNG
//! commitment = Poseidon(secret)
//! ```

pub mod generator;

// Re-export main types for convenience
pub use generator::CommitmentGenerator;
