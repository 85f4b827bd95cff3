//! Cryptographic primitives
//!
//! This module provides the cryptographic building blocks of the
//! protocol:
//! - Poseidon arithmetic hash over the BN254 scalar field
//! - Keccak-256 / SHA-256 byte-oriented digests
//! - OS-sourced randomness for nonces and blinding
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use zkauth::crypto::{HashUtils, Poseidon};
//!
//! let engine = Arc::new(Poseidon::new());
//! let email_field = HashUtils::keccak256_to_field("alice@ex.com");
//! let digest = engine.hash(&[email_field]).unwrap();
//! ```

pub mod hash;
pub mod poseidon;
pub mod random;

// Re-export main types for convenience
pub use hash::HashUtils;
pub use poseidon::Poseidon;
pub use random::RandomUtils;
