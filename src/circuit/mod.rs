//! Circuit boundary
//!
//! This module models the compiled secret-proof circuit at its
//! interface: the named inputs it declares and the witness produced by
//! evaluating its constraints. The circuit itself enforces a single
//! relation, `commitment == Poseidon(secret)`, exposing the commitment
//! as its sole public output.
//!
//! The witness calculator, the proving key, and the verification key
//! are three artifacts of one compiled circuit. Swapping any one
//! without the matching others is a fatal configuration error, not a
//! runtime-recoverable condition.

pub mod witness;

// Re-export main types for convenience
pub use witness::{CircuitInput, Witness, WitnessCalculator};

/// Identity of the compiled circuit shared by all key artifacts
///
/// Derived from the constraint description, so a recompiled circuit
/// with different parameters yields a different digest.
pub fn circuit_digest() -> String {
    use crate::crypto::HashUtils;
    HashUtils::sha256_hex(&[b"zkauth.secret-proof.v1;relation=poseidon-preimage;t=2;rf=8;rp=56"])
}
