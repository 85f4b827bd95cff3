//! Proof verifier
//!
//! Checks a proof cryptographically and binds it to a specific
//! commitment. Both checks must pass; any failure collapses into the
//! single opaque [`Error::Authentication`] so callers cannot
//! distinguish a forged proof from a proof of the wrong commitment.
//!
//! Verification is stateless: a valid proof stays valid on replay.
//! Integrations that need freshness must layer a nonce or session
//! challenge on top of this check.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::field::FieldUtils;
use crate::proof::backend::ProvingBackend;
use crate::proof::keys::VerificationKey;
use crate::types::Proof;

/// Verifies proofs of secret knowledge against a fixed verification key
pub struct ProofVerifier<B: ProvingBackend> {
    backend: Arc<B>,
    verification_key: VerificationKey,
}

impl<B: ProvingBackend> ProofVerifier<B> {
    /// Create a verifier over the given backend and verification key
    pub fn new(backend: Arc<B>, verification_key: VerificationKey) -> Self {
        Self {
            backend,
            verification_key,
        }
    }

    /// Verify a proof and bind it to the expected commitment
    ///
    /// Comparison happens on parsed field elements, so `"007"` and
    /// `"7"` name the same commitment.
    ///
    /// # Arguments
    /// * `commitment` - Expected commitment as a decimal string
    /// * `proof` - The proof object to check
    /// * `public_signals` - Public signals the proof was produced with
    ///
    /// # Returns
    /// `Ok(true)` when the proof is valid and its first public signal
    /// equals `commitment`; `Err(Error::Authentication)` otherwise
    pub fn verify(
        &self,
        commitment: &str,
        proof: &Proof,
        public_signals: &[String],
    ) -> Result<bool> {
        let expected = FieldUtils::from_dec(commitment)?;

        let valid = self
            .backend
            .verify(&self.verification_key, public_signals, proof)?;

        let bound = match public_signals.first() {
            Some(signal) => FieldUtils::from_dec(signal)? == expected,
            None => false,
        };

        if valid && bound {
            Ok(true)
        } else {
            Err(Error::Authentication)
        }
    }
}
